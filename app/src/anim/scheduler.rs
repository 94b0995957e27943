use std::time::Duration;

/// Cancellation handle for a scheduled task.
///
/// Every registration returns one, including the pipeline cycler's
/// repeating timer, so nothing has to run for the lifetime of the page
/// unless its owner chooses to let it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// A single task that became due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Firing<T> {
    pub handle: TimerHandle,
    /// The instant the task was due, not the instant it was observed.
    /// Follow-on work scheduled from here stays exact.
    pub at: Duration,
    pub tag: T,
}

#[derive(Debug)]
struct Entry<T> {
    id: u64,
    due: Duration,
    period: Option<Duration>,
    tag: T,
}

/// Deterministic timer queue. One-shot and repeating tasks are registered
/// against an explicit "now" and drained with [`Scheduler::pop_due`];
/// repeating tasks re-arm themselves from their due time, so a large jump
/// of the clock fires every elapsed period in order.
#[derive(Debug)]
pub struct Scheduler<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule a one-shot task `delay` after `now`.
    pub fn once(&mut self, now: Duration, delay: Duration, tag: T) -> TimerHandle {
        self.insert(now + delay, None, tag)
    }

    /// Schedule a repeating task, first firing one `period` after `now`.
    /// A zero period would never make progress and is rejected.
    pub fn every(&mut self, now: Duration, period: Duration, tag: T) -> TimerHandle {
        assert!(period > Duration::ZERO, "repeating task needs a non-zero period");
        self.insert(now + period, Some(period), tag)
    }

    fn insert(&mut self, due: Duration, period: Option<Duration>, tag: T) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due,
            period,
            tag,
        });
        TimerHandle(id)
    }

    /// Cancel a task. Returns false if it already fired (one-shot) or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != handle.0);
        self.entries.len() != before
    }

    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|entry| entry.id == handle.0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> Scheduler<T> {
    /// Remove and return the earliest task due at or before `now`, oldest
    /// registration first on ties. Repeating tasks re-arm from their due
    /// time before being returned.
    pub fn pop_due(&mut self, now: Duration) -> Option<Firing<T>> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= now)
            .min_by_key(|(_, entry)| (entry.due, entry.id))
            .map(|(index, _)| index)?;

        let entry = &mut self.entries[index];
        let firing = Firing {
            handle: TimerHandle(entry.id),
            at: entry.due,
            tag: entry.tag.clone(),
        };

        if let Some(period) = entry.period {
            entry.due += period;
        } else {
            self.entries.swap_remove(index);
        }

        Some(firing)
    }

    /// Drain everything due at or before `now` in firing order.
    pub fn advance_to(&mut self, now: Duration) -> Vec<Firing<T>> {
        let mut fired = Vec::new();
        while let Some(firing) = self.pop_due(now) {
            fired.push(firing);
        }
        fired
    }
}
