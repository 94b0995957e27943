use std::time::Duration;

/// Period between pipeline diagram ticks.
pub const CYCLE_PERIOD: Duration = Duration::from_millis(2000);

/// Fraction of the diagram that must be visible before cycling starts.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Cyclic highlight over the pipeline diagram steps. Each tick activates
/// every step up to and including the current index, then advances the
/// index modulo the step count.
#[derive(Debug)]
pub struct PipelineCycler {
    current: usize,
    len: usize,
}

impl PipelineCycler {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    /// Advance one tick. Returns the inclusive index through which steps
    /// are active, or None for an empty diagram.
    pub fn tick(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let active_through = self.current;
        self.current = (self.current + 1) % self.len;
        Some(active_through)
    }

    /// Index the next tick will highlight through.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
