use std::time::Duration;

/// Intersection threshold for viewport-entry animations.
pub const VIEWPORT_THRESHOLD: f64 = 0.1;

/// Bottom root margin of the viewport observer, in pixels.
pub const ROOT_MARGIN_BOTTOM_PX: f64 = -50.0;

/// Delay after window load before the staged reveal begins.
pub const LOAD_REVEAL_DELAY: Duration = Duration::from_millis(500);

/// Stagger between consecutive elements in the staged reveal.
pub const LOAD_REVEAL_STAGGER: Duration = Duration::from_millis(100);

/// One-shot "animate-in" tracking for a fixed set of elements. Entering
/// the viewport (or the load sequence) reveals an element once; repeats
/// are idempotent.
#[derive(Debug)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Mark an element revealed. Returns true only the first time, so the
    /// class add happens once. Out-of-range indexes are ignored.
    pub fn enter(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

/// The staged reveal schedule fired after window load: element `i` is
/// revealed `LOAD_REVEAL_DELAY + i * LOAD_REVEAL_STAGGER` after load.
pub fn load_schedule(count: usize) -> impl Iterator<Item = (usize, Duration)> {
    (0..count).map(|index| (index, LOAD_REVEAL_DELAY + LOAD_REVEAL_STAGGER * index as u32))
}
