use std::time::Duration;

/// Scroll handlers run at most once per window (16 ms on the page).
pub const SCROLL_WINDOW: Duration = Duration::from_millis(16);

/// Gate that admits at most one call per time window.
#[derive(Debug)]
pub struct Throttle {
    window: Duration,
    open_at: Duration,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            open_at: Duration::ZERO,
        }
    }

    /// Returns true if a call at `now` is admitted, closing the gate for
    /// the rest of the window.
    pub fn admit(&mut self, now: Duration) -> bool {
        if now >= self.open_at {
            self.open_at = now + self.window;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn admits_first_call() {
        let mut throttle = Throttle::new(SCROLL_WINDOW);
        assert!(throttle.admit(ms(0)));
    }

    #[test]
    fn rejects_within_window_then_reopens() {
        let mut throttle = Throttle::new(SCROLL_WINDOW);
        assert!(throttle.admit(ms(0)));
        assert!(!throttle.admit(ms(5)));
        assert!(!throttle.admit(ms(15)));
        assert!(throttle.admit(ms(16)));
        assert!(!throttle.admit(ms(17)));
    }

    #[test]
    fn at_most_one_call_per_window() {
        let mut throttle = Throttle::new(SCROLL_WINDOW);
        let admitted = (0..100).filter(|&t| throttle.admit(ms(t))).count();
        // 100 ms of 1 ms scroll events through a 16 ms gate
        assert_eq!(admitted, 7);
    }
}
