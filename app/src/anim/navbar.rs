/// Scrolling down past this offset hides the navbar.
pub const HIDE_THRESHOLD_PX: f64 = 100.0;

/// Past this offset the navbar picks up the "scrolled" backdrop class.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Transform applied while hidden.
pub const HIDDEN_TRANSFORM: &str = "translateY(-100%)";

/// Transform applied while visible.
pub const VISIBLE_TRANSFORM: &str = "translateY(0)";

/// What the navbar should look like after a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarUpdate {
    pub transform: &'static str,
    pub scrolled: bool,
}

/// Scroll-reactive navbar: hides while scrolling down past the threshold,
/// reappears on any upward scroll. The last offset is the only retained
/// state.
#[derive(Debug, Default)]
pub struct NavbarState {
    last_offset: f64,
    hidden: bool,
    scrolled: bool,
}

impl NavbarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, offset: f64) -> NavbarUpdate {
        self.hidden = offset > self.last_offset && offset > HIDE_THRESHOLD_PX;
        self.scrolled = offset > SCROLLED_THRESHOLD_PX;
        self.last_offset = offset;

        NavbarUpdate {
            transform: if self.hidden {
                HIDDEN_TRANSFORM
            } else {
                VISIBLE_TRANSFORM
            },
            scrolled: self.scrolled,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}
