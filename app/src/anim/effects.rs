use std::time::Duration;

/// Transform applied to a feature card on pointer enter.
pub const HOVER_LIFT: &str = "translateY(-8px) scale(1.02)";

/// Transform applied on pointer leave.
pub const HOVER_REST: &str = "translateY(0) scale(1)";

/// Lifetime of a ripple overlay before removal.
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);

/// Vertical parallax factor applied to the hero on scroll.
pub const PARALLAX_FACTOR: f64 = 0.5;

/// Hero translation for a given scroll offset.
pub fn parallax_translate(offset: f64) -> f64 {
    offset * PARALLAX_FACTOR
}

/// Bounding box of a clicked element, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Geometry of a click ripple: a circle sized to the button's larger
/// dimension, centered on the click point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    pub fn at(rect: Rect, click_x: f64, click_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            x: click_x - rect.left - size / 2.0,
            y: click_y - rect.top - size / 2.0,
        }
    }
}
