use std::time::Duration;

/// Delay after page load before typing begins.
pub const START_DELAY: Duration = Duration::from_millis(1000);

/// Interval between revealed characters.
pub const CHAR_INTERVAL: Duration = Duration::from_millis(50);

/// Reveals the hero title one character at a time until the original text
/// is fully restored. Advances by Unicode scalar values, not bytes.
#[derive(Debug)]
pub struct Typewriter {
    text: String,
    byte_end: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            byte_end: 0,
        }
    }

    /// Reveal one more character and return the visible prefix, or None
    /// when the full text is already shown.
    pub fn tick(&mut self) -> Option<&str> {
        let next = self.text[self.byte_end..].chars().next()?;
        self.byte_end += next.len_utf8();
        Some(&self.text[..self.byte_end])
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.byte_end]
    }

    pub fn is_done(&self) -> bool {
        self.byte_end == self.text.len()
    }
}
