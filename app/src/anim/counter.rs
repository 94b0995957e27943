use std::time::Duration;

/// Delay between a stat entering the viewport and its tween starting.
pub const START_DELAY: Duration = Duration::from_millis(500);

/// Total tween duration.
pub const TWEEN_DURATION: Duration = Duration::from_millis(2000);

/// Tick interval of the tween.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Fraction of the stats section that must be visible to trigger.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Unit shape of a stat display value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatFormat {
    /// "45%"
    Percent,
    /// "15min"
    Minutes,
    /// "24/7": only the numerator animates, the denominator is kept
    Ratio(String),
}

/// A stat display value that can be counted up from zero.
#[derive(Debug, Clone, PartialEq)]
pub struct StatPattern {
    target: f64,
    /// Original numeric text, reassembled verbatim in the final frame so
    /// "99.9%" does not end as "99%".
    number: String,
    format: StatFormat,
}

impl StatPattern {
    /// Detect the pattern of a stat's displayed text. Checked in order:
    /// percent, minutes, ratio. Anything else is left untouched.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let format = if text.contains('%') {
            StatFormat::Percent
        } else if text.contains("min") {
            StatFormat::Minutes
        } else if let Some((_, denominator)) = text.split_once('/') {
            StatFormat::Ratio(denominator.to_string())
        } else {
            return None;
        };

        let number: String = text
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let target: f64 = number.parse().ok()?;

        Some(Self {
            target,
            number,
            format,
        })
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Zero-valued placeholder shown while waiting for the tween to start.
    pub fn placeholder(&self) -> String {
        self.with_number("0")
    }

    /// Intermediate frame: whole numbers only.
    pub fn render_progress(&self, value: f64) -> String {
        self.with_number(&format!("{}", value.floor() as i64))
    }

    /// Final frame: the original numeric text, exactly.
    pub fn render_target(&self) -> String {
        self.with_number(&self.number)
    }

    fn with_number(&self, number: &str) -> String {
        match &self.format {
            StatFormat::Percent => format!("{number}%"),
            StatFormat::Minutes => format!("{number}min"),
            StatFormat::Ratio(denominator) => format!("{number}/{denominator}"),
        }
    }
}

/// Counts a stat up from zero to its target with a fixed per-tick
/// increment, clamping at the target and stopping itself there.
#[derive(Debug)]
pub struct CounterAnimation {
    pattern: StatPattern,
    current: f64,
    increment: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(pattern: StatPattern) -> Self {
        let ticks = (TWEEN_DURATION.as_millis() / TICK_INTERVAL.as_millis()) as f64;
        let increment = pattern.target() / ticks;
        Self {
            pattern,
            current: 0.0,
            increment,
            done: false,
        }
    }

    /// Produce the next frame, or None once the target has been rendered.
    pub fn tick(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.pattern.target() {
            self.done = true;
            return Some(self.pattern.render_target());
        }
        Some(self.pattern.render_progress(self.current))
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_percent() {
        let pattern = StatPattern::parse("45%").unwrap();
        assert_eq!(pattern.target(), 45.0);
        assert_eq!(pattern.placeholder(), "0%");
        assert_eq!(pattern.render_target(), "45%");
    }

    #[test]
    fn parses_minutes() {
        let pattern = StatPattern::parse("15min").unwrap();
        assert_eq!(pattern.target(), 15.0);
        assert_eq!(pattern.placeholder(), "0min");
        assert_eq!(pattern.render_target(), "15min");
    }

    #[test]
    fn parses_ratio_keeping_denominator() {
        let pattern = StatPattern::parse("24/7").unwrap();
        assert_eq!(pattern.target(), 24.0);
        assert_eq!(pattern.placeholder(), "0/7");
        assert_eq!(pattern.render_target(), "24/7");
    }

    #[test]
    fn non_numeric_text_is_left_untouched() {
        assert_eq!(StatPattern::parse("DevOps"), None);
        assert_eq!(StatPattern::parse(""), None);
    }

    #[test]
    fn fractional_target_survives_the_final_frame() {
        let pattern = StatPattern::parse("99.9%").unwrap();
        assert_eq!(pattern.target(), 99.9);
        assert_eq!(pattern.render_target(), "99.9%");
    }

    #[test]
    fn tween_starts_at_zero_and_ends_exactly_at_target() {
        let pattern = StatPattern::parse("45%").unwrap();
        let mut counter = CounterAnimation::new(pattern);

        let first = counter.tick().unwrap();
        assert_eq!(first, "0%");

        let mut last = first;
        let mut ticks = 1;
        while let Some(frame) = counter.tick() {
            last = frame;
            ticks += 1;
            assert!(ticks <= 200, "tween failed to terminate");
        }

        assert_eq!(last, "45%");
        assert!(counter.is_done());
        // 2000ms / 16ms = 125 ticks, plus at most one clamping tick
        assert!((125..=126).contains(&ticks));
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let pattern = StatPattern::parse("0%").unwrap();
        let mut counter = CounterAnimation::new(pattern);
        assert_eq!(counter.tick(), Some("0%".to_string()));
        assert_eq!(counter.tick(), None);
    }

    #[test]
    fn frames_are_monotonic() {
        let pattern = StatPattern::parse("120/7").unwrap();
        let mut counter = CounterAnimation::new(pattern);
        let mut previous = -1i64;
        while let Some(frame) = counter.tick() {
            let numerator: i64 = frame.split('/').next().unwrap().parse().unwrap();
            assert!(numerator >= previous);
            previous = numerator;
        }
        assert_eq!(previous, 120);
    }
}
