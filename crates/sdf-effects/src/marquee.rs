//! Endlessly scrolling text strip.

/// Default milliseconds per one-column shift.
pub const DEFAULT_STEP_MS: u64 = 80;

/// Horizontal marquee over a repeated string.
///
/// Stateless: the visible window is a pure function of elapsed time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marquee {
    chars: Vec<char>,
    step_ms: u64,
}

impl Marquee {
    pub fn new(text: &str, step_ms: u64) -> Self {
        Self {
            chars: text.chars().collect(),
            step_ms: step_ms.max(1),
        }
    }

    /// Visible `width` columns at `elapsed_ms`, shifted left one column per step.
    pub fn frame(&self, elapsed_ms: u64, width: usize) -> String {
        if self.chars.is_empty() {
            return " ".repeat(width);
        }
        let shift = ((elapsed_ms / self.step_ms) % self.chars.len() as u64) as usize;
        self.chars.iter().cycle().skip(shift).take(width).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shifts_one_column_per_step() {
        let marquee = Marquee::new("ABCD", 100);
        assert_eq!(marquee.frame(0, 6), "ABCDAB");
        assert_eq!(marquee.frame(99, 6), "ABCDAB");
        assert_eq!(marquee.frame(100, 6), "BCDABC");
        assert_eq!(marquee.frame(350, 3), "DAB");
    }

    #[test]
    fn test_wraps_after_full_length() {
        let marquee = Marquee::new("ABCD", 100);
        assert_eq!(marquee.frame(400, 4), marquee.frame(0, 4));
    }

    #[test]
    fn test_empty_text_is_blank() {
        assert_eq!(Marquee::new("", 100).frame(1234, 3), "   ");
    }

    #[test]
    fn test_zero_step_does_not_divide_by_zero() {
        assert_eq!(Marquee::new("AB", 0).frame(1, 2), "BA");
    }
}
