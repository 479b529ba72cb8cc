//! Text measuring and padding helpers for table cells.

use unicode_width::UnicodeWidthStr;

use super::types::Align;

/// Display width of the widest line of plain text.
pub fn display_width(s: &str) -> usize {
    s.split('\n').map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Pads already-rendered text (which may carry ANSI codes) to `width`
/// columns, given its visible width.
pub fn pad(rendered: &str, visible: usize, width: usize, align: Align) -> String {
    let gap = width.saturating_sub(visible);
    let (left, right) = match align {
        Align::Left => (0, gap),
        Align::Right => (gap, 0),
        Align::Center => (gap / 2, gap - gap / 2),
    };
    let mut out = String::with_capacity(rendered.len() + gap);
    out.extend(std::iter::repeat(' ').take(left));
    out.push_str(rendered);
    out.extend(std::iter::repeat(' ').take(right));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_wide_chars() {
        assert_eq!(display_width("\u{1F30A} Flood"), 8);
    }

    #[test]
    fn test_display_width_empty() {
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_pad_alignments() {
        assert_eq!(pad("ab", 2, 6, Align::Left), "ab    ");
        assert_eq!(pad("ab", 2, 6, Align::Right), "    ab");
        assert_eq!(pad("ab", 2, 7, Align::Center), "  ab   ");
    }

    #[test]
    fn test_pad_ignores_escape_codes() {
        let red = "\x1b[31mab\x1b[0m";
        assert_eq!(pad(red, 2, 4, Align::Left), format!("{}  ", red));
    }

    #[test]
    fn test_pad_overflow_is_untouched() {
        assert_eq!(pad("abcdef", 6, 3, Align::Center), "abcdef");
    }
}
