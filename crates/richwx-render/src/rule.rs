//! Horizontal rules.

use richwx_bbparser::escape;

use crate::markup::Styler;

const RULE_CHAR: char = '─';
const RULE_STYLE: &str = "bright_green";

/// A full-width line with an optional centered title.
///
/// ```rust
/// use richwx_render::{rule, OutputMode, Styler};
///
/// let styler = Styler::new(OutputMode::Text);
/// assert_eq!(rule(&styler, Some("Sample"), 15), "──── Sample ───");
/// assert_eq!(rule(&styler, None, 4), "────");
/// ```
pub fn rule(styler: &Styler, title: Option<&str>, width: usize) -> String {
    let line = |n: usize| -> String {
        let chars: String = std::iter::repeat(RULE_CHAR).take(n).collect();
        styler.apply(&format!("[{}]{}[/]", RULE_STYLE, escape(&chars)))
    };

    let Some(title) = title else {
        return line(width);
    };

    let title_width = styler.width(title);
    if title_width + 4 > width {
        return styler.apply(title);
    }

    let sides = width - title_width - 2;
    let left = sides - sides / 2;
    let right = sides / 2;
    format!("{} {} {}", line(left), styler.apply(title), line(right))
}
