//! Turning markup into terminal output.

use std::collections::HashMap;

use richwx_bbparser::{escape, unescape, BBParser, TagTransform};
use unicode_width::UnicodeWidthStr;

use crate::icons::expand_icons;
use crate::output::OutputMode;
use crate::palette;

/// Applies markup for one output mode.
///
/// Icons are expanded first, then tags are applied or stripped. In
/// `TermDebug` mode markup passes through untouched and is measured and
/// wrapped as plain text, tags included.
///
/// ```rust
/// use richwx_render::{OutputMode, Styler};
///
/// let styler = Styler::new(OutputMode::Text);
/// assert_eq!(styler.apply("[red bold]Tornado Warning[/] :tornado:"), "Tornado Warning \u{1F32A}");
/// ```
#[derive(Debug, Clone)]
pub struct Styler {
    mode: OutputMode,
    parser: BBParser,
}

impl Styler {
    /// A styler with the palette for `mode`.
    pub fn new(mode: OutputMode) -> Self {
        let parser = if mode.is_debug() {
            BBParser::new(HashMap::new(), TagTransform::Remove)
        } else {
            palette::parser(mode.transform())
        };
        Self { mode, parser }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Renders markup for display.
    pub fn apply(&self, markup: &str) -> String {
        if self.mode.is_debug() {
            return markup.to_string();
        }
        let expanded = expand_icons(markup);
        let (output, errors) = self.parser.parse_with_diagnostics(&expanded);
        if !errors.is_empty() {
            log::debug!("markup problems in {:?}: {}", markup, errors);
        }
        output
    }

    /// Visible text of the markup, without styling.
    pub fn plain(&self, markup: &str) -> String {
        if self.mode.is_debug() {
            return markup.to_string();
        }
        self.parser.plain(&expand_icons(markup))
    }

    /// Display width of the widest line of the markup.
    pub fn width(&self, markup: &str) -> usize {
        self.plain(markup)
            .split('\n')
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0)
    }

    /// Wraps markup into lines of at most `width` columns.
    ///
    /// Each returned line is balanced markup that can be passed to
    /// [`Styler::apply`] on its own.
    pub fn wrap(&self, markup: &str, width: usize) -> Vec<String> {
        if self.mode.is_debug() {
            return self
                .parser
                .wrap(&escape(markup), width)
                .iter()
                .map(|line| unescape(line))
                .collect();
        }
        self.parser.wrap(&expand_icons(markup), width)
    }
}

/// Terminal width, or 100 columns when stdout isn't a terminal.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_applies() {
        let out = Styler::new(OutputMode::Term).apply("[red]x[/]");
        assert!(out.contains("\x1b[31m"));
    }

    #[test]
    fn test_text_strips_and_expands() {
        let styler = Styler::new(OutputMode::Text);
        assert_eq!(styler.apply("[blue]:water_wave: Flood[/]"), "\u{1F30A} Flood");
    }

    #[test]
    fn test_debug_keeps_everything() {
        let styler = Styler::new(OutputMode::TermDebug);
        assert_eq!(styler.apply("[red]:fire:[/]"), "[red]:fire:[/]");
        assert_eq!(styler.width("[red]x[/]"), 9);
    }

    #[test]
    fn test_debug_wrap_counts_tags() {
        let styler = Styler::new(OutputMode::TermDebug);
        assert_eq!(styler.wrap("[red]ab cd[/]", 8), vec!["[red]ab", "cd[/]"]);
    }

    #[test]
    fn test_width_counts_glyphs_and_lines() {
        let styler = Styler::new(OutputMode::Text);
        assert_eq!(styler.width("[red]Storm[/]\n:tornado: "), 5);
        assert_eq!(styler.width(":tornado: :eyes: "), 6);
    }

    #[test]
    fn test_unknown_tag_is_visible_text() {
        let styler = Styler::new(OutputMode::Text);
        assert_eq!(styler.apply("[NWS Boston] office"), "[NWS Boston] office");
    }

    #[test]
    fn test_wrap_expands_icons() {
        let styler = Styler::new(OutputMode::Text);
        let lines = styler.wrap(":tornado: :eyes:", 2);
        assert_eq!(lines, vec!["\u{1F32A}", "\u{1F440}"]);
    }
}
