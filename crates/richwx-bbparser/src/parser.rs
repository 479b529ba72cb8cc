//! The markup parser.

use std::collections::HashMap;

use crate::error::{ParseError, ParseErrors};
use crate::style::TagStyle;
use crate::token::{tokenize, unescape, Token};

/// What the parser does with recognized tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTransform {
    /// Leave the input untouched, tags and all. Useful for debugging templates.
    Keep,
    /// Drop tags, keep text.
    Remove,
    /// Replace tags with ANSI escape codes.
    Apply,
}

/// Parses `[style]text[/]` markup.
///
/// Tag bodies are whitespace-separated style names looked up in the parser's
/// style map, so `[red bold]` combines the `red` and `bold` entries.
/// `on <name>` uses a color as the background. Nested tags merge with
/// their parents, and each run of text is styled once.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use console::{Attribute, Color};
/// use richwx_bbparser::{BBParser, TagStyle, TagTransform};
///
/// let mut styles = HashMap::new();
/// styles.insert("red".to_string(), TagStyle::new().fg(Color::Red));
/// styles.insert("bold".to_string(), TagStyle::new().attr(Attribute::Bold));
///
/// let parser = BBParser::new(styles, TagTransform::Remove);
/// assert_eq!(parser.parse("[red bold]Tornado Warning[/] nearby"), "Tornado Warning nearby");
/// ```
#[derive(Debug, Clone)]
pub struct BBParser {
    styles: HashMap<String, TagStyle>,
    transform: TagTransform,
}

impl BBParser {
    /// A parser over `styles` that handles tags per `transform`.
    pub fn new(styles: HashMap<String, TagStyle>, transform: TagTransform) -> Self {
        Self { styles, transform }
    }

    /// How this parser treats tags.
    pub fn transform(&self) -> TagTransform {
        self.transform
    }

    /// Returns a parser sharing this one's styles with a different transform.
    #[must_use]
    pub fn with_transform(&self, transform: TagTransform) -> Self {
        Self {
            styles: self.styles.clone(),
            transform,
        }
    }

    /// Parses markup, ignoring diagnostics.
    pub fn parse(&self, input: &str) -> String {
        self.parse_with_diagnostics(input).0
    }

    /// Text content of the markup with every recognized tag removed.
    ///
    /// Independent of the parser's transform; used to measure display width.
    pub fn plain(&self, input: &str) -> String {
        self.run(input, TagTransform::Remove).0
    }

    /// Parses markup and reports any problems found along the way.
    pub fn parse_with_diagnostics(&self, input: &str) -> (String, ParseErrors) {
        self.run(input, self.transform)
    }

    /// Resolves a tag body such as `white bold on red` to a style.
    ///
    /// Returns the first unknown word on failure.
    pub(crate) fn resolve<'a>(&self, body: &'a str) -> Result<TagStyle, &'a str> {
        let mut style = TagStyle::new();
        let mut words = body.split_whitespace();
        while let Some(word) = words.next() {
            if word == "on" {
                let color = words.next().ok_or(word)?;
                let bg = self.styles.get(color).ok_or(color)?;
                style = style.merge(&bg.as_background());
            } else {
                let next = self.styles.get(word).ok_or(word)?;
                style = style.merge(next);
            }
        }
        Ok(style)
    }

    /// Returns true if the token is a tag this parser will act on.
    ///
    /// Open tags with unknown styles, and named close tags with unknown
    /// styles, are left in the output as text.
    pub(crate) fn is_live_tag(&self, token: &Token<'_>) -> bool {
        match token {
            Token::Text(_) => false,
            Token::Open(body) => self.resolve(body).is_ok(),
            Token::Close(None) => true,
            Token::Close(Some(name)) => self.resolve(name).is_ok(),
        }
    }

    fn run(&self, input: &str, transform: TagTransform) -> (String, ParseErrors) {
        let mut errors = ParseErrors::default();
        let mut out = String::with_capacity(input.len());
        let mut run = String::new();
        let mut stack: Vec<(&str, TagStyle)> = Vec::new();

        for token in tokenize(input) {
            match token {
                Token::Text(raw) => run.push_str(&unescape(raw)),
                Token::Open(body) => match self.resolve(body) {
                    Ok(style) => {
                        flush(&mut out, &mut run, &stack, transform);
                        let merged = match stack.last() {
                            Some((_, parent)) => parent.merge(&style),
                            None => style,
                        };
                        stack.push((body, merged));
                    }
                    Err(word) => {
                        errors.push(ParseError::UnknownStyle {
                            tag: token.raw(),
                            style: word.to_string(),
                        });
                        run.push_str(&token.raw());
                    }
                },
                Token::Close(name) => {
                    let position = match name {
                        None => stack.len().checked_sub(1),
                        Some(name) => stack.iter().rposition(|(body, _)| *body == name),
                    };
                    match position {
                        Some(position) => {
                            flush(&mut out, &mut run, &stack, transform);
                            if position + 1 != stack.len() {
                                if let Some((expected, _)) = stack.last() {
                                    errors.push(ParseError::MismatchedClose {
                                        expected: format!("[/{}]", expected),
                                        found: token.raw(),
                                    });
                                }
                            }
                            stack.truncate(position);
                        }
                        None if !self.is_live_tag(&token) => run.push_str(&token.raw()),
                        None => errors.push(ParseError::UnexpectedClose { tag: token.raw() }),
                    }
                }
            }
        }

        flush(&mut out, &mut run, &stack, transform);
        for (body, _) in &stack {
            errors.push(ParseError::UnbalancedTag {
                tag: format!("[{}]", body),
            });
        }

        if transform == TagTransform::Keep {
            return (input.to_string(), errors);
        }
        (out, errors)
    }
}

fn flush(out: &mut String, run: &mut String, stack: &[(&str, TagStyle)], transform: TagTransform) {
    if run.is_empty() {
        return;
    }
    match (transform, stack.last()) {
        (TagTransform::Apply, Some((_, style))) if !style.is_plain() => {
            out.push_str(&style.to_style().apply_to(run.as_str()).to_string());
        }
        _ => out.push_str(run),
    }
    run.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::{Attribute, Color};

    fn styles() -> HashMap<String, TagStyle> {
        let mut styles = HashMap::new();
        styles.insert("red".to_string(), TagStyle::new().fg(Color::Red));
        styles.insert("white".to_string(), TagStyle::new().fg(Color::White));
        styles.insert("bold".to_string(), TagStyle::new().attr(Attribute::Bold));
        styles
    }

    #[test]
    fn test_remove_compound_tag() {
        let parser = BBParser::new(styles(), TagTransform::Remove);
        assert_eq!(parser.parse("[red bold]hi[/] there"), "hi there");
    }

    #[test]
    fn test_unknown_style_is_literal() {
        let parser = BBParser::new(styles(), TagTransform::Remove);
        let (out, errors) = parser.parse_with_diagnostics("[NWS Boston] issued");
        assert_eq!(out, "[NWS Boston] issued");
        assert!(matches!(
            errors.iter().next(),
            Some(ParseError::UnknownStyle { style, .. }) if style == "NWS"
        ));
    }

    #[test]
    fn test_unknown_close_is_literal() {
        let parser = BBParser::new(styles(), TagTransform::Remove);
        assert_eq!(parser.parse("a[/NWS]b"), "a[/NWS]b");
    }

    #[test]
    fn test_escaped_tag_is_literal() {
        let parser = BBParser::new(styles(), TagTransform::Apply);
        assert_eq!(parser.parse("\\[red]x"), "[red]x");
    }

    #[test]
    fn test_background() {
        let parser = BBParser::new(styles(), TagTransform::Apply);
        let out = parser.parse("[white on red]x[/]");
        assert!(out.contains("\x1b[37m"));
        assert!(out.contains("\x1b[41m"));
    }

    #[test]
    fn test_on_without_color_is_unknown() {
        let parser = BBParser::new(styles(), TagTransform::Remove);
        let (out, errors) = parser.parse_with_diagnostics("[white on]x[/]");
        // the stray [/] has nothing to close and is dropped
        assert_eq!(out, "[white on]x");
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_bare_close_pops_innermost() {
        let parser = BBParser::new(styles(), TagTransform::Apply);
        let out = parser.parse("[bold]a[red]b[/]c[/]");
        // "c" is bold but no longer red
        let c_part = &out[out.rfind('c').unwrap() - 4..];
        assert!(c_part.contains("\x1b[1m"));
        assert!(!c_part.contains("\x1b[31m"));
    }

    #[test]
    fn test_mismatched_close_reports_and_recovers() {
        let parser = BBParser::new(styles(), TagTransform::Remove);
        let (out, errors) = parser.parse_with_diagnostics("[bold][red]x[/bold]y");
        assert_eq!(out, "xy");
        assert!(matches!(
            errors.iter().next(),
            Some(ParseError::MismatchedClose { .. })
        ));
    }

    #[test]
    fn test_keep_returns_input() {
        let parser = BBParser::new(styles(), TagTransform::Keep);
        assert_eq!(parser.parse("\\[x] [red]y[/]"), "\\[x] [red]y[/]");
    }

    #[test]
    fn test_plain_ignores_transform() {
        let parser = BBParser::new(styles(), TagTransform::Apply);
        assert_eq!(parser.plain("[red]x[/] y"), "x y");
    }

    #[test]
    fn test_newline_inside_tag() {
        let parser = BBParser::new(styles(), TagTransform::Remove);
        assert_eq!(parser.parse("[red]a[/]\nb"), "a\nb");
    }

    #[test]
    fn test_with_transform() {
        let parser = BBParser::new(styles(), TagTransform::Apply).with_transform(TagTransform::Remove);
        assert_eq!(parser.transform(), TagTransform::Remove);
        assert_eq!(parser.parse("[red]x[/]"), "x");
    }
}
