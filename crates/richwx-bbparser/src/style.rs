//! Mergeable tag styles.

use console::{Attribute, Color, Style};

/// The styling one tag word contributes.
///
/// `console::Style` can't be inspected or combined, so nested and compound
/// tags (`[red bold]`, `[bold][red]...`) are merged here first and converted
/// to a `Style` only when a run of text is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagStyle {
    fg: Option<Color>,
    fg_bright: bool,
    bg: Option<Color>,
    bg_bright: bool,
    attrs: Vec<Attribute>,
}

impl TagStyle {
    /// A style that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color.
    #[must_use]
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self.fg_bright = false;
        self
    }

    /// Marks the foreground color as the bright variant.
    #[must_use]
    pub fn bright(mut self) -> Self {
        self.fg_bright = true;
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self.bg_bright = false;
        self
    }

    /// Marks the background color as the bright variant.
    #[must_use]
    pub fn on_bright(mut self) -> Self {
        self.bg_bright = true;
        self
    }

    /// Adds a text attribute.
    #[must_use]
    pub fn attr(mut self, attr: Attribute) -> Self {
        if !self.attrs.contains(&attr) {
            self.attrs.push(attr);
        }
        self
    }

    /// Returns true if this style sets nothing.
    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    /// Moves the foreground color into the background slot.
    ///
    /// Used for `on <color>` in tags, where the color word is defined as a
    /// foreground style.
    pub fn as_background(&self) -> Self {
        Self {
            fg: None,
            fg_bright: false,
            bg: self.fg,
            bg_bright: self.fg_bright,
            attrs: Vec::new(),
        }
    }

    /// Layers `other` on top of `self`.
    ///
    /// Colors set by `other` win; attributes accumulate.
    pub fn merge(&self, other: &TagStyle) -> TagStyle {
        let mut merged = self.clone();
        if other.fg.is_some() {
            merged.fg = other.fg;
            merged.fg_bright = other.fg_bright;
        }
        if other.bg.is_some() {
            merged.bg = other.bg;
            merged.bg_bright = other.bg_bright;
        }
        for attr in &other.attrs {
            if !merged.attrs.contains(attr) {
                merged.attrs.push(*attr);
            }
        }
        merged
    }

    /// Converts to a `console::Style` that always emits escape codes.
    ///
    /// Whether to color at all is decided by the parser's transform, not by
    /// console's terminal detection.
    pub fn to_style(&self) -> Style {
        let mut style = Style::new().force_styling(true);
        if let Some(color) = self.fg {
            style = style.fg(color);
            if self.fg_bright {
                style = style.bright();
            }
        }
        if let Some(color) = self.bg {
            style = style.bg(color);
            if self.bg_bright {
                style = style.on_bright();
            }
        }
        for attr in &self.attrs {
            style = style.attr(*attr);
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_color() {
        let red = TagStyle::new().fg(Color::Red);
        let blue = TagStyle::new().fg(Color::Blue).bright();
        assert_eq!(red.merge(&blue), TagStyle::new().fg(Color::Blue).bright());
    }

    #[test]
    fn test_merge_keeps_color_when_other_has_none() {
        let red = TagStyle::new().fg(Color::Red);
        let bold = TagStyle::new().attr(Attribute::Bold);
        let merged = red.merge(&bold);
        assert_eq!(merged, TagStyle::new().fg(Color::Red).attr(Attribute::Bold));
    }

    #[test]
    fn test_attrs_deduplicate() {
        let style = TagStyle::new()
            .attr(Attribute::Bold)
            .merge(&TagStyle::new().attr(Attribute::Bold));
        assert_eq!(style, TagStyle::new().attr(Attribute::Bold));
    }

    #[test]
    fn test_as_background() {
        let style = TagStyle::new().fg(Color::Red).attr(Attribute::Bold).as_background();
        assert_eq!(style, TagStyle::new().bg(Color::Red));
    }

    #[test]
    fn test_to_style_emits_codes() {
        let out = TagStyle::new().fg(Color::Red).to_style().apply_to("x").to_string();
        assert!(out.contains("\x1b[31m"));
    }

    #[test]
    fn test_plain() {
        assert!(TagStyle::new().is_plain());
        assert!(!TagStyle::new().attr(Attribute::Dim).is_plain());
    }
}
