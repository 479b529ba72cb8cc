//! Per-render emphasis flags.

/// Modifiers layered on top of a category's base presentation for one render.
///
/// Emphasis is chosen by the caller for each alert (for instance, bold the
/// whole entry when the alert's severity is `Extreme`) and is never stored on
/// the registry's records.
///
/// # Example
///
/// ```rust
/// use richwx_styles::Emphasis;
///
/// let emphasis = Emphasis::new().bold().newline_after_icons();
/// assert!(emphasis.bold);
/// assert!(!emphasis.italic);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Emphasis {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Put the icons on their own line below the label.
    pub newline_after_icons: bool,
}

impl Emphasis {
    /// No emphasis at all.
    pub const NONE: Emphasis = Emphasis {
        bold: false,
        italic: false,
        underline: false,
        newline_after_icons: false,
    };

    /// Creates an empty flag set.
    pub const fn new() -> Self {
        Self::NONE
    }

    /// Turns on bold.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Turns on italic.
    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Turns on underline.
    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Moves the icons below the label.
    #[must_use]
    pub const fn newline_after_icons(mut self) -> Self {
        self.newline_after_icons = true;
        self
    }

    /// Style modifier tokens in tag order: bold, italic, underline.
    pub fn modifiers(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.bold, "bold"),
            (self.italic, "italic"),
            (self.underline, "underline"),
        ]
        .into_iter()
        .filter_map(|(enabled, token)| enabled.then_some(token))
    }
}
