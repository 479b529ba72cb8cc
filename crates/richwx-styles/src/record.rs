//! The fixed visual identity of one alert category.

use serde::Serialize;

/// Color token used when a category has no registered presentation.
///
/// No registered category uses this token, so an unrecognized category
/// stands out in a table instead of blending in with a real alert.
pub const FALLBACK_COLOR: &str = "bright_red";

/// Color, icons and label for an alert category.
///
/// Records in the registry borrow `'static` data from the built-in table.
/// The fallback record produced for an unknown category borrows the
/// category string it was asked about, which is why the record is generic
/// over a lifetime instead of owning its strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PresentationRecord<'a> {
    /// Category identifier exactly as the API spells it.
    pub category: &'a str,
    /// Palette token understood by the terminal renderer.
    pub color: &'a str,
    /// Icon shortcodes, in display order.
    pub icons: &'a [&'a str],
}

impl<'a> PresentationRecord<'a> {
    /// Creates a record.
    pub const fn new(category: &'a str, color: &'a str, icons: &'a [&'a str]) -> Self {
        Self {
            category,
            color,
            icons,
        }
    }

    /// The presentation used for a category the registry doesn't know.
    ///
    /// The label is the unrecognized string verbatim.
    pub const fn fallback(category: &'a str) -> Self {
        Self::new(category, FALLBACK_COLOR, &[])
    }

    /// Returns true if this record carries at least one icon.
    pub fn has_icons(&self) -> bool {
        !self.icons.is_empty()
    }
}
