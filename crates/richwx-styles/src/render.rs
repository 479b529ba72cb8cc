//! Composes a presentation and emphasis flags into a markup string.
//!
//! # Output Shape
//!
//! ```text
//! [<color> <bold> <italic> <underline>]<label>[/]<newline?><icon> <icon> ...
//! ```
//!
//! - Modifiers appear only when enabled, always in the order shown.
//! - Icons follow the label, each followed by a single space.
//! - With `newline_after_icons`, a line break separates the label from its
//!   icons. A category without icons never gets the line break.
//!
//! Unknown categories render with [`FALLBACK_COLOR`](crate::FALLBACK_COLOR),
//! no icons, and the unrecognized text as the label. A `[` in any label is
//! written as `\[` so it reaches the screen as text, not as a tag.

use std::borrow::Cow;

use crate::emphasis::Emphasis;
use crate::record::PresentationRecord;
use crate::registry::PresentationRegistry;

/// Renders a category against the global registry.
///
/// # Example
///
/// ```rust
/// use richwx_styles::{render, Emphasis};
///
/// assert_eq!(
///     render("Flood Warning", Emphasis::new().bold()),
///     "[bright_green bold]Flood Warning[/]:exclamation_mark: :water_wave: "
/// );
/// assert_eq!(
///     render("Made-Up Category", Emphasis::new()),
///     "[bright_red]Made-Up Category[/]"
/// );
/// ```
pub fn render(category: &str, emphasis: Emphasis) -> String {
    PresentationRegistry::global().render(category, emphasis)
}

/// Icons then label, e.g. `":eyes: :tornado: Tornado Watch"`.
///
/// Used where the category is a heading rather than a table cell.
pub fn title(category: &str) -> String {
    PresentationRegistry::global().title(category)
}

impl PresentationRegistry {
    /// Resolves a category, substituting the fallback for unknown ones.
    pub fn resolve<'a>(&self, category: &'a str) -> PresentationRecord<'a> {
        match self.lookup(category) {
            Some(record) => *record,
            None => {
                log::debug!("no presentation registered for alert category {category:?}");
                PresentationRecord::fallback(category)
            }
        }
    }

    /// Renders a category's markup with the given emphasis.
    pub fn render(&self, category: &str, emphasis: Emphasis) -> String {
        compose(&self.resolve(category), emphasis)
    }

    /// Renders a category as a heading: icons, then the label.
    pub fn title(&self, category: &str) -> String {
        let record = self.resolve(category);
        let label = escape_label(record.category);
        if record.icons.is_empty() {
            return label.into_owned();
        }
        format!("{} {}", record.icons.join(" "), label)
    }
}

/// Builds the opening style tag, e.g. `[red bold underline]`.
pub fn open_tag(color: &str, emphasis: Emphasis) -> String {
    let mut tag = String::with_capacity(color.len() + 24);
    tag.push('[');
    tag.push_str(color);
    for modifier in emphasis.modifiers() {
        tag.push(' ');
        tag.push_str(modifier);
    }
    tag.push(']');
    tag
}

/// Markup-escapes a label; registered categories come back borrowed.
fn escape_label(label: &str) -> Cow<'_, str> {
    if label.contains('[') {
        Cow::Owned(label.replace('[', "\\["))
    } else {
        Cow::Borrowed(label)
    }
}

fn compose(record: &PresentationRecord<'_>, emphasis: Emphasis) -> String {
    let mut out = open_tag(record.color, emphasis);
    out.push_str(&escape_label(record.category));
    out.push_str("[/]");

    if record.has_icons() && emphasis.newline_after_icons {
        out.push('\n');
    }
    for icon in record.icons {
        out.push_str(icon);
        out.push(' ');
    }
    out
}
