//! Terminal rendering for richwx.
//!
//! Everything richwx prints starts as markup: `[style]text[/]` tags from
//! `richwx-bbparser` plus `:shortcode:` icons. This crate knows the style
//! names ([`palette`]), the icons ([`expand_icons`]) and how to draw the
//! larger pieces of output:
//!
//! - [`Styler`]: applies markup for an [`OutputMode`]
//! - [`table::Table`]: boxed tables with wrapped, aligned markup cells
//! - [`rule`]: a horizontal line with a centered title
//! - [`Renderer`]: minijinja templates that produce markup
//!
//! ```rust
//! use richwx_render::{OutputMode, Styler};
//!
//! let styler = Styler::new(OutputMode::Term);
//! let out = styler.apply("[orange_red1 bold]Tsunami Warning[/] :water_wave:");
//! assert!(out.contains("\x1b[38;5;202m"));
//! ```

mod error;
mod icons;
mod markup;
mod output;
pub mod palette;
mod rule;
pub mod table;
mod template;

pub use error::{RenderError, UnknownOutputMode};
pub use icons::{expand_icons, glyph};
pub use markup::{terminal_width, Styler};
pub use output::OutputMode;
pub use richwx_bbparser::{escape, TagTransform};
pub use rule::rule;
pub use template::{register_filters, Renderer};

/// Every icon shortcode name the renderer knows, sorted.
pub fn icon_names() -> impl Iterator<Item = &'static str> {
    icons::names()
}
