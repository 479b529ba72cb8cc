//! Alert category presentation for richwx.
//!
//! Every NWS alert carries an event category such as `"Tornado Warning"`.
//! This crate maps each category to a fixed presentation (a palette color
//! and a short sequence of icon shortcodes) and composes that presentation
//! with per-alert emphasis into a markup string:
//!
//! ```rust
//! use richwx_styles::{render, Emphasis};
//!
//! let cell = render("Tornado Warning", Emphasis::new().bold().newline_after_icons());
//! assert_eq!(cell, "[red bold]Tornado Warning[/]\n:exclamation_mark: :tornado: ");
//! ```
//!
//! The markup uses `[style]text[/]` tags and `:shortcode:` icons; turning it
//! into terminal output is the job of `richwx-render`.
//!
//! - [`PresentationRegistry`]: the immutable category table
//! - [`PresentationRecord`]: one category's color and icons
//! - [`Emphasis`]: bold/italic/underline/newline flags for a single render
//! - [`render`] / [`title`]: markup against the global registry
//!
//! Rendering never fails. A category the registry doesn't know renders with
//! [`FALLBACK_COLOR`] and its raw text, so new API categories show up
//! instead of disappearing.

mod data;
mod emphasis;
mod record;
mod registry;
mod render;

pub use emphasis::Emphasis;
pub use record::{PresentationRecord, FALLBACK_COLOR};
pub use registry::PresentationRegistry;
pub use render::{open_tag, render, title};
