//! BBCode-style markup for terminal output.
//!
//! Markup looks like `[red bold]Tornado Warning[/]`: a tag opens one or more
//! named styles, `[/]` closes the innermost tag and `[/red bold]` closes a
//! named one. `\[` is a literal bracket.
//!
//! A [`BBParser`] is built from a map of style names to [`TagStyle`]s and a
//! [`TagTransform`] deciding what happens to tags:
//!
//! - [`TagTransform::Apply`]: emit ANSI escape codes
//! - [`TagTransform::Remove`]: plain text
//! - [`TagTransform::Keep`]: the markup as-is
//!
//! Parsing never fails. Tags naming unknown styles stay in the text, and
//! structural problems are reported through
//! [`BBParser::parse_with_diagnostics`].
//!
//! [`BBParser::wrap`] breaks markup into display-width-limited lines that
//! each parse on their own, which is what table cells need.

mod error;
mod parser;
mod style;
mod token;
mod wrap;

pub use error::{ParseError, ParseErrors};
pub use parser::{BBParser, TagTransform};
pub use style::TagStyle;
pub use token::{escape, unescape};
