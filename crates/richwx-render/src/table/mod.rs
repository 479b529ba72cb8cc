//! Boxed tables with content-driven column widths.
//!
//! [`TableSpec`] and its width resolution decide how wide each column is;
//! [`Table`] holds markup rows and draws them.

mod render;
mod resolve;
mod types;
mod util;

pub use render::Table;
pub use resolve::ResolvedWidths;
pub use types::{Align, Column, Decorations, TableSpec, TableSpecBuilder, Width};
pub use util::display_width;
