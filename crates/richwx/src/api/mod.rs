//! The National Weather Service alerts API.

mod client;
mod error;
pub mod model;

pub use client::{AlertSource, NwsClient, DEFAULT_API_BASE};
pub use error::ApiError;
pub use model::{Alert, Severity};
