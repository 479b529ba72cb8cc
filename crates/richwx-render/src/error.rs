//! Rendering errors.

use thiserror::Error;

/// Errors from template rendering and structured output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A template failed to compile or render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Data could not be serialized for structured output.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// An `--output` value that isn't one of the known modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output mode '{0}' (expected auto, term, text, term-debug or json)")]
pub struct UnknownOutputMode(pub String);
