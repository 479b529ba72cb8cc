//! Parse diagnostics.
//!
//! Markup problems never stop parsing; they are collected so callers can
//! surface them (in tests, or at debug log level) while still printing output.

use std::fmt;

/// A single markup problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An opening tag was never closed.
    UnbalancedTag { tag: String },
    /// A closing tag had no matching opening tag.
    UnexpectedClose { tag: String },
    /// A closing tag closed something other than the innermost open tag.
    MismatchedClose { expected: String, found: String },
    /// A tag used a style name that isn't defined. The tag is kept as text.
    UnknownStyle { tag: String, style: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnbalancedTag { tag } => {
                write!(f, "unbalanced tag '{}': never closed", tag)
            }
            ParseError::UnexpectedClose { tag } => {
                write!(f, "unexpected close tag '{}': nothing is open", tag)
            }
            ParseError::MismatchedClose { expected, found } => {
                write!(f, "mismatched close tag '{}', expected '{}'", found, expected)
            }
            ParseError::UnknownStyle { tag, style } => {
                write!(f, "unknown style '{}' in tag '{}'", style, tag)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// All problems found while parsing one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseErrors(Vec<ParseError>);

impl ParseErrors {
    /// True when the input parsed cleanly.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of problems found.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The problems, in input order.
    pub fn iter(&self) -> impl Iterator<Item = &ParseError> {
        self.0.iter()
    }

    pub(crate) fn push(&mut self, error: ParseError) {
        self.0.push(error);
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl IntoIterator for ParseErrors {
    type Item = ParseError;
    type IntoIter = std::vec::IntoIter<ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
