//! The error returned by [`parse`](crate::parse).

use std::fmt;

use crate::error::Diagnostic;

/// Error type for a failed parse.
///
/// Parsing stops at the first malformed cell, so a `ParseError` always
/// wraps exactly one [`Diagnostic`]. No partial graph is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    diagnostic: Box<Diagnostic>,
}

impl ParseError {
    /// Get the diagnostic describing the failure.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.diagnostic, f)
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostic: Box::new(diagnostic),
        }
    }
}
