//! Error types for boxwire operations.
//!
//! This module provides the main error type [`BoxwireError`] which wraps
//! the error conditions of parsing, exporting and reconciling a diagram.

use std::io;

use thiserror::Error;

use boxwire_parser::error::ParseError;

use crate::{export, reconcile::ReconcileError};

/// The main error type for boxwire operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the diagram source next to the structured
/// parse error, so callers can render the offending cell in context.
#[derive(Debug, Error)]
pub enum BoxwireError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Export error: {0}")]
    Export(#[from] export::Error),

    #[error("Reconcile error: {0}")]
    Reconcile(#[from] ReconcileError),
}

impl BoxwireError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
