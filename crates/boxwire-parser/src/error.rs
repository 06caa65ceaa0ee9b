//! Error and diagnostic system for the boxwire parser.
//!
//! Parsing is all-or-nothing: the first cell that breaks a rule aborts the
//! parse with a [`ParseError`] wrapping one [`Diagnostic`].
//!
//! # Example
//!
//! ```
//! # use boxwire_parser::{parse, error::ErrorCode};
//! let diagram = "
//! +-----------+
//! | my vps: x |
//! +-----------+
//! ";
//!
//! let err = parse(diagram).unwrap_err();
//! let diag = err.diagnostic();
//!
//! assert_eq!(diag.code(), ErrorCode::E001);
//! assert_eq!(diag.position().row(), 2);
//! assert_eq!(diag.position().col(), 4);
//! ```

mod diagnostic;
mod error_code;
mod parse_error;
mod unexpected;

pub(crate) use unexpected::UnexpectedCharacter;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use parse_error::ParseError;

/// Result of the internal parsing steps.
pub(crate) type Result<T> = std::result::Result<T, UnexpectedCharacter>;
