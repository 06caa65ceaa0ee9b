//! Error codes for boxwire diagnostics.
//!
//! Error codes are organized by the part of the diagram at fault:
//! - `E0xx` - Text inside a box
//! - `E1xx` - Lines, junctions and arrowheads between boxes

use std::fmt;

/// Error codes for categorizing parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Attribute Errors (E0xx)
    // =========================================================================
    /// Unexpected character in node attributes.
    ///
    /// Attribute names and values cannot contain whitespace or `:`, and an
    /// attribute cannot start with `:`.
    E001,

    /// Incomplete attribute.
    ///
    /// The box interior ended in the middle of an attribute, before its
    /// value was written.
    E002,

    // =========================================================================
    // Path Errors (E1xx)
    // =========================================================================
    /// Unexpected character on a path.
    ///
    /// A line, junction or arrowhead ran into a character that cannot
    /// continue it.
    E100,

    /// Dangling line.
    ///
    /// A line ends in blank space instead of at a box, junction or arrowhead.
    E101,

    /// Arrowhead not pointing at a box.
    ///
    /// The cell an arrowhead points at must be the border of a box.
    E102,

    /// Line touches a border that belongs to no box.
    E103,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unexpected character in node attributes",
            ErrorCode::E002 => "incomplete attribute",
            ErrorCode::E100 => "unexpected character on path",
            ErrorCode::E101 => "dangling line",
            ErrorCode::E102 => "arrowhead does not point at a box",
            ErrorCode::E103 => "line touches a border outside any box",
        }
    }

    /// Returns a suggestion for fixing the diagram.
    pub(crate) fn help(&self) -> &'static str {
        match self {
            ErrorCode::E001 => {
                "write attributes as `name: value`, without spaces inside names or values"
            }
            ErrorCode::E002 => "every attribute needs a name, a `:` and a value",
            ErrorCode::E100 => "draw paths with `-`, `|`, `+` and the arrowheads `^ v < >`",
            ErrorCode::E101 => "connect the line to a box, a `+` junction or an arrowhead",
            ErrorCode::E102 => "place the arrowhead right next to the border of the target box",
            ErrorCode::E103 => "make sure the line ends on the border of a closed box",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
