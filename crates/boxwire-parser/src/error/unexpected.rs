//! Internal error raised when a cell breaks the diagram rules.
//!
//! The attribute lexer and the edge tracer only know grid positions. They
//! report [`UnexpectedCharacter`], which the parser turns into a
//! [`Diagnostic`] once the source spans can be resolved through the grid.

use thiserror::Error;

use boxwire_core::geometry::Position;

use crate::{
    error::{Diagnostic, ErrorCode},
    grid::Grid,
    symbol::Symbol,
};

/// A character (or the end of input) that no rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{} at {position}: {found}", .code.description())]
pub(crate) struct UnexpectedCharacter {
    code: ErrorCode,
    found: Symbol,
    position: Position,
    /// The path cell whose rule was violated, when it differs from `position`.
    origin: Option<Position>,
}

impl UnexpectedCharacter {
    /// Malformed attribute text inside a box.
    pub(crate) fn in_attributes(found: Symbol, position: Position) -> Self {
        let code = match found {
            Symbol::End => ErrorCode::E002,
            Symbol::Char(_) => ErrorCode::E001,
        };
        Self::new(code, found, position, None)
    }

    /// A path ran into a character that cannot continue it.
    pub(crate) fn on_path(found: Symbol, position: Position, origin: Option<Position>) -> Self {
        Self::new(ErrorCode::E100, found, position, origin)
    }

    /// A line segment at `origin` ends in blank space at `position`.
    pub(crate) fn dangling(found: Symbol, position: Position, origin: Position) -> Self {
        Self::new(ErrorCode::E101, found, position, Some(origin))
    }

    /// The arrowhead at `origin` points at something other than a box border.
    pub(crate) fn misdirected(found: Symbol, position: Position, origin: Position) -> Self {
        Self::new(ErrorCode::E102, found, position, Some(origin))
    }

    /// The border character at `position`, touched from `origin`, belongs to no box.
    pub(crate) fn detached(found: Symbol, position: Position, origin: Position) -> Self {
        Self::new(ErrorCode::E103, found, position, Some(origin))
    }

    fn new(code: ErrorCode, found: Symbol, position: Position, origin: Option<Position>) -> Self {
        Self {
            code,
            found,
            position,
            origin,
        }
    }

    pub(crate) fn code(&self) -> ErrorCode {
        self.code
    }

    pub(crate) fn found(&self) -> Symbol {
        self.found
    }

    pub(crate) fn position(&self) -> Position {
        self.position
    }

    /// Convert into a user-facing diagnostic with spans resolved in `grid`.
    pub(crate) fn into_diagnostic(self, grid: &Grid<'_>) -> Diagnostic {
        let found = self.found;
        let (message, origin_label) = match self.code {
            ErrorCode::E001 => (format!("unexpected {found} in node attributes"), None),
            ErrorCode::E002 => (
                "node attributes end in the middle of an attribute".to_string(),
                None,
            ),
            ErrorCode::E100 => (format!("unexpected {found} on path"), Some("path")),
            ErrorCode::E101 => match found {
                Symbol::End => ("line runs off the diagram".to_string(), Some("line")),
                Symbol::Char(_) => (format!("line ends in {found}"), Some("line")),
            },
            ErrorCode::E102 => (
                format!("arrowhead points at {found} instead of a box border"),
                Some("arrowhead"),
            ),
            ErrorCode::E103 => (
                format!("line touches {found} that is not part of a box"),
                Some("line"),
            ),
        };

        let mut diagnostic = Diagnostic::new(self.code, message, found, self.position)
            .with_label(grid.span_of(self.position), "here")
            .with_help(self.code.help());

        if let (Some(origin), Some(label)) = (self.origin, origin_label) {
            if origin != self.position {
                diagnostic = diagnostic.with_secondary_label(grid.span_of(origin), label);
            }
        }

        diagnostic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    #[test]
    fn test_attribute_errors_pick_code_from_symbol() {
        let pos = Position::new(1, 1);

        assert_eq!(
            UnexpectedCharacter::in_attributes(Symbol::Char(':'), pos).code(),
            ErrorCode::E001
        );
        assert_eq!(
            UnexpectedCharacter::in_attributes(Symbol::End, pos).code(),
            ErrorCode::E002
        );
    }

    #[test]
    fn test_into_diagnostic_resolves_spans() {
        let grid = Grid::new("  v\n   ");
        let err = UnexpectedCharacter::misdirected(
            Symbol::Char(' '),
            Position::new(1, 2),
            Position::new(0, 2),
        );

        let diag = err.into_diagnostic(&grid);

        assert_eq!(diag.code(), ErrorCode::E102);
        assert_eq!(
            diag.message(),
            "arrowhead points at blank space instead of a box border"
        );
        assert_eq!(diag.labels().len(), 2);
        assert_eq!(diag.labels()[0].span(), Span::new(6..7));
        assert_eq!(diag.labels()[1].span(), Span::new(2..3));
        assert_eq!(diag.labels()[1].message(), "arrowhead");
        assert!(diag.help().is_some());
    }

    #[test]
    fn test_into_diagnostic_without_origin() {
        let grid = Grid::new("| a b |");
        let err = UnexpectedCharacter::in_attributes(Symbol::Char(' '), Position::new(0, 3));

        let diag = err.into_diagnostic(&grid);

        assert_eq!(diag.message(), "unexpected blank space in node attributes");
        assert_eq!(diag.labels().len(), 1);
        assert_eq!(diag.position(), Position::new(0, 3));
    }
}
