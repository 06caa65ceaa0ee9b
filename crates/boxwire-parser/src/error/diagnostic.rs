//! The user-facing description of a parse failure.
//!
//! A [`Diagnostic`] names the offending cell twice: as a grid
//! [`Position`] for programmatic use, and as source [`Span`]s inside its
//! [`Label`]s for rendering with a snippet of the diagram.

use std::fmt;

use boxwire_core::geometry::Position;

use crate::{error::ErrorCode, span::Span, symbol::Symbol};

/// A message attached to a span of the diagram source.
///
/// The primary label marks the cell that broke a rule; secondary labels
/// mark related cells, such as the arrowhead whose target is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    primary: bool,
}

impl Label {
    /// Label marking the cell at fault.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            primary: true,
        }
    }

    /// Label giving context for the cell at fault.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            primary: false,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }
}

/// A parse failure with its location and a hint for fixing it.
///
/// # Example
///
/// ```text
/// error[E001]: unexpected blank space in node attributes
///   ,-[diagram.txt:2:9]
/// 2 | | my vps: droplet |
///   :      ^ here
///   `----
///   help: write attributes as `name: value`, without spaces inside names or values
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    code: ErrorCode,
    message: String,
    found: Symbol,
    position: Position,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic for `found` at `position`.
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        found: Symbol,
        position: Position,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            found,
            position,
            labels: Vec::new(),
            help: None,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The character (or end of input) that could not be parsed.
    pub fn found(&self) -> Symbol {
        self.found
    }

    /// Grid cell of the offending character.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Add a primary label.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error[{}]: {} at {}",
            self.code, self.message, self.position
        )
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Diagnostic {
        Diagnostic::new(
            ErrorCode::E102,
            "arrowhead points at blank space instead of a box border",
            Symbol::Char(' '),
            Position::new(4, 2),
        )
    }

    #[test]
    fn test_diagnostic_display() {
        assert_eq!(
            sample().to_string(),
            "error[E102]: arrowhead points at blank space instead of a box border at 5:3"
        );
    }

    #[test]
    fn test_diagnostic_labels_keep_order() {
        let diag = sample()
            .with_label(Span::new(10..11), "here")
            .with_secondary_label(Span::new(4..5), "arrowhead");

        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert_eq!(diag.labels()[0].message(), "here");
        assert!(!diag.labels()[1].is_primary());
        assert_eq!(diag.labels()[1].span(), Span::new(4..5));
    }

    #[test]
    fn test_diagnostic_accessors() {
        let diag = sample().with_help("move it");

        assert_eq!(diag.code(), ErrorCode::E102);
        assert_eq!(diag.found(), Symbol::Char(' '));
        assert_eq!(diag.position(), Position::new(4, 2));
        assert_eq!(diag.help(), Some("move it"));
    }
}
