//! Rendering of [`BoxwireError`] through miette.
//!
//! A failed parse carries one [`Diagnostic`] plus the diagram text, which is
//! enough for miette to draw the diagram with the offending cell underlined.
//! Every other error is reported by its message and a `boxwire::*` code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use boxwire::BoxwireError;
use boxwire_parser::{Diagnostic, Span};

/// A [`BoxwireError`] viewed as a miette diagnostic.
pub struct Report<'a> {
    err: &'a BoxwireError,
}

impl<'a> Report<'a> {
    pub fn new(err: &'a BoxwireError) -> Self {
        Self { err }
    }

    /// The diagnostic of a failed parse.
    fn parse_failure(&self) -> Option<&'a Diagnostic> {
        match self.err {
            BoxwireError::Parse { err, .. } => Some(err.diagnostic()),
            _ => None,
        }
    }
}

impl fmt::Debug for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Report").field(self.err).finish()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parse_failure() {
            Some(diag) => write!(f, "{} at {}", diag.message(), diag.position()),
            None => fmt::Display::fmt(self.err, f),
        }
    }
}

impl std::error::Error for Report<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.err {
            // The diagnostic already says everything the parse error would.
            BoxwireError::Parse { .. } => None,
            err => std::error::Error::source(err),
        }
    }
}

impl MietteDiagnostic for Report<'_> {
    fn code<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        let code: Box<dyn fmt::Display + 'b> = match self.err {
            BoxwireError::Parse { err, .. } => Box::new(err.diagnostic().code()),
            BoxwireError::Io(_) => Box::new("boxwire::io"),
            BoxwireError::Export(_) => Box::new("boxwire::export"),
            BoxwireError::Reconcile(_) => Box::new("boxwire::reconcile"),
        };
        Some(code)
    }

    fn help<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        let diag = self.parse_failure()?;
        diag.help()
            .map(|help| Box::new(help) as Box<dyn fmt::Display + 'b>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self.err {
            BoxwireError::Parse { src, .. } => Some(src as &dyn SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let diag = self.parse_failure()?;
        if diag.labels().is_empty() {
            return None;
        }

        let labels = diag.labels().iter().map(|label| {
            let text = Some(label.message().to_owned());
            let span = source_span(label.span());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(text, span)
            } else {
                LabeledSpan::new_with_span(text, span)
            }
        });
        Some(Box::new(labels))
    }
}

fn source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}
