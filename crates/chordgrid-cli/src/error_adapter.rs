//! Renders a [`ChordGridError`] through miette.
//!
//! A parse failure becomes one [`Report`] per notation diagnostic, each
//! showing the offending lines of the chord file. Every other failure is a
//! single report without a snippet.

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, SourceCode, SourceSpan,
};

use chordgrid::ChordGridError;
use chordgrid_parser::error::Diagnostic;

/// A single miette report for a failed run.
#[derive(Debug)]
pub enum Report<'a> {
    /// One notation diagnostic with the file it points into.
    Notation {
        diagnostic: &'a Diagnostic,
        source: &'a str,
    },
    /// Any failure that has no location in the chord file.
    Failure(&'a ChordGridError),
}

impl<'a> Report<'a> {
    /// Splits `err` into the reports to print, in source order.
    pub fn all(err: &'a ChordGridError) -> Vec<Self> {
        match err {
            ChordGridError::Parse { err, src } => err
                .diagnostics()
                .iter()
                .map(|diagnostic| Self::Notation {
                    diagnostic,
                    source: src,
                })
                .collect(),
            other => vec![Self::Failure(other)],
        }
    }

    fn failure_code(err: &ChordGridError) -> Option<&'static str> {
        match err {
            ChordGridError::Io(_) => Some("chordgrid::io"),
            ChordGridError::Parse { .. } => None,
            ChordGridError::Shape(_) => Some("chordgrid::shape"),
            ChordGridError::Config(_) => Some("chordgrid::config"),
            ChordGridError::Export(_) => Some("chordgrid::export"),
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Notation { diagnostic, .. } => f.write_str(diagnostic.message()),
            Self::Failure(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Report<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Notation { .. } => None,
            Self::Failure(err) => std::error::Error::source(*err),
        }
    }
}

impl MietteDiagnostic for Report<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Self::Notation { diagnostic, .. } => Some(Box::new(diagnostic.code())),
            Self::Failure(err) => {
                Self::failure_code(err).map(|code| Box::new(code) as Box<dyn fmt::Display>)
            }
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Self::Notation { diagnostic, .. } => diagnostic
                .help()
                .map(|help| Box::new(help) as Box<dyn fmt::Display>),
            Self::Failure(ChordGridError::Config(_)) => Some(Box::new(
                "check the file given with --config, or chordgrid/config.toml",
            )),
            Self::Failure(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            Self::Notation { source, .. } => Some(source as &dyn SourceCode),
            Self::Failure(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let Self::Notation { diagnostic, .. } = self else {
            return None;
        };
        if diagnostic.labels().is_empty() {
            return None;
        }

        Some(Box::new(diagnostic.labels().iter().map(|label| {
            let span = SourceSpan::from(label.span().range());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Renders every report for `err` with `handler`, one string per report.
pub fn render(handler: &GraphicalReportHandler, err: &ChordGridError) -> Vec<String> {
    Report::all(err)
        .iter()
        .map(|report| {
            let mut out = String::new();
            match handler.render_report(&mut out, report) {
                Ok(()) => out,
                Err(_) => report.to_string(),
            }
        })
        .collect()
}
