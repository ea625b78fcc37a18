//! One problem found in chord notation.

use std::fmt;

use crate::{
    error::{error_code::ErrorCode, label::Label},
    span::Span,
};

/// A coded error message pointing into the notation source.
///
/// Every diagnostic is fatal: a shape is only built from notation that
/// produced none.
///
/// ```text
/// error[E201]: string 3 is fretted more than once
///   --> g.chord:4:5
///    |
///  2 | dot G 2
///    |     --- first fretted here
///  4 | dot G 4
///    |     ^^^ fretted again
///    |
///    = help: keep a single `dot` per string
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: ErrorCode,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// ```
    /// # use chordgrid_parser::error::{Diagnostic, ErrorCode};
    /// # use chordgrid_parser::Span;
    /// let diag = Diagnostic::new(ErrorCode::E102, "unknown string name `H`")
    ///     .with_label(Span::new(4..5), "not a string")
    ///     .with_help("use one of `E A D G B e` or a number from 1 to 6");
    /// assert_eq!(diag.code(), ErrorCode::E102);
    /// ```
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Labels in the order they were attached; the primary one comes first.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Marks the span at fault.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Points at related source, such as an earlier duplicate.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

impl std::error::Error for Diagnostic {}
