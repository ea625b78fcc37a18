//! The error returned for notation that does not describe a chord.

use std::fmt;

use crate::error::Diagnostic;

/// Result of a single elaboration step.
pub type Result<T> = std::result::Result<T, Diagnostic>;

/// Every diagnostic from a rejected notation source, in source order.
///
/// Syntax errors stop the parse before elaboration, so a `ParseError`
/// holds either syntax diagnostics or shape diagnostics, never both.
/// It is never empty.
#[derive(Debug, Clone)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Succeeds when nothing was reported, fails with everything that was.
    pub(crate) fn check(diagnostics: Vec<Diagnostic>) -> std::result::Result<(), Self> {
        if diagnostics.is_empty() {
            Ok(())
        } else {
            Err(Self { diagnostics })
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Shows the first diagnostic and how many follow it.
impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.diagnostics.split_first() else {
            return Ok(());
        };
        write!(f, "{first}")?;
        if !rest.is_empty() {
            write!(f, " (+{} more)", rest.len())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}
