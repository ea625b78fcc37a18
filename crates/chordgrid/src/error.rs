//! Error types for Chordgrid operations.
//!
//! [`ChordGridError`] wraps every failure that can occur between reading
//! notation and producing a document.

use std::io;

use thiserror::Error;

use chordgrid_core::error::{ShapeError, ValidationError};
use chordgrid_parser::error::ParseError;

/// The main error type for Chordgrid operations.
///
/// The `Parse` variant keeps the source text next to the diagnostics so
/// callers can render labelled snippets.
#[derive(Debug, Error)]
pub enum ChordGridError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Invalid chord shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<ValidationError> for ChordGridError {
    fn from(error: ValidationError) -> Self {
        Self::Shape(error.into())
    }
}

impl From<crate::export::Error> for ChordGridError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl ChordGridError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
