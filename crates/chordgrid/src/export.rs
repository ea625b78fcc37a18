//! Export of laid-out chord diagrams.
//!
//! This is the last stage of the pipeline:
//!
//! ```text
//! Notation text
//!     ↓ parse
//! Shape
//!     ↓ layout
//! ChordLayout (ordered draw primitives)
//!     ↓ export (this module)
//! Output document
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgAssembler`]
//!
//! Export operations return [`Error`], which converts into
//! [`ChordGridError::Export`](crate::ChordGridError::Export) at the crate
//! boundary.

pub mod svg;

use std::io;

use crate::layout::ChordLayout;

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// Writes `layout` in the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout cannot be converted to the
    /// target format, or [`Error::Io`] if writing fails.
    fn export_layout<W: io::Write>(&self, layout: &ChordLayout, writer: W) -> Result<(), Error>;
}

/// Errors that can occur during diagram export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_error_display_and_source() {
        let render = Error::Render("bad canvas".to_string());
        assert_eq!(render.to_string(), "Render error: bad canvas");
        assert!(render.source().is_none());

        let io = Error::Io(io::Error::other("disk full"));
        assert_eq!(io.to_string(), "I/O error: disk full");
        assert!(io.source().is_some());
    }
}
