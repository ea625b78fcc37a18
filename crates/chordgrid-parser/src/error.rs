//! Error and diagnostic system for the notation parser.
//!
//! Each problem is a [`Diagnostic`]: an [`ErrorCode`], a message, labelled
//! source spans and optional help text. All diagnostics from one parse are
//! wrapped in a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use chordgrid_parser::error::{Diagnostic, ErrorCode};
//! # use chordgrid_parser::Span;
//! let diag = Diagnostic::new(ErrorCode::E201, "string 3 is fretted more than once")
//!     .with_label(Span::new(30..35), "second position")
//!     .with_secondary_label(Span::new(12..17), "first fretted here")
//!     .with_help("keep a single `dot` per string");
//!
//! assert_eq!(diag.to_string(), "error[E201]: string 3 is fretted more than once");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
