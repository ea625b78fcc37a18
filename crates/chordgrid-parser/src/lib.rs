//! # Chordgrid Parser
//!
//! Parser for the Chordgrid chord notation, a small line-oriented format
//! describing one chord shape:
//!
//! ```text
//! name "G"
//! dot E 3
//! dot A 2
//! dot e 3
//! ```
//!
//! ## Usage
//!
//! ```
//! # use chordgrid_parser::{parse, ElaborateConfig, error::ParseError};
//! fn main() -> Result<(), ParseError> {
//!     let source = "name \"Am\"\nmute E\ndot D 2\ndot G 2\ndot B 1\n";
//!     let shape = parse(source, ElaborateConfig::default())?;
//!
//!     assert_eq!(shape.name(), Some("Am"));
//!     assert_eq!(shape.positions().len(), 3);
//!     Ok(())
//! }
//! ```

mod elaborate;
pub mod error;
mod parser;
mod parser_types;
mod span;

pub use elaborate::ElaborateConfig;
pub use span::{Span, Spanned};

use log::{debug, info};

use chordgrid_core::shape::Shape;

use elaborate::Builder;
use error::ParseError;

/// Parse notation source into a validated chord shape.
///
/// This is the main entry point. It runs two phases:
///
/// 1. **Parse** - Split lines into statements (syntax errors)
/// 2. **Elaborate** - Interpret arguments and build the [`Shape`] (value errors)
///
/// Each phase reports every bad statement; elaboration only runs when
/// parsing succeeded.
///
/// # Errors
///
/// Returns a [`ParseError`] holding one [`Diagnostic`](error::Diagnostic)
/// per problem, in source order within each phase.
pub fn parse(source: &str, config: ElaborateConfig) -> Result<Shape, ParseError> {
    info!(source_len = source.len(); "Parsing chord notation");

    let statements = parser::parse_statements(source)?;
    debug!(statements = statements.len(); "Notation split into statements");

    Builder::new(config).build(&statements)
}
