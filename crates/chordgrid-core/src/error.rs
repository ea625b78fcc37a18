//! Error types for shape construction and validation.
//!
//! Every error here is raised before the layout engine emits a single
//! primitive: a [`Shape`](crate::shape::Shape) that exists is always
//! renderable.
//!
//! - [`ValidationError`] - A value violates a chord-shape invariant.
//! - [`ConstructionError`] - The shape as a whole is malformed.
//! - [`ShapeError`] - Either of the above.

use thiserror::Error;

/// A value that violates one of the chord-shape invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("string {value} is out of range, expected 1..=6")]
    StringOutOfRange { value: i64 },

    #[error("fret {value} is outside the 5-fret window, expected 1..=5")]
    FretOutOfWindow { value: i64 },

    #[error("barre must run from a lower-pitched to a higher-pitched string, got {start}..{end}")]
    BarreNotDescending { start: u8, end: u8 },

    #[error("string {string} is fretted more than once")]
    DuplicateString { string: u8 },

    #[error("string {string} is both muted and fretted")]
    MutedAndFretted { string: u8 },

    #[error("unknown string name `{name}`, expected one of E, A, D, G, B, e")]
    UnknownStringName { name: String },
}

/// A malformed shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("starting fret must be at least 1, got {value}")]
    InvalidStartingFret { value: i64 },
}

/// Any failure while building a [`Shape`](crate::shape::Shape).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("construction error: {0}")]
    Construction(#[from] ConstructionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::StringOutOfRange { value: 7 }.to_string(),
            "string 7 is out of range, expected 1..=6"
        );
        assert_eq!(
            ValidationError::FretOutOfWindow { value: 0 }.to_string(),
            "fret 0 is outside the 5-fret window, expected 1..=5"
        );
        assert_eq!(
            ValidationError::BarreNotDescending { start: 3, end: 5 }.to_string(),
            "barre must run from a lower-pitched to a higher-pitched string, got 3..5"
        );
    }

    #[test]
    fn test_shape_error_wraps_sources() {
        let err: ShapeError = ConstructionError::InvalidStartingFret { value: -2 }.into();
        assert_eq!(
            err.to_string(),
            "construction error: starting fret must be at least 1, got -2"
        );

        let err: ShapeError = ValidationError::DuplicateString { string: 4 }.into();
        assert!(matches!(
            err,
            ShapeError::Validation(ValidationError::DuplicateString { string: 4 })
        ));
    }
}
