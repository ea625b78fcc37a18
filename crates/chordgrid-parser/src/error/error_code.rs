//! Error codes for the notation diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Syntax errors
//! - `E2xx` - Shape errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax Errors (E1xx)
    // =========================================================================
    /// Unexpected input.
    ///
    /// An unknown statement keyword, a missing or extra argument, or an
    /// unterminated quoted name.
    E100,

    /// Invalid number.
    ///
    /// An argument that should be an integer could not be read as one.
    E101,

    /// Unknown string name.
    ///
    /// A string was named by something other than `E A D G B e` or a number.
    E102,

    // =========================================================================
    // Shape Errors (E2xx)
    // =========================================================================
    /// Invalid shape value.
    ///
    /// A string, fret or starting fret is out of range, or a barre does not
    /// run from a lower-pitched to a higher-pitched string.
    E200,

    /// Duplicate definition.
    ///
    /// A string is fretted twice, or a single-use statement (`name`,
    /// `start`, `barre`) appears more than once.
    E201,

    /// Muted string is fretted.
    ///
    /// Reported only when strict validation is enabled.
    E202,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "unexpected input",
            ErrorCode::E101 => "invalid number",
            ErrorCode::E102 => "unknown string name",
            ErrorCode::E200 => "invalid shape value",
            ErrorCode::E201 => "duplicate definition",
            ErrorCode::E202 => "muted string is fretted",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
