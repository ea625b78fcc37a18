//! Conventional string letter names in standard tuning.
//!
//! Guitarists name strings by their open pitch: `E A D G B e`, from the
//! lowest (thickest) string to the highest. The letter case matters: `E` is
//! string 6 and `e` is string 1.
//!
//! ```
//! # use chordgrid_core::string_name::StringName;
//! let name: StringName = "A".parse().unwrap();
//! assert_eq!(name.index().value(), 5);
//! assert_eq!(name.letter(), "A");
//!
//! assert!("H".parse::<StringName>().is_err());
//! ```

use std::{fmt, str::FromStr};

use crate::{error::ValidationError, shape::StringIndex};

/// A string named by its open pitch in standard tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringName {
    /// Low E, string 6
    LowE,
    /// A, string 5
    A,
    /// D, string 4
    D,
    /// G, string 3
    G,
    /// B, string 2
    B,
    /// High e, string 1
    HighE,
}

/// Lookup table ordered from string 1 to string 6.
const NAMES: [(StringName, &str); 6] = [
    (StringName::HighE, "e"),
    (StringName::B, "B"),
    (StringName::G, "G"),
    (StringName::D, "D"),
    (StringName::A, "A"),
    (StringName::LowE, "E"),
];

impl StringName {
    /// Returns the numeric string index (6 = low E, 1 = high e).
    pub fn index(self) -> StringIndex {
        let value = match self {
            Self::HighE => 1,
            Self::B => 2,
            Self::G => 3,
            Self::D => 4,
            Self::A => 5,
            Self::LowE => 6,
        };
        StringIndex::from_table(value)
    }

    /// Returns the conventional letter for this string.
    pub fn letter(self) -> &'static str {
        NAMES[self.index().table_offset()].1
    }
}

impl FromStr for StringName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES
            .iter()
            .find(|(_, letter)| *letter == s)
            .map(|(name, _)| *name)
            .ok_or_else(|| ValidationError::UnknownStringName {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}
