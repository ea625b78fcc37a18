//! The chord shape model.
//!
//! A [`Shape`] describes one chord fingering: which strings are muted, which
//! fret the diagram starts at, where the fingers go and whether one finger
//! bars several strings. Every type here validates on construction, so a
//! `Shape` value is always within the 6-string by 5-fret window and can be
//! laid out without further checks.
//!
//! # Example
//!
//! ```
//! # use chordgrid_core::shape::Shape;
//! // F major, barred at the first fret
//! let shape = Shape::builder()
//!     .with_name("F")
//!     .with_barre(1, 6, 1)
//!     .with_dot(5, 3)
//!     .with_dot(4, 3)
//!     .with_dot(3, 2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(shape.starting_fret(), 1);
//! assert_eq!(shape.positions().len(), 3);
//! assert!(shape.barre().is_some());
//! ```

use std::fmt;

use indexmap::IndexSet;
use log::trace;

use crate::{
    error::{ConstructionError, ShapeError, ValidationError},
    tables::{FRET_COUNT, FRET_Y, STRING_COUNT, STRING_X},
};

// =============================================================================
// StringIndex
// =============================================================================

/// A guitar string, numbered 1 (highest pitch) to 6 (lowest pitch).
///
/// Ordering follows the numbers, so a lower-pitched string compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StringIndex(u8);

impl StringIndex {
    /// Creates a string index, rejecting values outside `1..=6`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::StringOutOfRange`] for any other value.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (1..=STRING_COUNT as u8).contains(v))
            .map(Self)
            .ok_or(ValidationError::StringOutOfRange { value })
    }

    /// Iterates over all strings from 6 (leftmost) to 1 (rightmost).
    pub fn all() -> impl Iterator<Item = StringIndex> {
        (1..=STRING_COUNT as u8).rev().map(Self)
    }

    /// Returns the string number.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the x position of this string's line.
    pub fn x(self) -> f32 {
        STRING_X[STRING_COUNT - usize::from(self.0)]
    }

    /// Builds an index from a table value known to be in range.
    pub(crate) fn from_table(value: u8) -> Self {
        debug_assert!((1..=STRING_COUNT as u8).contains(&value));
        Self(value)
    }

    /// Zero-based offset ordered from string 1 to string 6.
    pub(crate) fn table_offset(self) -> usize {
        usize::from(self.0) - 1
    }
}

impl fmt::Display for StringIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// FretNumber
// =============================================================================

/// A fret cell relative to the diagram's starting fret, `1..=5`.
///
/// Fret 1 is the cell between the first and second fret boundaries,
/// whatever fret of the neck the diagram actually starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FretNumber(u8);

impl FretNumber {
    /// Creates a relative fret number, rejecting values outside the window.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::FretOutOfWindow`] for values outside `1..=5`.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (1..=FRET_COUNT as u8).contains(v))
            .map(Self)
            .ok_or(ValidationError::FretOutOfWindow { value })
    }

    /// Returns the relative fret number.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Y position of the fret boundary above this cell.
    pub fn top_y(self) -> f32 {
        FRET_Y[usize::from(self.0) - 1]
    }

    /// Y position of the fret boundary below this cell.
    pub fn bottom_y(self) -> f32 {
        FRET_Y[usize::from(self.0)]
    }

    /// Y position halfway between the two boundaries of this cell.
    pub fn center_y(self) -> f32 {
        (self.top_y() + self.bottom_y()) / 2.0
    }
}

impl fmt::Display for FretNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Position and Barre
// =============================================================================

/// A single fretted note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    string: StringIndex,
    fret: FretNumber,
}

impl Position {
    /// Creates a position from validated parts.
    pub fn new(string: StringIndex, fret: FretNumber) -> Self {
        Self { string, fret }
    }

    /// Creates a position from raw numbers.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the string or fret is out of range.
    pub fn try_new(string: i64, fret: i64) -> Result<Self, ValidationError> {
        Ok(Self::new(StringIndex::new(string)?, FretNumber::new(fret)?))
    }

    /// Returns the fretted string.
    pub fn string(self) -> StringIndex {
        self.string
    }

    /// Returns the relative fret.
    pub fn fret(self) -> FretNumber {
        self.fret
    }
}

/// One finger pressing several adjacent strings at the same fret.
///
/// The span always runs from a lower-pitched string (`string_start`) to a
/// higher-pitched one (`string_end`), so `string_start > string_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Barre {
    fret: FretNumber,
    string_start: StringIndex,
    string_end: StringIndex,
}

impl Barre {
    /// Creates a barre.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BarreNotDescending`] unless
    /// `string_start > string_end`.
    pub fn new(
        fret: FretNumber,
        string_start: StringIndex,
        string_end: StringIndex,
    ) -> Result<Self, ValidationError> {
        if string_start <= string_end {
            return Err(ValidationError::BarreNotDescending {
                start: string_start.value(),
                end: string_end.value(),
            });
        }

        Ok(Self {
            fret,
            string_start,
            string_end,
        })
    }

    /// Creates a barre from raw numbers.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for out-of-range values or a
    /// non-descending span.
    pub fn try_new(fret: i64, string_start: i64, string_end: i64) -> Result<Self, ValidationError> {
        Self::new(
            FretNumber::new(fret)?,
            StringIndex::new(string_start)?,
            StringIndex::new(string_end)?,
        )
    }

    /// Returns the barred fret.
    pub fn fret(self) -> FretNumber {
        self.fret
    }

    /// Returns the lowest-pitched barred string.
    pub fn string_start(self) -> StringIndex {
        self.string_start
    }

    /// Returns the highest-pitched barred string.
    pub fn string_end(self) -> StringIndex {
        self.string_end
    }
}

// =============================================================================
// Shape
// =============================================================================

/// A complete, validated chord description.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    name: Option<String>,
    muted_strings: IndexSet<StringIndex>,
    starting_fret: u64,
    positions: Vec<Position>,
    barre: Option<Barre>,
}

impl Shape {
    /// Creates a shape from validated parts.
    ///
    /// Muted strings keep their first-seen order; repeats collapse.
    ///
    /// # Errors
    ///
    /// - [`ConstructionError::InvalidStartingFret`] if `starting_fret < 1`
    /// - [`ValidationError::DuplicateString`] if a string has two positions
    pub fn new(
        muted_strings: impl IntoIterator<Item = StringIndex>,
        starting_fret: i64,
        positions: Vec<Position>,
        barre: Option<Barre>,
    ) -> Result<Self, ShapeError> {
        let starting_fret = u64::try_from(starting_fret)
            .ok()
            .filter(|fret| *fret >= 1)
            .ok_or(ConstructionError::InvalidStartingFret {
                value: starting_fret,
            })?;

        let mut seen = IndexSet::with_capacity(positions.len());
        for position in &positions {
            if !seen.insert(position.string()) {
                return Err(ValidationError::DuplicateString {
                    string: position.string().value(),
                }
                .into());
            }
        }

        let shape = Self {
            name: None,
            muted_strings: muted_strings.into_iter().collect(),
            starting_fret,
            positions,
            barre,
        };

        trace!(
            starting_fret = shape.starting_fret,
            positions = shape.positions.len(),
            muted = shape.muted_strings.len(),
            barre = shape.barre.is_some();
            "Shape constructed"
        );

        Ok(shape)
    }

    /// Starts building a shape from raw numbers.
    pub fn builder() -> ShapeBuilder {
        ShapeBuilder::default()
    }

    /// Returns a copy of this shape carrying a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the muted strings in insertion order.
    pub fn muted_strings(&self) -> impl ExactSizeIterator<Item = StringIndex> + '_ {
        self.muted_strings.iter().copied()
    }

    /// Returns `true` if `string` is muted.
    pub fn is_muted(&self, string: StringIndex) -> bool {
        self.muted_strings.contains(&string)
    }

    /// Returns the absolute fret the diagram starts at.
    pub fn starting_fret(&self) -> u64 {
        self.starting_fret
    }

    /// Returns `true` if the diagram starts at the nut.
    pub fn starts_at_nut(&self) -> bool {
        self.starting_fret == 1
    }

    /// Returns the fretted positions in order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns the barre, if any.
    pub fn barre(&self) -> Option<Barre> {
        self.barre
    }

    /// Iterates over strings that are both muted and fretted.
    pub fn muted_and_fretted(&self) -> impl Iterator<Item = StringIndex> + '_ {
        self.positions
            .iter()
            .map(|position| position.string())
            .filter(|string| self.is_muted(*string))
    }

    /// Rejects shapes where a string is both muted and fretted.
    ///
    /// The layout engine draws such shapes as given; callers that want the
    /// stricter reading run this check first.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MutedAndFretted`] for the first conflicting string.
    pub fn check_conflicts(&self) -> Result<(), ValidationError> {
        match self.muted_and_fretted().next() {
            Some(string) => Err(ValidationError::MutedAndFretted {
                string: string.value(),
            }),
            None => Ok(()),
        }
    }
}

/// Builder for [`Shape`] taking raw numbers.
///
/// Values are validated in [`ShapeBuilder::build`], in declaration order:
/// starting fret, muted strings, positions, then barre. The first failure
/// is returned.
#[derive(Debug, Clone)]
pub struct ShapeBuilder {
    name: Option<String>,
    muted_strings: Vec<i64>,
    starting_fret: i64,
    positions: Vec<(i64, i64)>,
    barre: Option<(i64, i64, i64)>,
}

impl Default for ShapeBuilder {
    fn default() -> Self {
        Self {
            name: None,
            muted_strings: Vec::new(),
            starting_fret: 1,
            positions: Vec::new(),
            barre: None,
        }
    }
}

impl ShapeBuilder {
    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the absolute starting fret (defaults to 1).
    pub fn with_starting_fret(mut self, fret: i64) -> Self {
        self.starting_fret = fret;
        self
    }

    /// Marks a string as muted.
    pub fn with_muted(mut self, string: i64) -> Self {
        self.muted_strings.push(string);
        self
    }

    /// Adds a fretted position.
    pub fn with_dot(mut self, string: i64, fret: i64) -> Self {
        self.positions.push((string, fret));
        self
    }

    /// Sets the barre.
    pub fn with_barre(mut self, fret: i64, string_start: i64, string_end: i64) -> Self {
        self.barre = Some((fret, string_start, string_end));
        self
    }

    /// Validates all values and builds the shape.
    ///
    /// # Errors
    ///
    /// Returns the first [`ShapeError`] encountered.
    pub fn build(self) -> Result<Shape, ShapeError> {
        if self.starting_fret < 1 {
            return Err(ConstructionError::InvalidStartingFret {
                value: self.starting_fret,
            }
            .into());
        }

        let muted = self
            .muted_strings
            .into_iter()
            .map(StringIndex::new)
            .collect::<Result<Vec<_>, _>>()?;

        let positions = self
            .positions
            .into_iter()
            .map(|(string, fret)| Position::try_new(string, fret))
            .collect::<Result<Vec<_>, _>>()?;

        let barre = self
            .barre
            .map(|(fret, start, end)| Barre::try_new(fret, start, end))
            .transpose()?;

        let shape = Shape::new(muted, self.starting_fret, positions, barre)?;
        Ok(match self.name {
            Some(name) => shape.with_name(name),
            None => shape,
        })
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn in_window_positions() -> impl Strategy<Value = Vec<(i64, i64)>> {
        proptest::sample::subsequence((1..=6).collect::<Vec<i64>>(), 0..=6)
            .prop_flat_map(|strings| {
                let len = strings.len();
                (Just(strings), proptest::collection::vec(1..=5i64, len))
            })
            .prop_map(|(strings, frets)| strings.into_iter().zip(frets).collect())
    }

    /// Any set of distinct in-window positions builds a shape that keeps them in order.
    fn check_valid_positions_are_accepted(
        starting_fret: i64,
        positions: &[(i64, i64)],
    ) -> Result<(), TestCaseError> {
        let builder = positions
            .iter()
            .fold(Shape::builder().with_starting_fret(starting_fret), |b, (s, f)| {
                b.with_dot(*s, *f)
            });
        let shape = builder
            .build()
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(shape.positions().len(), positions.len());
        for (position, (string, fret)) in shape.positions().iter().zip(positions) {
            prop_assert_eq!(i64::from(position.string().value()), *string);
            prop_assert_eq!(i64::from(position.fret().value()), *fret);
        }
        Ok(())
    }

    /// Any out-of-range string number is rejected with the offending value.
    fn check_out_of_range_string_is_rejected(value: i64) -> Result<(), TestCaseError> {
        prop_assert_eq!(
            StringIndex::new(value),
            Err(ValidationError::StringOutOfRange { value })
        );
        Ok(())
    }

    proptest! {
        #[test]
        fn valid_positions_are_accepted(
            starting_fret in 1i64..=24,
            positions in in_window_positions(),
        ) {
            check_valid_positions_are_accepted(starting_fret, &positions)?;
        }

        #[test]
        fn out_of_range_string_is_rejected(
            value in prop_oneof![i64::MIN..=0, 7i64..=i64::MAX],
        ) {
            check_out_of_range_string_is_rejected(value)?;
        }
    }
}
