//! Mapping from (string, fret) to dot coordinates.

use chordgrid_core::{
    error::ValidationError,
    geometry::Point,
    shape::{FretNumber, StringIndex},
};

/// Returns the centre of the cell where a finger presses `string` at `fret`.
///
/// The x coordinate is the string's line; the y coordinate is halfway
/// between the fret boundaries above and below the cell.
pub fn dot_coordinates(string: StringIndex, fret: FretNumber) -> Point {
    Point::new(string.x(), fret.center_y())
}

/// Like [`dot_coordinates`], for raw numbers.
///
/// # Errors
///
/// Returns [`ValidationError::StringOutOfRange`] or
/// [`ValidationError::FretOutOfWindow`] before any table lookup.
pub fn try_dot_coordinates(string: i64, fret: i64) -> Result<Point, ValidationError> {
    Ok(dot_coordinates(StringIndex::new(string)?, FretNumber::new(fret)?))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_dot_coordinates_corners() {
        let top_left = try_dot_coordinates(6, 1).unwrap();
        assert_approx_eq!(f32, top_left.x(), 15.0);
        assert_approx_eq!(f32, top_left.y(), 18.5);

        let bottom_right = try_dot_coordinates(1, 5).unwrap();
        assert_approx_eq!(f32, bottom_right.x(), 95.0);
        assert_approx_eq!(f32, bottom_right.y(), 86.5);
    }

    #[test]
    fn test_dot_coordinates_b_string_third_fret() {
        let point = try_dot_coordinates(2, 3).unwrap();
        assert_approx_eq!(f32, point.x(), 79.0);
        assert_approx_eq!(f32, point.y(), 52.5);
    }

    #[test]
    fn test_try_dot_coordinates_rejects_out_of_range() {
        assert_eq!(
            try_dot_coordinates(0, 1),
            Err(ValidationError::StringOutOfRange { value: 0 })
        );
        assert_eq!(
            try_dot_coordinates(7, 1),
            Err(ValidationError::StringOutOfRange { value: 7 })
        );
        assert_eq!(
            try_dot_coordinates(3, 6),
            Err(ValidationError::FretOutOfWindow { value: 6 })
        );
        assert_eq!(
            try_dot_coordinates(3, 0),
            Err(ValidationError::FretOutOfWindow { value: 0 })
        );
    }
}
