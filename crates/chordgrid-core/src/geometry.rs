//! Geometric primitives for chord diagram layout.
//!
//! - [`Point`] - A 2D coordinate in percentage space
//! - [`Size`] - Width and height dimensions of the canvas
//!
//! # Coordinate System
//!
//! Chordgrid uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Layout coordinates are percentages of the canvas, so `(100, 100)` is
//! always the bottom-right corner regardless of the document size.

/// A 2D point in percentage coordinate space.
///
/// # Examples
///
/// ```
/// # use chordgrid_core::geometry::Point;
/// let dot = Point::new(15.0, 18.5);
/// assert_eq!(dot.x(), 15.0);
/// assert_eq!(dot.y(), 18.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }
}

/// Width and height of the output canvas, in points.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    /// Creates a new size with the specified width and height
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns `true` when both dimensions are finite and strictly positive.
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}
