//! Stroke definitions for grid lines and the barre.
//!
//! Chord diagrams are always drawn in solid black, so a stroke is just a
//! width and an endcap.
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `width` | `stroke-width` (inside `style`) | `2`, `5`, `20` |
//! | `cap` | `stroke-linecap` | `"round"` |

use crate::tables::{BARRE_STROKE_WIDTH, GRID_STROKE_WIDTH, NUT_STROKE_WIDTH};

/// How line endpoints are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint, the SVG default.
    Butt,
    /// Rounded cap reaching half the stroke width past the endpoint.
    Round,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
        }
    }
}

/// A stroke for rendering lines.
///
/// # Examples
///
/// ```
/// use chordgrid_core::draw::{StrokeCap, StrokeDefinition};
///
/// let barre = StrokeDefinition::barre();
/// assert_eq!(barre.width(), 20.0);
/// assert_eq!(barre.cap(), StrokeCap::Round);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeDefinition {
    width: f32,
    cap: StrokeCap,
}

impl StrokeDefinition {
    fn new(width: f32, cap: StrokeCap) -> Self {
        Self { width, cap }
    }

    /// Stroke of string lines and ordinary fret lines.
    pub fn grid() -> Self {
        Self::new(GRID_STROKE_WIDTH, StrokeCap::Butt)
    }

    /// Stroke of the nut.
    pub fn nut() -> Self {
        Self::new(NUT_STROKE_WIDTH, StrokeCap::Butt)
    }

    /// Stroke of the barre bar, with rounded ends.
    pub fn barre() -> Self {
        Self::new(BARRE_STROKE_WIDTH, StrokeCap::Round)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }
}
