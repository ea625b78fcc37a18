//! Draw primitives emitted by the layout engine.

use crate::{
    draw::StrokeDefinition,
    geometry::Point,
    tables::{
        DOT_RADIUS, FRET_LABEL_FONT_SIZE, FRET_LABEL_X, MUTED_GLYPH, MUTED_GLYPH_FONT_SIZE,
        MUTED_GLYPH_Y,
    },
};

/// Horizontal text alignment, maps to SVG `text-anchor`.
///
/// Text without an anchor starts at its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Centred on x, used for the muted-string glyphs.
    Middle,
}

impl TextAnchor {
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Middle => "middle",
        }
    }
}

/// Vertical text alignment, maps to SVG `alignment-baseline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    /// Centred on y, used for the starting-fret label.
    Central,
}

impl TextBaseline {
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Central => "central",
        }
    }
}

/// A single mark in a chord diagram.
///
/// All coordinates and the circle radius are percentages of the canvas.
/// Text font sizes are in `em`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    /// A straight line segment.
    Line {
        start: Point,
        end: Point,
        stroke: StrokeDefinition,
    },
    /// A filled finger dot.
    Circle { center: Point, radius: f32 },
    /// A text mark.
    Text {
        position: Point,
        content: String,
        font_size: f32,
        anchor: Option<TextAnchor>,
        baseline: Option<TextBaseline>,
    },
}

impl DrawPrimitive {
    /// Creates a line primitive.
    pub fn line(start: Point, end: Point, stroke: StrokeDefinition) -> Self {
        Self::Line { start, end, stroke }
    }

    /// Creates a finger dot at `center` with the standard radius.
    pub fn dot(center: Point) -> Self {
        Self::Circle {
            center,
            radius: DOT_RADIUS,
        }
    }

    /// Creates the starting-fret label, vertically centred at `y`.
    pub fn fret_label(starting_fret: u64, y: f32) -> Self {
        Self::Text {
            position: Point::new(FRET_LABEL_X, y),
            content: starting_fret.to_string(),
            font_size: FRET_LABEL_FONT_SIZE,
            anchor: None,
            baseline: Some(TextBaseline::Central),
        }
    }

    /// Creates a muted-string glyph centred above the string at `x`.
    pub fn muted_glyph(x: f32) -> Self {
        Self::Text {
            position: Point::new(x, MUTED_GLYPH_Y),
            content: MUTED_GLYPH.to_string(),
            font_size: MUTED_GLYPH_FONT_SIZE,
            anchor: Some(TextAnchor::Middle),
            baseline: None,
        }
    }

    /// Returns `true` for a line whose endpoints share an x coordinate.
    pub fn is_vertical_line(&self) -> bool {
        matches!(self, Self::Line { start, end, .. } if start.x() == end.x())
    }

    /// Returns `true` for a line whose endpoints share a y coordinate.
    pub fn is_horizontal_line(&self) -> bool {
        matches!(self, Self::Line { start, end, .. } if start.y() == end.y())
    }

    /// Returns the stroke of a line, or `None` for other primitives.
    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        match self {
            Self::Line { stroke, .. } => Some(stroke),
            _ => None,
        }
    }

    /// Returns the text content, or `None` for non-text primitives.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}
