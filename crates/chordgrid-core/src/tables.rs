//! Fixed coordinate tables and rendering constants of the chord grid.
//!
//! Every coordinate here is a percentage of the canvas. The tables are the
//! single source of truth for where strings and fret wires are drawn; the
//! layout engine only ever indexes into them.
//!
//! ```text
//!        6   5   4   3   2   1      string number
//!   10 ──┬───┬───┬───┬───┬───┬──    FRET_Y[0] (nut)
//!        │   │   │   │   │   │
//!   27 ──┼───┼───┼───┼───┼───┼──    FRET_Y[1]
//!        ⋮                   ⋮
//!   95 ──┴───┴───┴───┴───┴───┴──    FRET_Y[5]
//!       15  31  47  63  79  95      STRING_X
//! ```

// =============================================================================
// Grid dimensions
// =============================================================================

/// Number of strings on the instrument.
pub const STRING_COUNT: usize = 6;

/// Number of fret cells visible in one diagram.
pub const FRET_COUNT: usize = 5;

/// X position of each string line, left to right (string 6 first).
pub const STRING_X: [f32; STRING_COUNT] = [15.0, 31.0, 47.0, 63.0, 79.0, 95.0];

/// Y position of each fret boundary, top to bottom (nut first).
pub const FRET_Y: [f32; FRET_COUNT + 1] = [10.0, 27.0, 44.0, 61.0, 78.0, 95.0];

// =============================================================================
// Grid padding
// =============================================================================

/// Top end of every string line.
pub const GRID_TOP: f32 = 10.0;

/// Bottom end of every string line.
pub const GRID_BOTTOM: f32 = 95.0;

/// Left end of every fret line.
pub const GRID_LEFT: f32 = 14.6;

/// Right end of every fret line.
pub const GRID_RIGHT: f32 = 95.0;

// =============================================================================
// Canvas
// =============================================================================

/// Default document width, in points.
pub const CANVAS_WIDTH: f32 = 200.0;

/// Default document height, in points.
pub const CANVAS_HEIGHT: f32 = 250.0;

// =============================================================================
// Strokes and marks
// =============================================================================

/// Stroke width of string lines and ordinary fret lines.
pub const GRID_STROKE_WIDTH: f32 = 2.0;

/// Stroke width of the nut (fret boundary 1 when the diagram starts at fret 1).
pub const NUT_STROKE_WIDTH: f32 = 5.0;

/// Stroke width of the barre bar.
pub const BARRE_STROKE_WIDTH: f32 = 20.0;

/// Inset applied to both barre endpoints so the rounded caps end on the outer strings.
pub const ENDCAP_CORRECTION: f32 = 2.4;

/// Radius of a finger dot.
pub const DOT_RADIUS: f32 = 4.0;

// =============================================================================
// Text
// =============================================================================

/// X position of the starting-fret label, left of the grid.
pub const FRET_LABEL_X: f32 = 1.0;

/// Font size of the starting-fret label, in `em`.
pub const FRET_LABEL_FONT_SIZE: f32 = 2.0;

/// Y position of muted-string glyphs, above the nut.
pub const MUTED_GLYPH_Y: f32 = 6.0;

/// Font size of muted-string glyphs, in `em`.
pub const MUTED_GLYPH_FONT_SIZE: f32 = 2.0;

/// Glyph drawn above a muted string.
pub const MUTED_GLYPH: &str = "x";
