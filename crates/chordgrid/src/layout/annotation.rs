//! Finger dots and muted-string marks.

use chordgrid_core::{draw::DrawPrimitive, shape::Shape};

use super::position::dot_coordinates;

/// Returns one dot per fretted position, in shape order.
pub fn dots(shape: &Shape) -> impl Iterator<Item = DrawPrimitive> + '_ {
    shape
        .positions()
        .iter()
        .map(|position| DrawPrimitive::dot(dot_coordinates(position.string(), position.fret())))
}

/// Returns one "x" above each muted string, in the order they were muted.
pub fn muted_glyphs(shape: &Shape) -> impl Iterator<Item = DrawPrimitive> + '_ {
    shape
        .muted_strings()
        .map(|string| DrawPrimitive::muted_glyph(string.x()))
}
