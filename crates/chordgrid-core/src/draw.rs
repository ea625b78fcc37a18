//! Resolution-independent draw primitives.
//!
//! The layout engine turns a [`Shape`](crate::shape::Shape) into an ordered
//! list of [`DrawPrimitive`] values. Coordinates are percentages of the
//! canvas and nothing in this module knows about SVG; serialization happens
//! in the export layer of the `chordgrid` crate.
//!
//! - [`DrawPrimitive`] - A line, circle or text mark
//! - [`StrokeDefinition`] - Width and endcap of a line
//! - [`TextAnchor`], [`TextBaseline`] - Text alignment hints

mod primitive;
mod stroke;

pub use primitive::{DrawPrimitive, TextAnchor, TextBaseline};
pub use stroke::{StrokeCap, StrokeDefinition};
