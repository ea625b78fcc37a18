//! String lines, fret lines and the starting-fret label.
//!
//! The grid is the same for every shape except for fret boundary 1: at the
//! nut it is drawn bold, further up the neck it is drawn thin and the
//! starting fret number is written next to it.

use log::trace;

use chordgrid_core::{
    draw::{DrawPrimitive, StrokeDefinition},
    geometry::Point,
    shape::StringIndex,
    tables::{FRET_Y, GRID_BOTTOM, GRID_LEFT, GRID_RIGHT, GRID_TOP},
};

/// Grid primitives for one starting fret.
#[derive(Debug, Clone)]
pub struct Grid {
    label: Option<DrawPrimitive>,
    lines: Vec<DrawPrimitive>,
}

impl Grid {
    /// Builds the grid for a diagram starting at `starting_fret`.
    ///
    /// Lines come out as six strings left to right, then fret boundaries 2
    /// through 6 top to bottom, then fret boundary 1.
    pub fn new(starting_fret: u64) -> Self {
        let mut lines: Vec<DrawPrimitive> = StringIndex::all()
            .map(|string| {
                DrawPrimitive::line(
                    Point::new(string.x(), GRID_TOP),
                    Point::new(string.x(), GRID_BOTTOM),
                    StrokeDefinition::grid(),
                )
            })
            .collect();

        lines.extend(FRET_Y[1..].iter().map(|&y| fret_line(y, StrokeDefinition::grid())));

        let at_nut = starting_fret == 1;
        let first_stroke = if at_nut {
            StrokeDefinition::nut()
        } else {
            StrokeDefinition::grid()
        };
        lines.push(fret_line(FRET_Y[0], first_stroke));

        let label = (!at_nut).then(|| {
            DrawPrimitive::fret_label(starting_fret, (FRET_Y[0] + FRET_Y[1]) / 2.0)
        });

        trace!(starting_fret = starting_fret, lines = lines.len(), labelled = label.is_some(); "Grid built");

        Self { label, lines }
    }

    /// Splits into the starting-fret label, present only away from the
    /// nut, and the grid lines.
    pub fn into_parts(self) -> (Option<DrawPrimitive>, Vec<DrawPrimitive>) {
        (self.label, self.lines)
    }
}

fn fret_line(y: f32, stroke: StrokeDefinition) -> DrawPrimitive {
    DrawPrimitive::line(Point::new(GRID_LEFT, y), Point::new(GRID_RIGHT, y), stroke)
}
