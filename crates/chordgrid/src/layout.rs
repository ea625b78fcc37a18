//! Layout of a chord shape into draw primitives.
//!
//! Layout is a pure function of the [`Shape`]: the same shape always yields
//! the same primitives in the same order. Later primitives draw on top of
//! earlier ones, so the order is part of the output contract:
//!
//! 1. starting-fret label (only away from the nut)
//! 2. grid lines ([`grid`])
//! 3. barre ([`barre`])
//! 4. finger dots and muted-string marks ([`annotation`])

pub mod annotation;
pub mod barre;
pub mod grid;
pub mod position;

use log::{debug, trace};

use chordgrid_core::{
    draw::DrawPrimitive,
    geometry::Size,
    shape::Shape,
    tables::{CANVAS_HEIGHT, CANVAS_WIDTH},
};

use grid::Grid;

/// The laid-out diagram, ready for export.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordLayout {
    primitives: Vec<DrawPrimitive>,
    canvas: Size,
    name: Option<String>,
}

impl ChordLayout {
    /// Replaces the canvas size. Primitive coordinates are percentages and
    /// are not touched.
    pub fn with_canvas(mut self, canvas: Size) -> Self {
        self.canvas = canvas;
        self
    }

    /// Primitives in draw order.
    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Chord name carried over from the shape.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Lays out `shape` on the default 200 x 250 canvas.
pub fn layout_shape(shape: &Shape) -> ChordLayout {
    let (label, lines) = Grid::new(shape.starting_fret()).into_parts();

    let mut primitives = Vec::with_capacity(
        lines.len() + 2 + shape.positions().len() + shape.muted_strings().len(),
    );
    primitives.extend(label);
    primitives.extend(lines);
    primitives.extend(shape.barre().map(barre::barre_line));
    primitives.extend(annotation::dots(shape));
    primitives.extend(annotation::muted_glyphs(shape));

    debug!(
        starting_fret = shape.starting_fret(),
        primitives = primitives.len(),
        dots = shape.positions().len(),
        muted = shape.muted_strings().len(),
        barre = shape.barre().is_some();
        "Shape laid out"
    );
    trace!(primitives:? = primitives; "Layout primitives");

    ChordLayout {
        primitives,
        canvas: Size::new(CANVAS_WIDTH, CANVAS_HEIGHT),
        name: shape.name().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use chordgrid_core::{
        draw::StrokeCap,
        error::{ShapeError, ValidationError},
    };

    use super::*;

    fn scenario_a() -> Shape {
        Shape::builder()
            .with_muted(6)
            .with_muted(2)
            .with_starting_fret(1)
            .with_dot(2, 3)
            .with_barre(1, 6, 2)
            .build()
            .unwrap()
    }

    fn texts(layout: &ChordLayout) -> Vec<&DrawPrimitive> {
        layout
            .primitives()
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Text { .. }))
            .collect()
    }

    fn circles(layout: &ChordLayout) -> Vec<&DrawPrimitive> {
        layout
            .primitives()
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Circle { .. }))
            .collect()
    }

    #[test]
    fn test_scenario_a_nut_barre_dot_and_mutes() {
        let layout = layout_shape(&scenario_a());
        let primitives = layout.primitives();

        // 12 grid lines, barre, dot, two glyphs
        assert_eq!(primitives.len(), 16);

        let nut = &primitives[11];
        assert!(nut.is_horizontal_line());
        assert_approx_eq!(f32, nut.stroke().unwrap().width(), 5.0);

        let DrawPrimitive::Line { start, end, stroke } = &primitives[12] else {
            panic!("expected barre line, got {:?}", primitives[12]);
        };
        assert_approx_eq!(f32, start.x(), 17.4);
        assert_approx_eq!(f32, end.x(), 76.6);
        assert_approx_eq!(f32, start.y(), 18.5);
        assert_eq!(stroke.cap(), StrokeCap::Round);

        let dots = circles(&layout);
        assert_eq!(dots.len(), 1);
        let DrawPrimitive::Circle { center, .. } = dots[0] else {
            unreachable!()
        };
        assert_approx_eq!(f32, center.x(), 79.0);
        assert_approx_eq!(f32, center.y(), 52.5);

        let glyphs = texts(&layout);
        assert_eq!(glyphs.len(), 2);
        let xs: Vec<f32> = glyphs
            .iter()
            .map(|p| match p {
                DrawPrimitive::Text { position, content, .. } => {
                    assert_eq!(content, "x");
                    position.x()
                }
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(xs, vec![15.0, 79.0]);
    }

    #[test]
    fn test_scenario_b_label_and_no_barre() {
        let shape = Shape::builder()
            .with_muted(6)
            .with_muted(2)
            .with_starting_fret(3)
            .with_dot(2, 3)
            .build()
            .unwrap();
        let layout = layout_shape(&shape);
        let primitives = layout.primitives();

        let DrawPrimitive::Text { position, content, .. } = &primitives[0] else {
            panic!("label must come first, got {:?}", primitives[0]);
        };
        assert_eq!(content, "3");
        assert_approx_eq!(f32, position.y(), 18.5);

        let lines: Vec<&DrawPrimitive> = primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Line { .. }))
            .collect();
        assert_eq!(lines.len(), 12);
        assert!(
            lines
                .iter()
                .all(|line| line.stroke().unwrap().width() == 2.0)
        );
    }

    #[test]
    fn test_scenario_c_rejected_before_layout() {
        let result = Shape::builder().with_barre(2, 3, 5).build();
        assert_eq!(
            result,
            Err(ShapeError::Validation(ValidationError::BarreNotDescending {
                start: 3,
                end: 5
            }))
        );
    }

    #[test]
    fn test_annotations_draw_on_top() {
        let layout = layout_shape(&scenario_a());
        let last_line = layout
            .primitives()
            .iter()
            .rposition(|p| matches!(p, DrawPrimitive::Line { .. }))
            .unwrap();
        let first_circle = layout
            .primitives()
            .iter()
            .position(|p| matches!(p, DrawPrimitive::Circle { .. }))
            .unwrap();
        assert!(last_line < first_circle);
    }

    #[test]
    fn test_layout_carries_name_and_canvas() {
        let layout = layout_shape(&scenario_a().with_name("F/A"));
        assert_eq!(layout.name(), Some("F/A"));
        assert_eq!(layout.canvas(), Size::new(200.0, 250.0));

        let resized = layout.with_canvas(Size::new(400.0, 500.0));
        assert_eq!(resized.canvas(), Size::new(400.0, 500.0));
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn shape_strategy() -> impl Strategy<Value = Shape> {
        let positions = proptest::sample::subsequence((1..=6).collect::<Vec<i64>>(), 0..=6)
            .prop_flat_map(|strings| {
                let len = strings.len();
                (Just(strings), proptest::collection::vec(1..=5i64, len))
            });
        let muted = proptest::collection::vec(1i64..=6, 0..=4);
        let barre = proptest::option::of(
            (1i64..=5, 2i64..=6).prop_flat_map(|(fret, start)| (Just(fret), Just(start), 1..start)),
        );

        (1i64..=20, positions, muted, barre).prop_map(|(start, (strings, frets), muted, barre)| {
            let mut builder = Shape::builder().with_starting_fret(start);
            for string in muted {
                builder = builder.with_muted(string);
            }
            for (string, fret) in strings.into_iter().zip(frets) {
                builder = builder.with_dot(string, fret);
            }
            if let Some((fret, s, e)) = barre {
                builder = builder.with_barre(fret, s, e);
            }
            builder.build().unwrap()
        })
    }

    /// Every layout has six strings, six fret boundaries and one stroke rule for fret 1.
    fn check_grid_invariants(shape: &Shape) -> Result<(), TestCaseError> {
        let layout = layout_shape(shape);
        let primitives = layout.primitives();

        let vertical = primitives.iter().filter(|p| p.is_vertical_line()).count();
        prop_assert_eq!(vertical, 6);

        let barre = usize::from(shape.barre().is_some());
        let horizontal = primitives.iter().filter(|p| p.is_horizontal_line()).count();
        prop_assert_eq!(horizontal, 6 + barre);

        let label = primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Text { baseline: Some(_), .. }))
            .count();
        prop_assert_eq!(label == 1, !shape.starts_at_nut());

        let nut = primitives
            .iter()
            .filter(|p| p.stroke().is_some_and(|s| s.width() == 5.0))
            .count();
        prop_assert_eq!(nut == 1, shape.starts_at_nut());
        Ok(())
    }

    /// Laying out the same shape twice gives the same primitives.
    fn check_layout_is_idempotent(shape: &Shape) -> Result<(), TestCaseError> {
        prop_assert_eq!(layout_shape(shape), layout_shape(shape));
        Ok(())
    }

    proptest! {
        #[test]
        fn grid_invariants(shape in shape_strategy()) {
            check_grid_invariants(&shape)?;
        }

        #[test]
        fn layout_is_idempotent(shape in shape_strategy()) {
            check_layout_is_idempotent(&shape)?;
        }
    }
}
