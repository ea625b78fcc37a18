//! The barre bar across several strings.

use chordgrid_core::{
    draw::{DrawPrimitive, StrokeDefinition},
    geometry::Point,
    shape::Barre,
    tables::ENDCAP_CORRECTION,
};

/// Returns the thick rounded line drawn for `barre`.
///
/// Both ends are pulled inwards so that the rounded caps finish on the outer
/// strings instead of overshooting them.
pub fn barre_line(barre: Barre) -> DrawPrimitive {
    let y = barre.fret().center_y();
    let x1 = barre.string_start().x() + ENDCAP_CORRECTION;
    let x2 = barre.string_end().x() - ENDCAP_CORRECTION;

    DrawPrimitive::line(Point::new(x1, y), Point::new(x2, y), StrokeDefinition::barre())
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use chordgrid_core::draw::StrokeCap;

    use super::*;

    #[test]
    fn test_barre_line_first_fret() {
        let barre = Barre::try_new(1, 6, 2).unwrap();
        let line = barre_line(barre);

        let DrawPrimitive::Line { start, end, stroke } = line else {
            panic!("expected a line");
        };
        assert_approx_eq!(f32, start.x(), 17.4);
        assert_approx_eq!(f32, end.x(), 76.6);
        assert_approx_eq!(f32, start.y(), 18.5);
        assert_approx_eq!(f32, end.y(), 18.5);
        assert_approx_eq!(f32, stroke.width(), 20.0);
        assert_eq!(stroke.cap(), StrokeCap::Round);
    }

    #[test]
    fn test_barre_line_follows_fret() {
        let line = barre_line(Barre::try_new(4, 5, 1).unwrap());
        let DrawPrimitive::Line { start, end, .. } = line else {
            panic!("expected a line");
        };
        assert_approx_eq!(f32, start.y(), 69.5);
        assert_approx_eq!(f32, start.x(), 33.4);
        assert_approx_eq!(f32, end.x(), 92.6);
    }
}
