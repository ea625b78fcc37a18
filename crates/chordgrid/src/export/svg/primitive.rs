//! SVG elements for individual draw primitives.

use svg::{
    Document,
    node::element::{Circle, Line, Text},
};

use chordgrid_core::draw::{DrawPrimitive, StrokeCap};

const STROKE_COLOR: &str = "rgb(0, 0, 0)";

/// Appends the SVG element for `primitive` to `doc`.
pub(super) fn append(doc: Document, primitive: &DrawPrimitive) -> Document {
    match primitive {
        DrawPrimitive::Line { start, end, stroke } => {
            let mut line = Line::new()
                .set("x1", percent(start.x()))
                .set("y1", percent(start.y()))
                .set("x2", percent(end.x()))
                .set("y2", percent(end.y()))
                .set(
                    "style",
                    format!("stroke:{STROKE_COLOR};stroke-width:{}", stroke.width()),
                );
            if stroke.cap() == StrokeCap::Round {
                line = line.set("stroke-linecap", stroke.cap().to_svg_value());
            }
            doc.add(line)
        }
        DrawPrimitive::Circle { center, radius } => doc.add(
            Circle::new()
                .set("cx", percent(center.x()))
                .set("cy", percent(center.y()))
                .set("r", percent(*radius)),
        ),
        DrawPrimitive::Text {
            position,
            content,
            font_size,
            anchor,
            baseline,
        } => {
            let mut text = Text::new(content.as_str())
                .set("x", percent(position.x()))
                .set("y", percent(position.y()))
                .set("font-size", format!("{font_size}em"));
            if let Some(anchor) = anchor {
                text = text.set("text-anchor", anchor.to_svg_value());
            }
            if let Some(baseline) = baseline {
                text = text.set("alignment-baseline", baseline.to_svg_value());
            }
            doc.add(text)
        }
    }
}

fn percent(value: f32) -> String {
    format!("{value}%")
}
