//! SVG document assembly.
//!
//! Every coordinate is written as a percentage of the document, so the
//! canvas size only affects the root `width`/`height` attributes.

mod primitive;

use std::io;

use log::{debug, info};
use svg::{Document, node::Comment};

use chordgrid_core::geometry::Size;

use super::{Error, Exporter};
use crate::layout::ChordLayout;

/// Turns a [`ChordLayout`] into an SVG document.
#[derive(Debug, Clone)]
pub struct SvgAssembler {
    canvas: Size,
    comment: Option<String>,
}

impl SvgAssembler {
    /// Creates an assembler for a document of `canvas` points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if either dimension is not a finite,
    /// positive number.
    pub fn new(canvas: Size) -> Result<Self, Error> {
        if !canvas.is_drawable() {
            return Err(Error::Render(format!(
                "canvas {} x {} is not drawable, both sides must be positive",
                canvas.width(),
                canvas.height()
            )));
        }
        Ok(Self {
            canvas,
            comment: None,
        })
    }

    /// Sets the leading XML comment, usually the chord name.
    pub fn with_comment(mut self, comment: Option<&str>) -> Self {
        // "--" may not appear inside an XML comment
        self.comment = comment.map(|text| text.replace("--", "- -"));
        self
    }

    /// Builds the document, serializing primitives in layout order.
    pub fn assemble(&self, layout: &ChordLayout) -> Document {
        let mut doc = Document::new()
            .set("version", "1.1")
            .set("baseProfile", "full")
            .set("width", format!("{}pt", self.canvas.width()))
            .set("height", format!("{}pt", self.canvas.height()));

        if let Some(comment) = &self.comment {
            doc = doc.add(Comment::new(comment.as_str()));
        }

        for primitive in layout.primitives() {
            doc = primitive::append(doc, primitive);
        }

        debug!(
            width = self.canvas.width(),
            height = self.canvas.height(),
            elements = layout.primitives().len();
            "SVG document assembled"
        );
        doc
    }

    /// Renders the document to a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if serialization produces invalid UTF-8.
    pub fn render_to_string(&self, layout: &ChordLayout) -> Result<String, Error> {
        let mut buffer = Vec::new();
        self.export_layout(layout, &mut buffer)?;
        String::from_utf8(buffer).map_err(|err| Error::Render(err.to_string()))
    }
}

impl Exporter for SvgAssembler {
    fn export_layout<W: io::Write>(&self, layout: &ChordLayout, writer: W) -> Result<(), Error> {
        svg::write(writer, &self.assemble(layout)).map_err(Error::Io)?;
        info!(elements = layout.primitives().len(); "SVG exported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chordgrid_core::shape::Shape;

    use super::*;
    use crate::layout::layout_shape;

    fn demo_layout() -> ChordLayout {
        let shape = Shape::builder()
            .with_muted(6)
            .with_muted(2)
            .with_dot(2, 3)
            .with_barre(1, 6, 2)
            .build()
            .unwrap();
        layout_shape(&shape)
    }

    #[test]
    fn test_root_attributes() {
        let svg = SvgAssembler::new(Size::new(200.0, 250.0))
            .unwrap()
            .render_to_string(&demo_layout())
            .unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("version=\"1.1\""));
        assert!(svg.contains("baseProfile=\"full\""));
        assert!(svg.contains("width=\"200pt\""));
        assert!(svg.contains("height=\"250pt\""));
    }

    #[test]
    fn test_element_counts_follow_layout() {
        let svg = SvgAssembler::new(Size::new(200.0, 250.0))
            .unwrap()
            .render_to_string(&demo_layout())
            .unwrap();

        assert_eq!(svg.matches("<line").count(), 13);
        assert_eq!(svg.matches("<circle").count(), 1);
        assert_eq!(svg.matches("<text").count(), 2);
    }

    #[test]
    fn test_barre_and_dot_attributes() {
        let svg = SvgAssembler::new(Size::new(200.0, 250.0))
            .unwrap()
            .render_to_string(&demo_layout())
            .unwrap();

        assert!(svg.contains("x1=\"17.4%\""));
        assert!(svg.contains("x2=\"76.6%\""));
        assert!(svg.contains("stroke-linecap=\"round\""));
        assert!(svg.contains("stroke:rgb(0, 0, 0);stroke-width:20"));
        assert!(svg.contains("stroke:rgb(0, 0, 0);stroke-width:5"));
        assert!(svg.contains("cx=\"79%\""));
        assert!(svg.contains("cy=\"52.5%\""));
        assert!(svg.contains("r=\"4%\""));
    }

    #[test]
    fn test_comment_is_written_first() {
        let layout = demo_layout();
        let svg = SvgAssembler::new(Size::new(200.0, 250.0))
            .unwrap()
            .with_comment(Some("F--major"))
            .render_to_string(&layout)
            .unwrap();

        let comment = svg.find("<!--").unwrap();
        assert!(comment < svg.find("<line").unwrap());
        assert!(svg.contains("F- -major"));
    }

    #[test]
    fn test_no_comment_by_default() {
        let svg = SvgAssembler::new(Size::new(200.0, 250.0))
            .unwrap()
            .render_to_string(&demo_layout())
            .unwrap();
        assert!(!svg.contains("<!--"));
    }

    #[test]
    fn test_canvas_only_changes_root_size() {
        let layout = demo_layout();
        let small = SvgAssembler::new(Size::new(200.0, 250.0))
            .unwrap()
            .render_to_string(&layout)
            .unwrap();
        let large = SvgAssembler::new(Size::new(400.0, 500.0))
            .unwrap()
            .render_to_string(&layout)
            .unwrap();

        assert!(large.contains("width=\"400pt\""));
        assert_eq!(small.matches("x1=\"17.4%\"").count(), large.matches("x1=\"17.4%\"").count());
    }

    #[test]
    fn test_undrawable_canvas_is_rejected() {
        for size in [
            Size::new(0.0, 250.0),
            Size::new(200.0, -1.0),
            Size::new(f32::NAN, 250.0),
        ] {
            let err = SvgAssembler::new(size).unwrap_err();
            assert!(matches!(err, Error::Render(_)), "{size:?}");
        }
    }
}
