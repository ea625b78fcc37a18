//! Chordgrid - Guitar chord fingering diagrams rendered to SVG.
//!
//! A chord shape (muted strings, starting fret, fretted positions and an
//! optional barre) is laid out on a fixed six-string, five-fret grid and
//! written out as a resolution-independent SVG document. Shapes come either
//! from the [`Shape`](shape::Shape) API or from the line-based chord notation.

pub mod config;
pub mod export;
pub mod layout;

mod error;

pub use chordgrid_core::{draw, geometry, shape, string_name, tables};

pub use error::ChordGridError;

use log::{debug, info, trace};

use chordgrid_core::error::ShapeError;
use chordgrid_parser::ElaborateConfig;

use config::AppConfig;
use export::svg::SvgAssembler;
use layout::ChordLayout;
use shape::Shape;

/// Builder for parsing and rendering chord diagrams.
///
/// # Examples
///
/// ```rust
/// use chordgrid::{ChordBuilder, config::AppConfig};
///
/// let source = "name \"E major\"\ndot A 2\ndot D 2\ndot G 1\n";
///
/// let builder = ChordBuilder::new(AppConfig::default());
///
/// let shape = builder.parse(source).expect("Failed to parse");
/// let svg = builder.render_svg(&shape).expect("Failed to render");
/// assert!(svg.contains("<circle"));
///
/// // Or use the default config
/// let builder = ChordBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct ChordBuilder {
    config: AppConfig,
}

impl ChordBuilder {
    /// Create a new chord builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse chord notation into a shape.
    ///
    /// With strict validation (the default) a string that is both muted and
    /// fretted is reported as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ChordGridError::Parse`] carrying every diagnostic found
    /// together with the source text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chordgrid::ChordBuilder;
    ///
    /// let shape = ChordBuilder::default()
    ///     .parse("start 5\nbarre 1 E..e\n")
    ///     .expect("Failed to parse chord");
    /// assert_eq!(shape.starting_fret(), 5);
    /// ```
    pub fn parse(&self, source: &str) -> Result<Shape, ChordGridError> {
        info!("Parsing chord notation");

        let elaborate_config = ElaborateConfig::new(self.config.validation().strict());

        let shape = chordgrid_parser::parse(source, elaborate_config)
            .map_err(|err| ChordGridError::new_parse_error(err, source))?;

        debug!("Chord parsed successfully");
        trace!(shape:?; "Parsed shape");

        Ok(shape)
    }

    /// Apply the configured validation policy to a shape built in code.
    ///
    /// # Errors
    ///
    /// Under strict validation, returns [`ChordGridError::Shape`] for the
    /// first string that is both muted and fretted.
    pub fn validate(&self, shape: &Shape) -> Result<(), ChordGridError> {
        if self.config.validation().strict() {
            shape.check_conflicts()?;
        }
        Ok(())
    }

    /// Lay out a shape on the configured canvas.
    ///
    /// Layout draws any valid shape as given; use [`ChordBuilder::validate`]
    /// first to apply the validation policy.
    ///
    /// # Errors
    ///
    /// Returns [`ChordGridError::Config`] if the configured canvas is not
    /// drawable.
    pub fn layout(&self, shape: &Shape) -> Result<ChordLayout, ChordGridError> {
        let canvas = self.config.canvas().size();
        if !canvas.is_drawable() {
            return Err(ChordGridError::Config(format!(
                "canvas must have a positive width and height, got {} x {}",
                canvas.width(),
                canvas.height()
            )));
        }
        Ok(layout::layout_shape(shape).with_canvas(canvas))
    }

    /// Render a shape to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`ChordGridError`] for configuration or export errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chordgrid::{ChordBuilder, demo_shape};
    ///
    /// let shape = demo_shape().expect("demo shape is valid");
    /// let svg = ChordBuilder::default()
    ///     .render_svg(&shape)
    ///     .expect("Failed to render chord");
    /// assert!(svg.contains("stroke-linecap=\"round\""));
    /// ```
    pub fn render_svg(&self, shape: &Shape) -> Result<String, ChordGridError> {
        info!(
            starting_fret = shape.starting_fret(),
            positions = shape.positions().len();
            "Rendering chord"
        );
        let layout = self.layout(shape)?;

        let comment = if self.config.output().comment() {
            layout.name()
        } else {
            None
        };
        let svg = SvgAssembler::new(layout.canvas())?
            .with_comment(comment)
            .render_to_string(&layout)?;

        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }
}

/// The built-in demonstration chord.
///
/// Strings 6 and 2 are muted, a barre covers strings 6 to 2 on the first
/// fret and string 2 is also fretted on the third. Rendering it needs the
/// layout to accept a string that is both muted and fretted, so it fails
/// [`ChordBuilder::validate`] under strict validation.
///
/// # Errors
///
/// Never fails for the built-in values; the error type is that of
/// [`Shape::builder`].
pub fn demo_shape() -> Result<Shape, ShapeError> {
    Shape::builder()
        .with_muted(6)
        .with_muted(2)
        .with_starting_fret(1)
        .with_dot(2, 3)
        .with_barre(1, 6, 2)
        .build()
}
