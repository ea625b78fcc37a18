//! Configuration types for chord diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every section and field is optional.
//!
//! - [`AppConfig`] - Top-level configuration root.
//! - [`CanvasConfig`] - Output document size.
//! - [`ValidationConfig`] - How strictly notation input is checked.
//! - [`OutputConfig`] - Extra content written to the document.
//!
//! # Example
//!
//! ```
//! # use chordgrid::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().size().width(), 200.0);
//! assert!(config.validation().strict());
//! assert!(config.output().comment());
//! ```

use serde::Deserialize;

use chordgrid_core::{
    geometry::Size,
    tables::{CANVAS_HEIGHT, CANVAS_WIDTH},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Validation configuration section.
    #[serde(default)]
    validation: ValidationConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(canvas: CanvasConfig, validation: ValidationConfig, output: OutputConfig) -> Self {
        Self {
            canvas,
            validation,
            output,
        }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the validation configuration.
    pub fn validation(&self) -> &ValidationConfig {
        &self.validation
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Size of the output document, in points.
///
/// Diagram coordinates are percentages, so changing the size scales the
/// whole chord without moving anything relative to the grid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CanvasConfig {
    #[serde(default)]
    width: Option<f32>,

    #[serde(default)]
    height: Option<f32>,
}

impl CanvasConfig {
    /// Creates a canvas configuration; `None` falls back to the default size.
    pub fn new(width: Option<f32>, height: Option<f32>) -> Self {
        Self { width, height }
    }

    /// Returns the configured size, filling gaps with the 200 x 250 default.
    pub fn size(&self) -> Size {
        Size::new(
            self.width.unwrap_or(CANVAS_WIDTH),
            self.height.unwrap_or(CANVAS_HEIGHT),
        )
    }
}

/// Validation policy for notation input.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Reject strings that are both muted and fretted.
    #[serde(default = "default_true")]
    strict: bool,
}

impl ValidationConfig {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Returns `true` if muted-and-fretted strings are rejected.
    pub fn strict(&self) -> bool {
        self.strict
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Extra document content.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Write the chord name as an XML comment at the top of the document.
    #[serde(default = "default_true")]
    comment: bool,
}

impl OutputConfig {
    pub fn new(comment: bool) -> Self {
        Self { comment }
    }

    /// Returns `true` if the chord name comment is written.
    pub fn comment(&self) -> bool {
        self.comment
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

fn default_true() -> bool {
    true
}
