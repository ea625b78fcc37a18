//! Chordgrid CLI library
//!
//! This module contains the core CLI logic for the Chordgrid chord diagram
//! tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use chordgrid::{ChordBuilder, ChordGridError, demo_shape};

/// Run the Chordgrid CLI application
///
/// Reads the input notation file, or falls back to the built-in demo chord
/// when no input is given, and writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `ChordGridError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Notation errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), ChordGridError> {
    info!(
        input_path:? = args.input,
        output_path = args.output;
        "Processing chord"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let builder = ChordBuilder::new(app_config);

    let shape = match &args.input {
        Some(input) => {
            let source = fs::read_to_string(input)?;
            builder.parse(&source)?
        }
        None => {
            info!("No input file given, rendering the demo chord");
            demo_shape()?
        }
    };
    let svg = builder.render_svg(&shape)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
