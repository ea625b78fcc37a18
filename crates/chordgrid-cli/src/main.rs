//! `chordgrid` binary: renders one chord file to SVG.

use std::process;

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use miette::GraphicalReportHandler;

use chordgrid_cli::{Args, error_adapter};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match chordgrid_cli::run(&args) {
        Ok(()) => info!(output = args.output; "Chord diagram written"),
        Err(err) => {
            let handler = GraphicalReportHandler::new();
            for report in error_adapter::render(&handler, &err) {
                error!("{report}");
            }
            process::exit(1);
        }
    }
}

/// Unknown levels fall back to warnings only.
fn init_logging(requested: &str) {
    let level = requested.parse::<LevelFilter>().unwrap_or_else(|_| {
        eprintln!("unknown log level `{requested}`, logging warnings only");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .init();

    info!(log_level:? = level; "Starting Chordgrid");
}
