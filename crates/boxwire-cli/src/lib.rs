//! CLI logic for the boxwire diagram tool.
//!
//! This module contains the core CLI logic: load the configuration, parse
//! the input diagram and write the exported graph.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use boxwire::{BoxwireError, GraphBuilder};

/// Run the boxwire CLI application
///
/// This function parses the input diagram and writes the exported graph to
/// the output file, or to stdout when no output file is given.
///
/// # Errors
///
/// Returns `BoxwireError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), BoxwireError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing diagram"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(format) = args.format {
        app_config = app_config.with_format(format);
    }

    let source = fs::read_to_string(&args.input)?;

    let builder = GraphBuilder::new(app_config);
    let graph = builder.parse(&source)?;
    let exported = builder.export(&graph)?;

    match &args.output {
        Some(path) => {
            fs::write(path, exported)?;
            info!(output_file = path; "Graph exported successfully");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(exported.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
