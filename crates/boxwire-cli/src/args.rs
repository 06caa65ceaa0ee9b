//! Command-line argument definitions for the boxwire CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the input diagram, where and how the
//! parsed graph is written, the configuration file and logging verbosity.

use clap::Parser;

use boxwire::config::OutputFormat;

/// Command-line arguments for the boxwire diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file; the graph is printed to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (text, json); overrides the configuration file
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
