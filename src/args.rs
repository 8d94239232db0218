//! Command-line argument definitions
//!
//! clap derive surface for the `mattercast` binary. Global logging flags can
//! also come from the environment (`LOG_LEVEL`, `LOG_FILE`).

use crate::core::convert::DEFAULT_BODY_KEY;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser)]
#[command(
    name = "mattercast",
    version,
    about = "A markdown to JSON and JSON to markdown converter",
    long_about = "mattercast converts markdown documents with YAML front matter into flat \
                  JSON objects and back. The direction is auto-detected from the input, \
                  which makes it convenient to use from scripts and pipelines."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Append log output to this file instead of stderr
    #[arg(long, global = true, env = "LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Convert between markdown with front matter and JSON
    Parse(ParseArgs),
}

/// Arguments for the parse command
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// JSON property name that holds the markdown body
    #[arg(short, long, value_name = "KEY", default_value = DEFAULT_BODY_KEY)]
    pub body_key: String,

    /// Indent JSON output with two spaces
    #[arg(short, long)]
    pub pretty: bool,

    /// File path or literal content; stdin is read when omitted
    pub input: Option<String>,
}
