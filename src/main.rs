use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::fs;
use std::io::Write;
use std::path::Path;

use mattercast::args::{Cli, Commands};
use mattercast::core::convert::{convert, ConvertOptions};
use mattercast::io::read_input;

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logger(&cli.log_level, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Parse(args) => {
            let source = read_input(args.input.as_deref())?;
            let options = ConvertOptions {
                body_key: args.body_key,
                pretty: args.pretty,
            };

            let mut output = convert(&source, &options)?;
            if !output.ends_with('\n') {
                output.push('\n');
            }

            std::io::stdout()
                .lock()
                .write_all(output.as_bytes())
                .context("failed to write output")?;
            Ok(())
        }
    }
}

fn setup_logger(level: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = level
        .parse::<log::LevelFilter>()
        .map_err(|_| anyhow!("failed to parse log level: {level}"))?;

    let mut builder = env_logger::Builder::new();
    builder.filter_level(filter);
    // RUST_LOG may still refine per-module filters.
    builder.parse_default_env();

    if let Some(path) = log_file {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        }
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
