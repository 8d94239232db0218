//! Reading conversion input from a file, a literal argument, or stdin

use anyhow::{bail, Context, Result};
use log::debug;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Resolve the conversion input.
///
/// A positional argument that looks like a filesystem path is read from disk
/// (a path-looking argument that does not exist is an error); any other
/// argument is taken as literal content. Without an argument, stdin is read
/// to EOF, and empty stdin is an error.
pub fn read_input(arg: Option<&str>) -> Result<String> {
    if let Some(arg) = arg {
        if is_likely_path(arg) {
            let path = Path::new(arg);
            if !path.exists() {
                bail!("file not found: {arg}");
            }
            debug!("reading input from file {arg}");
            return fs::read_to_string(path)
                .with_context(|| format!("failed to read file {arg}"));
        }

        debug!("treating argument as literal content");
        return Ok(arg.to_string());
    }

    debug!("reading input from stdin");
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;

    if buf.is_empty() {
        bail!("no input provided");
    }
    Ok(buf)
}

/// Heuristic for whether an argument names a file rather than carrying
/// literal content.
///
/// JSON input always starts with `{`, so that prefix is vetoed outright;
/// otherwise path-shaped prefixes, an embedded separator, or a known
/// markdown/text extension mark the argument as a path.
pub fn is_likely_path(s: &str) -> bool {
    if s.is_empty() || s.starts_with('{') {
        return false;
    }

    if s.starts_with('/')
        || s.starts_with('~')
        || s.starts_with("./")
        || s.starts_with("../")
        || s.contains(std::path::MAIN_SEPARATOR)
        || Path::new(s).is_absolute()
    {
        return true;
    }

    matches!(
        Path::new(s).extension().and_then(|ext| ext.to_str()),
        Some("md" | "markdown" | "txt")
    )
}
