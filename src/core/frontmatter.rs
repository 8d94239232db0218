//! Front matter codec
//!
//! Splits markdown into a metadata mapping and a body string, and performs
//! the inverse merge. The delimiter grammar is line-based: an opening `---`
//! on the first line, YAML until the next line that is exactly `---` once
//! trimmed, then the body. A missing opening delimiter and an unterminated
//! one share a single fallback: the whole input is body, metadata is empty,
//! and no error is raised.

use crate::core::document::{Document, Metadata};
use crate::error::{MatterCastError, Result};
use log::debug;

/// Decode markdown into metadata and body.
///
/// Only malformed YAML between valid delimiters fails; every other shape of
/// input degrades gracefully to a body-only document. The body is trimmed of
/// surrounding whitespace, internal whitespace is preserved.
pub fn decode(content: &str) -> Result<Document> {
    // Split on `\n` rather than `str::lines` so CRLF input flows through the
    // same trimmed delimiter comparisons.
    let lines: Vec<&str> = content.split('\n').collect();

    let closing = match lines.first() {
        Some(first) if first.trim() == "---" => lines
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, line)| line.trim() == "---")
            .map(|(i, _)| i),
        _ => None,
    };

    // Missing opener and unterminated opener take the same path: the whole
    // input, trimmed, is the body.
    let Some(closing) = closing else {
        return Ok(Document::body_only(content.trim()));
    };

    let yaml_source = lines[1..closing].join("\n");
    let metadata = if yaml_source.trim().is_empty() {
        Metadata::new()
    } else {
        serde_yaml::from_str(&yaml_source).map_err(MatterCastError::FrontmatterDecode)?
    };
    debug!("decoded front matter with {} field(s)", metadata.len());

    let body = lines[closing + 1..].join("\n").trim().to_string();
    Ok(Document::new(metadata, body))
}

/// Encode metadata and body back into markdown.
///
/// Empty metadata emits the body alone with no delimiter block. The body is
/// appended verbatim; trimming happened at extraction time.
pub fn encode(document: &Document) -> Result<String> {
    if !document.has_metadata() {
        return Ok(document.body.clone());
    }

    let yaml =
        serde_yaml::to_string(&document.metadata).map_err(MatterCastError::FrontmatterEncode)?;
    // Some emitters prepend a document marker of their own; the block must
    // contain exactly one opening delimiter.
    let yaml = yaml.strip_prefix("---\n").unwrap_or(&yaml);

    let mut out = String::with_capacity(yaml.len() + document.body.len() + 10);
    out.push_str("---\n");
    out.push_str(yaml);
    if !yaml.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("---\n\n");
    out.push_str(&document.body);
    Ok(out)
}
