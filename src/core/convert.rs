//! Structural conversion between markdown and JSON
//!
//! Markdown becomes a flat JSON object whose keys are the front matter
//! fields plus one configurable body key; the inverse direction peels the
//! body key off and re-emits a front matter block. [`convert`] is the single
//! dispatch point, driven by format detection.

use crate::core::detect::is_json_object;
use crate::core::document::{Document, Metadata};
use crate::core::frontmatter;
use crate::error::{MatterCastError, Result};
use log::debug;
use serde_json::Value;

/// Default JSON property name for the markdown body
pub const DEFAULT_BODY_KEY: &str = "$body";

/// Options for the auto-detecting conversion entry point
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// JSON property name that holds the markdown body
    pub body_key: String,
    /// Indent JSON output with two spaces
    pub pretty: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            body_key: DEFAULT_BODY_KEY.to_string(),
            pretty: false,
        }
    }
}

/// Convert markdown with optional front matter into a flat JSON object.
pub fn markdown_to_json(markdown: &str, body_key: &str, pretty: bool) -> Result<String> {
    let Document { metadata, body } = frontmatter::decode(markdown)?;

    // The body assignment is the last write: a front matter field named like
    // the body key is overwritten, not merged.
    let mut output = metadata;
    output.insert(body_key.to_string(), Value::String(body));

    if pretty {
        serde_json::to_string_pretty(&output).map_err(MatterCastError::JsonEncode)
    } else {
        serde_json::to_string(&output).map_err(MatterCastError::JsonEncode)
    }
}

/// Convert a flat JSON object back into markdown with front matter.
///
/// The body key must be present and hold a string; the remaining fields
/// become the front matter block.
pub fn json_to_markdown(json: &str, body_key: &str) -> Result<String> {
    let mut data: Metadata = serde_json::from_str(json).map_err(MatterCastError::JsonDecode)?;

    let body = match data.remove(body_key) {
        Some(Value::String(body)) => body,
        Some(_) => return Err(MatterCastError::body_not_string(body_key)),
        None => return Err(MatterCastError::missing_body_key(body_key)),
    };

    frontmatter::encode(&Document::new(data, body))
}

/// Convert in whichever direction the input calls for.
///
/// The dispatch is total: every input is classified as either a JSON object
/// or markdown and takes exactly one of the two paths.
pub fn convert(input: &str, options: &ConvertOptions) -> Result<String> {
    if is_json_object(input) {
        debug!("input classified as JSON object, converting to markdown");
        json_to_markdown(input, &options.body_key)
    } else {
        debug!("input classified as markdown, converting to JSON");
        markdown_to_json(input, &options.body_key, options.pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_markdown_to_json_body_only() {
        let json = markdown_to_json("# Hello World\n\nThis is content.", "$body", false).unwrap();
        assert_eq!(json, r##"{"$body":"# Hello World\n\nThis is content."}"##);
    }

    #[test]
    fn test_markdown_to_json_with_front_matter() {
        let markdown = "---\ntitle: Test\ncount: 42\n---\nBody text";
        let out = markdown_to_json(markdown, "$body", false).unwrap();

        let parsed: Metadata = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["title"], json!("Test"));
        assert_eq!(parsed["count"], json!(42));
        assert_eq!(parsed["$body"], json!("Body text"));
    }

    #[test]
    fn test_markdown_to_json_pretty() {
        let out = markdown_to_json("---\ntitle: Test\n---\nBody", "$body", true).unwrap();
        assert!(out.starts_with("{\n  \""));
        assert!(out.contains("\"title\": \"Test\""));
        assert!(out.contains("\"$body\": \"Body\""));
    }

    #[test]
    fn test_markdown_to_json_body_key_collision_overwrites() {
        let markdown = "---\n$body: from front matter\ntitle: Test\n---\nactual body";
        let out = markdown_to_json(markdown, "$body", false).unwrap();

        let parsed: Metadata = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["$body"], json!("actual body"));
        assert_eq!(parsed["title"], json!("Test"));
    }

    #[test]
    fn test_markdown_to_json_propagates_decode_failure() {
        let err = markdown_to_json("---\ntitle: [bad\n---\nbody", "$body", false).unwrap_err();
        assert!(matches!(err, MatterCastError::FrontmatterDecode(_)));
    }

    #[test]
    fn test_json_to_markdown_with_metadata() {
        let json = r##"{"title":"Test Post","author":"John Doe","$body":"# Hello World\n\nContent here."}"##;
        let out = json_to_markdown(json, "$body").unwrap();

        assert!(out.starts_with("---\n"));
        assert!(out.contains("author: John Doe\n"));
        assert!(out.contains("title: Test Post\n"));
        assert!(out.ends_with("---\n\n# Hello World\n\nContent here."));
    }

    #[test]
    fn test_json_to_markdown_body_only() {
        let out = json_to_markdown(r#"{"$body":"just the body"}"#, "$body").unwrap();
        assert_eq!(out, "just the body");
    }

    #[test]
    fn test_json_to_markdown_missing_body_key() {
        let err = json_to_markdown(r#"{"title":"Test"}"#, "$body").unwrap_err();
        assert!(matches!(err, MatterCastError::MissingBodyKey { .. }));
        assert!(err.to_string().contains("$body"));
    }

    #[test]
    fn test_json_to_markdown_non_string_body() {
        let err = json_to_markdown(r#"{"$body":123}"#, "$body").unwrap_err();
        assert!(matches!(err, MatterCastError::BodyNotString { .. }));
    }

    #[test]
    fn test_json_to_markdown_invalid_json() {
        let err = json_to_markdown(r#"{"title":"#, "$body").unwrap_err();
        assert!(matches!(err, MatterCastError::JsonDecode(_)));
    }

    #[test]
    fn test_round_trip_markdown_json_markdown() {
        let markdown = "---\nauthor: John Doe\ntags:\n- a\n- b\ntitle: Test\n---\n\n# Heading\n\nParagraph.";
        let json = markdown_to_json(markdown, "$body", false).unwrap();
        let back = json_to_markdown(&json, "$body").unwrap();

        let original = frontmatter::decode(markdown).unwrap();
        let round_tripped = frontmatter::decode(&back).unwrap();
        assert_eq!(round_tripped, original);
    }

    #[test]
    fn test_round_trip_json_markdown_json() {
        let json = r##"{"$body":"# Hi","draft":false,"rating":4.5,"title":"Test"}"##;
        let markdown = json_to_markdown(json, "$body").unwrap();
        let back = markdown_to_json(&markdown, "$body", false).unwrap();

        let original: Metadata = serde_json::from_str(json).unwrap();
        let round_tripped: Metadata = serde_json::from_str(&back).unwrap();
        assert_eq!(round_tripped, original);
    }

    #[test]
    fn test_convert_dispatches_on_format() {
        let options = ConvertOptions::default();

        let out = convert(r##"{"$body":"# Hi"}"##, &options).unwrap();
        assert_eq!(out, "# Hi");

        let out = convert("# Hi", &options).unwrap();
        assert_eq!(out, r##"{"$body":"# Hi"}"##);
    }

    #[test]
    fn test_convert_treats_invalid_json_as_markdown() {
        let options = ConvertOptions::default();
        let out = convert(r#"{"title":"Test"#, &options).unwrap();

        let parsed: Metadata = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["$body"], json!(r#"{"title":"Test"#));
    }

    #[test]
    fn test_convert_custom_body_key() {
        let options = ConvertOptions {
            body_key: "content".to_string(),
            pretty: false,
        };
        let out = convert("# Hi", &options).unwrap();
        assert_eq!(out, r##"{"content":"# Hi"}"##);
    }
}
