//! Core document model
//!
//! A parsed document is a flat metadata mapping plus an opaque markdown body.
//! Both conversion directions construct a fresh [`Document`] per call; there
//! is no shared state between calls.

use serde_json::Value;

/// Decoded front matter: string keys mapped to arbitrary scalar, sequence,
/// or nested-mapping values.
///
/// `serde_json::Value` serves as the value model for both the YAML and the
/// JSON side; serde_yaml deserializes front matter directly into it.
pub type Metadata = serde_json::Map<String, Value>;

/// A markdown document split into metadata and body
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Front matter fields, empty when the document has none
    pub metadata: Metadata,
    /// Markdown content, trimmed at the extraction boundary
    pub body: String,
}

impl Document {
    /// Create a document from metadata and body
    pub fn new(metadata: Metadata, body: String) -> Self {
        Self { metadata, body }
    }

    /// Create a document with only body content (no front matter)
    pub fn body_only(body: impl Into<String>) -> Self {
        Self::new(Metadata::new(), body.into())
    }

    /// Check whether the document carries any front matter fields
    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }
}
