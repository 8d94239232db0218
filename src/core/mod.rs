//! Core conversion logic: format detection, the front matter codec, and the
//! structural converter that composes them.

pub mod convert;
pub mod detect;
pub mod document;
pub mod frontmatter;

pub use convert::{convert, json_to_markdown, markdown_to_json, ConvertOptions, DEFAULT_BODY_KEY};
pub use detect::is_json_object;
pub use document::{Document, Metadata};
