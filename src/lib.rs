//! mattercast: bidirectional conversion between markdown with YAML front
//! matter and flat JSON documents
//!
//! A markdown document with an optional front matter block becomes a flat
//! JSON object: every metadata field is a top-level key and the body is
//! stored under one configurable "body key". The reverse direction peels the
//! body key off and re-emits the front matter block. The direction is
//! auto-detected, which makes the tool pipeline-friendly.
//!
//! # Quick Start
//!
//! ## Converting in a known direction
//!
//! ```
//! use mattercast::{json_to_markdown, markdown_to_json, Result};
//!
//! fn main() -> Result<()> {
//!     let json = markdown_to_json("---\ntitle: Hello\n---\nSome body.", "$body", false)?;
//!     assert_eq!(json, r#"{"$body":"Some body.","title":"Hello"}"#);
//!
//!     let markdown = json_to_markdown(&json, "$body")?;
//!     assert!(markdown.starts_with("---\n"));
//!     Ok(())
//! }
//! ```
//!
//! ## Auto-detecting the direction
//!
//! ```
//! use mattercast::{convert, ConvertOptions};
//!
//! let options = ConvertOptions::default();
//! let json = convert("# Title\n\nBody.", &options).unwrap();
//! assert_eq!(json, r##"{"$body":"# Title\n\nBody."}"##);
//! ```
//!
//! ## Working with the codec directly
//!
//! ```
//! use mattercast::frontmatter;
//!
//! let doc = frontmatter::decode("---\ndraft: true\n---\nText").unwrap();
//! assert_eq!(doc.metadata["draft"], serde_json::json!(true));
//! assert_eq!(doc.body, "Text");
//! ```
//!
//! # Architecture
//!
//! - [`detect`](crate::core::detect): total classification of input as JSON
//!   object or markdown
//! - [`frontmatter`](crate::core::frontmatter): the front matter codec
//!   (decode/encode)
//! - [`convert`](mod@crate::core::convert): the two conversion directions
//!   and the auto-detect dispatch
//! - [`io`](crate::io): CLI-side input acquisition (file, literal, stdin)
//! - [`error`](crate::error): library error type
//!
//! The core is pure: no I/O, no shared state, every call completes or fails
//! atomically.

// Public API exports
pub use crate::error::{MatterCastError, Result};

// Core types and operations
pub use crate::core::{
    is_json_object, json_to_markdown, markdown_to_json, ConvertOptions, Document, Metadata,
    DEFAULT_BODY_KEY,
};
pub use crate::core::convert::convert;

// Module shortcut for codec-level access
pub use crate::core::frontmatter;

// Internal modules
pub mod args;
pub mod core;
pub mod error;
pub mod io;
