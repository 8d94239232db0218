//! Error types for the mattercast library
//!
//! Every failure a conversion can hit is a variant of [`MatterCastError`].
//! Detection never fails, and markdown without (or with an unterminated)
//! front matter block is not an error; the variants here cover malformed
//! YAML/JSON input, the two body-key contract violations, and the
//! re-encoding failures that are only reachable with pathological values.

use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum MatterCastError {
    /// Malformed YAML between valid front matter delimiters
    #[error("failed to parse YAML frontmatter: {0}")]
    FrontmatterDecode(#[source] serde_yaml::Error),

    /// Malformed JSON input on the JSON-to-markdown path
    #[error("failed to parse JSON input: {0}")]
    JsonDecode(#[source] serde_json::Error),

    /// The configured body key is absent from the JSON object
    #[error("body key {key:?} not found in JSON")]
    MissingBodyKey { key: String },

    /// The body key is present but its value is not a string
    #[error("body value for key {key:?} is not a string")]
    BodyNotString { key: String },

    /// Metadata could not be re-encoded as YAML
    #[error("failed to encode frontmatter as YAML: {0}")]
    FrontmatterEncode(#[source] serde_yaml::Error),

    /// The output mapping could not be serialized as JSON
    #[error("failed to encode output as JSON: {0}")]
    JsonEncode(#[source] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MatterCastError>;

impl MatterCastError {
    /// Create a new missing body key error
    pub fn missing_body_key(key: impl Into<String>) -> Self {
        Self::MissingBodyKey { key: key.into() }
    }

    /// Create a new body-not-string error
    pub fn body_not_string(key: impl Into<String>) -> Self {
        Self::BodyNotString { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_key() {
        let err = MatterCastError::missing_body_key("$body");
        assert!(matches!(err, MatterCastError::MissingBodyKey { .. }));
        assert_eq!(err.to_string(), "body key \"$body\" not found in JSON");

        let err = MatterCastError::body_not_string("content");
        assert_eq!(
            err.to_string(),
            "body value for key \"content\" is not a string"
        );
    }

    #[test]
    fn test_decode_errors_carry_context() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [unclosed").unwrap_err();
        let err = MatterCastError::FrontmatterDecode(yaml_err);
        assert!(err.to_string().starts_with("failed to parse YAML frontmatter"));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = MatterCastError::JsonDecode(json_err);
        assert!(err.to_string().starts_with("failed to parse JSON input"));
    }
}
