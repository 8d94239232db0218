//! Input format detection
//!
//! Classification is total: every input is either a JSON object or markdown,
//! never an error. JSON arrays, scalars, strings, booleans, and null are all
//! deliberately treated as markdown so that only flat objects take the
//! JSON-to-markdown path.

use crate::core::document::Metadata;

/// Check whether the input is a JSON object.
///
/// Returns `false` for anything else, including valid JSON that is not an
/// object and `{`-prefixed text that fails to decode. Pure function of the
/// input; identical input always yields the identical classification.
pub fn is_json_object(input: &str) -> bool {
    let trimmed = input.trim();

    // First non-whitespace character must open an object; this also rejects
    // empty input.
    if !trimmed.starts_with('{') {
        return false;
    }

    // A full decode confirms the classification; a truncated or otherwise
    // invalid blob falls through to the markdown path.
    serde_json::from_str::<Metadata>(trimmed).is_ok()
}
