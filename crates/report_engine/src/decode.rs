use report_core::Summary;

use crate::LoadError;

/// Decode a summary document.
///
/// Anything that is not JSON, or JSON that lacks a required field or carries
/// a field of the wrong type, is a parse error.
pub fn decode_summary(bytes: &[u8]) -> Result<Summary, LoadError> {
    serde_json::from_slice(bytes).map_err(|err| LoadError::parse(err.to_string()))
}
