//! Errors raised while building a pseudo-URL matcher.

use thiserror::Error;

/// Construction failure for a [`PseudoUrl`](super::PseudoUrl).
///
/// Request-level failures are not represented here; they surface from
/// [`create_request`](super::PseudoUrl::create_request) as
/// [`RequestError`](crate::request::RequestError).
#[derive(Debug, Error)]
pub enum PurlError {
    /// Dynamic input had the wrong shape (e.g. a number where a PURL string
    /// was expected). Raised before any compilation work.
    #[error("invalid argument `{name}`: expected {expected}")]
    InvalidArgument {
        name: &'static str,
        expected: &'static str,
    },

    /// The request template was not a mapping of field names to values.
    #[error("invalid request template: expected an object, found {found}")]
    InvalidTemplate { found: &'static str },

    /// Pattern was empty after trimming, or the regex engine rejected the
    /// compiled source. `purl` is always the caller's untrimmed input.
    #[error("cannot parse PURL '{purl}': {reason}")]
    MalformedPattern { purl: String, reason: String },
}

impl PurlError {
    pub(crate) fn malformed(purl: &str, reason: impl ToString) -> Self {
        PurlError::MalformedPattern {
            purl: purl.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Short name of a JSON value's kind, for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
