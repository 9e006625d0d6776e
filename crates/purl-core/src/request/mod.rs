//! Request descriptors created for URLs that match a pseudo-URL.
//!
//! The matcher treats this module as a black box: it hands over a field map
//! and gets back either a validated [`Request`] or a [`RequestError`].

mod error;
mod method;
mod unique_key;

pub use error::RequestError;
pub use method::Method;
pub use unique_key::compute_unique_key;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use url::Url;

/// A crawl request: the URL to fetch plus the caller's per-request data.
///
/// Field names serialize in camelCase (`uniqueKey`, `userData`, ...), the same
/// keys a request template uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Request {
    pub url: String,
    /// Deduplication key; derived from `url` when not supplied.
    #[serde(default)]
    pub unique_key: String,
    #[serde(default)]
    pub method: Method,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Arbitrary caller data carried along with the request.
    #[serde(default)]
    pub user_data: Map<String, Value>,
    #[serde(default)]
    pub keep_url_fragment: bool,
    #[serde(default)]
    pub retry_count: u32,
    #[serde(default)]
    pub no_retry: bool,
    #[serde(default)]
    pub error_messages: Vec<String>,
}

impl Request {
    /// Plain GET request for `url`.
    pub fn new(url: &str) -> Result<Self, RequestError> {
        let mut fields = Map::new();
        fields.insert("url".to_string(), Value::String(url.to_string()));
        Self::from_fields(fields)
    }

    /// Builds and validates a request from a field map.
    pub fn from_fields(fields: Map<String, Value>) -> Result<Self, RequestError> {
        let mut request: Request =
            serde_json::from_value(Value::Object(fields)).map_err(RequestError::InvalidFields)?;

        let parsed = Url::parse(&request.url).map_err(|source| RequestError::InvalidUrl {
            url: request.url.clone(),
            source,
        })?;

        if request.payload.is_some() && !request.method.allows_payload() {
            return Err(RequestError::PayloadNotAllowed {
                method: request.method,
            });
        }

        if request.unique_key.is_empty() {
            request.unique_key = compute_unique_key(&parsed, request.keep_url_fragment);
        }

        Ok(request)
    }
}

impl TryFrom<Map<String, Value>> for Request {
    type Error = RequestError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Request::from_fields(fields)
    }
}
