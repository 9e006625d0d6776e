//! Request validation errors.

use thiserror::Error;

use super::Method;

#[derive(Debug, Error)]
pub enum RequestError {
    /// Field map did not deserialize: unknown key, wrong value type, or
    /// missing `url`.
    #[error("invalid request fields: {0}")]
    InvalidFields(#[source] serde_json::Error),

    /// `url` is not an absolute URL.
    #[error("invalid request url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{method} requests cannot carry a payload")]
    PayloadNotAllowed { method: Method },
}
