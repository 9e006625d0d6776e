//! Pseudo-URLs: URL patterns with embedded regular expressions.
//!
//! A pseudo-URL (PURL) is an ordinary URL in which `[...]` sections hold
//! regex syntax. Everything outside the brackets is matched literally. For
//! example `http://www.example.com/pages/[(\w|-)*]` matches
//! `http://www.example.com/pages/` and
//! `http://www.example.com/pages/my-awesome-page`.
//!
//! A literal `[` or `]` in the URL is written as a section containing its hex
//! escape: `http://www.example.com/search?do[\x5B]load[\x5D]=1` matches
//! `http://www.example.com/search?do[load]=1`.

mod compile;
mod error;
mod matcher;
mod template;

pub use compile::compile_purl;
pub use error::PurlError;
pub use matcher::{PseudoUrl, DEFAULT_REGEX_SIZE_LIMIT};
pub use template::RequestTemplate;
