pub mod config;
pub mod logging;

pub mod pseudo_url;
pub mod request;

pub use pseudo_url::{compile_purl, PseudoUrl, PurlError, RequestTemplate};
pub use request::{Method, Request, RequestError};
