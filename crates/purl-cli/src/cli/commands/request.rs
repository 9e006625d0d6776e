//! `purl request <purl> <url>` – print the request for a matching URL.

use anyhow::{bail, Context, Result};
use purl_core::config::PurlConfig;
use purl_core::{PseudoUrl, RequestTemplate};
use std::io::Write;

pub fn run_request(
    cfg: &PurlConfig,
    purl: &str,
    url: &str,
    template: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let template = match template {
        Some(raw) => {
            let value: serde_json::Value =
                serde_json::from_str(raw).context("parse --template JSON")?;
            RequestTemplate::from_value(value)?
        }
        None => RequestTemplate::new(),
    };
    let pattern = PseudoUrl::with_size_limit(purl, template, cfg.regex_size_limit)?;
    if !pattern.matches(url) {
        bail!("URL '{}' does not match '{}'", url, purl);
    }
    let request = pattern.create_request(url)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&request)?)?;
    Ok(())
}
