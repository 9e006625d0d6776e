//! `purl check <purl> <url>...` – report which URLs match.

use anyhow::{bail, Result};
use purl_core::config::PurlConfig;
use purl_core::{PseudoUrl, RequestTemplate};
use std::io::Write;

pub fn run_check(
    cfg: &PurlConfig,
    purl: &str,
    urls: &[String],
    require_all: bool,
    out: &mut impl Write,
) -> Result<()> {
    let pattern = PseudoUrl::with_size_limit(purl, RequestTemplate::new(), cfg.regex_size_limit)?;
    let mut misses = 0usize;
    for url in urls {
        let matched = pattern.matches(url);
        if !matched {
            misses += 1;
        }
        let verdict = if matched { "match" } else { "no-match" };
        writeln!(out, "{verdict}\t{url}")?;
    }
    if require_all && misses > 0 {
        bail!("{} of {} URLs did not match '{}'", misses, urls.len(), purl);
    }
    Ok(())
}
