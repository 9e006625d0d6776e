//! `purl filter` – stream URLs through a set of pseudo-URLs.
//!
//! Each matching URL produces one JSON line `{"pattern": ..., "request": ...}`.
//! A URL is claimed by the first pattern (in order) that matches it.

use anyhow::{bail, Context, Result};
use purl_core::config::PurlConfig;
use purl_core::{PseudoUrl, Request, RequestTemplate};
use serde::Serialize;
use std::io::{BufRead, Write};

#[derive(Serialize)]
struct FilterHit<'a> {
    pattern: &'a str,
    request: &'a Request,
}

/// Returns the number of URLs that matched.
pub fn run_filter(
    cfg: &PurlConfig,
    purls: &[String],
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<usize> {
    let patterns = if purls.is_empty() {
        cfg.build_patterns()?
    } else {
        purls
            .iter()
            .map(|purl| {
                let pattern =
                    PseudoUrl::with_size_limit(purl, RequestTemplate::new(), cfg.regex_size_limit)?;
                Ok((purl.clone(), pattern))
            })
            .collect::<Result<Vec<_>>>()?
    };
    if patterns.is_empty() {
        bail!("no patterns: pass --purl or add [[patterns]] to config.toml");
    }

    let mut matched = 0usize;
    for line in input.lines() {
        let line = line.context("read URL list")?;
        let url = line.trim();
        if url.is_empty() {
            continue;
        }
        let Some((label, pattern)) = patterns.iter().find(|(_, p)| p.matches(url)) else {
            continue;
        };
        let request = pattern
            .create_request(url)
            .with_context(|| format!("create request for {url}"))?;
        let hit = FilterHit {
            pattern: label,
            request: &request,
        };
        writeln!(out, "{}", serde_json::to_string(&hit)?)?;
        matched += 1;
    }
    Ok(matched)
}
