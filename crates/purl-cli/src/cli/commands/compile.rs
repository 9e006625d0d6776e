//! `purl compile <purl>` – print the compiled regex source.

use anyhow::Result;
use purl_core::compile_purl;
use std::io::Write;

pub fn run_compile(purl: &str, out: &mut impl Write) -> Result<()> {
    let regex = compile_purl(purl)?;
    writeln!(out, "{regex}")?;
    Ok(())
}
