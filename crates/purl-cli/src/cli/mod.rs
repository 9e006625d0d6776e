//! CLI for compiling and matching pseudo-URLs.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use purl_core::config;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use commands::{run_check, run_compile, run_filter, run_request};

/// Top-level CLI for pseudo-URL tooling.
#[derive(Debug, Parser)]
#[command(name = "purl")]
#[command(about = "Compile pseudo-URLs to regexes and match URLs against them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the regex a pseudo-URL compiles to.
    Compile {
        /// Pseudo-URL, e.g. 'http://example.com/pages/[.*]'.
        purl: String,
    },

    /// Test one or more URLs against a pseudo-URL.
    Check {
        /// Pseudo-URL to test against.
        purl: String,
        /// Candidate URLs.
        #[arg(required = true)]
        urls: Vec<String>,
        /// Fail unless every URL matches.
        #[arg(long)]
        all: bool,
    },

    /// Print the request created for a matching URL, as JSON.
    Request {
        /// Pseudo-URL the URL must match.
        purl: String,
        /// Candidate URL.
        url: String,
        /// Request template as a JSON object, e.g. '{"method":"POST"}'.
        #[arg(long, value_name = "JSON")]
        template: Option<String>,
    },

    /// Read URLs (one per line) and print a request for each matching one.
    Filter {
        /// Pseudo-URL to match; repeatable. Defaults to the configured patterns.
        #[arg(long = "purl", value_name = "PURL")]
        purls: Vec<String>,
        /// Read URLs from this file instead of stdin.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match cli.command {
            CliCommand::Compile { purl } => run_compile(&purl, &mut out)?,
            CliCommand::Check { purl, urls, all } => run_check(&cfg, &purl, &urls, all, &mut out)?,
            CliCommand::Request {
                purl,
                url,
                template,
            } => run_request(&cfg, &purl, &url, template.as_deref(), &mut out)?,
            CliCommand::Filter { purls, input } => {
                let matched = match input {
                    Some(path) => {
                        let file = File::open(&path)
                            .with_context(|| format!("open {}", path.display()))?;
                        run_filter(&cfg, &purls, BufReader::new(file), &mut out)?
                    }
                    None => run_filter(&cfg, &purls, io::stdin().lock(), &mut out)?,
                };
                tracing::info!("filter matched {} URLs", matched);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
