//! Configuration loaded from `~/.config/purl/config.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::pseudo_url::{PseudoUrl, PurlError, RequestTemplate, DEFAULT_REGEX_SIZE_LIMIT};

/// A named pseudo-URL with the request template used for its matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternEntry {
    /// Optional label shown in CLI output; defaults to the PURL itself.
    #[serde(default)]
    pub name: Option<String>,
    pub purl: String,
    /// Request fields (`method`, `headers`, `userData`, ...). Must be a table.
    #[serde(default)]
    pub template: Option<serde_json::Value>,
}

impl PatternEntry {
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.purl)
    }

    pub fn build(&self, size_limit: usize) -> Result<PseudoUrl, PurlError> {
        let template = match &self.template {
            Some(value) => RequestTemplate::from_value(value.clone())?,
            None => RequestTemplate::new(),
        };
        PseudoUrl::with_size_limit(&self.purl, template, size_limit)
    }
}

/// Global configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurlConfig {
    /// Upper bound on a compiled pattern's size in bytes.
    #[serde(default = "default_regex_size_limit")]
    pub regex_size_limit: usize,
    /// Patterns used by `purl filter` when none are given on the command line.
    #[serde(default)]
    pub patterns: Vec<PatternEntry>,
}

fn default_regex_size_limit() -> usize {
    DEFAULT_REGEX_SIZE_LIMIT
}

impl Default for PurlConfig {
    fn default() -> Self {
        Self {
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
            patterns: Vec::new(),
        }
    }
}

impl PurlConfig {
    /// Compiles every configured pattern, in file order. The first failure
    /// aborts with the entry's label in the error context.
    pub fn build_patterns(&self) -> Result<Vec<(String, PseudoUrl)>> {
        self.patterns
            .iter()
            .map(|entry| {
                let purl = entry
                    .build(self.regex_size_limit)
                    .with_context(|| format!("configured pattern '{}'", entry.label()))?;
                Ok((entry.label().to_string(), purl))
            })
            .collect()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("purl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PurlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PurlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<PurlConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: PurlConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
