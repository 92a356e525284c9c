use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::canonical::{FragmentPolicy, TrackingPolicy};
use crate::store::ItemSource;

/// Canonicalization tuning (optional `[canonical]` section in config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanonicalConfig {
    /// Whether `#fragment` takes part in the dedup key: "keep" (default) or "strip".
    pub fragment: FragmentPolicy,
    /// Extra query keys removed on exact match, on top of the built-in list.
    pub extra_params: Vec<String>,
    /// Extra query key prefixes removed, on top of `utm_`, `mc_`, `vero_`, `ref_`.
    pub extra_prefixes: Vec<String>,
}

impl CanonicalConfig {
    /// Builds the tracking policy described by this section.
    pub fn policy(&self) -> TrackingPolicy {
        TrackingPolicy::default()
            .with_extra_params(&self.extra_params)
            .with_extra_prefixes(&self.extra_prefixes)
            .with_fragment(self.fragment)
    }
}

/// Global configuration loaded from `~/.config/readlist/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadlistConfig {
    /// Item database location (None = `~/.local/state/readlist/items.db`).
    #[serde(default)]
    pub database_path: Option<PathBuf>,
    /// Source recorded for saves that don't name one.
    #[serde(default)]
    pub default_source: ItemSource,
    #[serde(default)]
    pub canonical: CanonicalConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("readlist")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ReadlistConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ReadlistConfig::default();
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

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<ReadlistConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ReadlistConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
