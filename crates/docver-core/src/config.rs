use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::picker::DEFAULT_ELEMENT_ID;
use crate::rewrite::DEFAULT_DOCS_ROOT;

/// Global configuration loaded from `~/.config/docver/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocverConfig {
    /// Literal path component that precedes the versioned part of doc URLs.
    pub docs_root: String,
    /// Id of the `<select>` element the picker is bound to.
    pub picker_element_id: String,
    /// Versions offered in the dropdown, in display order.
    pub versions: Vec<String>,
}

impl Default for DocverConfig {
    fn default() -> Self {
        Self {
            docs_root: DEFAULT_DOCS_ROOT.to_string(),
            picker_element_id: DEFAULT_ELEMENT_ID.to_string(),
            versions: Vec::new(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("docver")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DocverConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DocverConfig::default();
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

/// Load configuration from an explicit file. The file must exist.
pub fn load_from(path: &Path) -> Result<DocverConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: DocverConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
