use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::locator::CONTENT_SCHEME;
use crate::materialize::DEFAULT_PREFIX;

fn default_file_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_indirect_schemes() -> Vec<String> {
    vec![CONTENT_SCHEME.to_string()]
}

/// Global configuration loaded from `~/.config/sharein/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Directory for materialized files (None = `$XDG_CACHE_HOME/sharein/shared`).
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
    /// Prefix of materialized file names.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    /// Schemes whose locators are copied into the temp directory.
    #[serde(default = "default_indirect_schemes")]
    pub indirect_schemes: Vec<String>,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            temp_dir: None,
            file_prefix: default_file_prefix(),
            indirect_schemes: default_indirect_schemes(),
        }
    }
}

impl ShareConfig {
    /// Configured temp dir, or the per-user cache location.
    pub fn temp_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.temp_dir {
            return Ok(dir.clone());
        }
        let xdg_dirs = xdg::BaseDirectories::with_prefix("sharein")?;
        Ok(xdg_dirs.get_cache_home().join("sharein").join("shared"))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sharein")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ShareConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ShareConfig> {
    if !path.exists() {
        let default_cfg = ShareConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("failed to write default config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: ShareConfig =
        toml::from_str(&data).with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ShareConfig::default();
        assert!(cfg.temp_dir.is_none());
        assert_eq!(cfg.file_prefix, "shared_file_");
        assert_eq!(cfg.indirect_schemes, vec!["content".to_string()]);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ShareConfig {
            temp_dir: Some(PathBuf::from("/var/tmp/share")),
            ..ShareConfig::default()
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ShareConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let cfg: ShareConfig = toml::from_str(r#"temp_dir = "/data/cache""#).unwrap();
        assert_eq!(cfg.temp_dir.as_deref(), Some(Path::new("/data/cache")));
        assert_eq!(cfg.file_prefix, "shared_file_");
        assert_eq!(cfg.indirect_schemes, vec!["content".to_string()]);
        assert_eq!(cfg.temp_dir().unwrap(), PathBuf::from("/data/cache"));
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            file_prefix = "inbox_"
            indirect_schemes = ["content", "blob"]
        "#;
        let cfg: ShareConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.file_prefix, "inbox_");
        assert_eq!(cfg.indirect_schemes.len(), 2);
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created, ShareConfig::default());

        fs::write(&path, "file_prefix = \"x_\"\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.file_prefix, "x_");
    }

    #[test]
    fn load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "indirect_schemes = 3").unwrap();
        assert!(load_or_init_at(&path).is_err());
    }
}
