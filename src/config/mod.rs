pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PatchError, Result};

/// File picked up from the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "fotogalerie.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchConfig {
    #[serde(default)]
    pub blog: BlogSection,
    #[serde(default)]
    pub zapasy: ZapasySection,
}

/// Numbered blog pages, `0014.html` through `0030.html` by default.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogSection {
    #[serde(default = "defaults::blog_dir")]
    pub dir: String,
    #[serde(default = "defaults::blog_first")]
    pub first: u32,
    #[serde(default = "defaults::blog_last")]
    pub last: u32,
}

impl Default for BlogSection {
    fn default() -> Self {
        Self {
            dir: defaults::blog_dir(),
            first: defaults::blog_first(),
            last: defaults::blog_last(),
        }
    }
}

/// Match reports: every `.html` file in one directory.
#[derive(Debug, Clone, Deserialize)]
pub struct ZapasySection {
    #[serde(default = "defaults::zapasy_dir")]
    pub dir: String,
    #[serde(default = "defaults::extension")]
    pub extension: String,
}

impl Default for ZapasySection {
    fn default() -> Self {
        Self {
            dir: defaults::zapasy_dir(),
            extension: defaults::extension(),
        }
    }
}

impl PatchConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PatchError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|e| PatchError::io(path, e))?;
        let config: PatchConfig =
            toml::from_str(&contents).map_err(|e| PatchError::ConfigInvalid {
                message: e.to_string(),
            })?;
        Ok(config)
    }

    /// Load the explicit config if given, else `fotogalerie.toml` in `root`
    /// when present, else the built-in defaults.
    pub fn discover(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let implicit = root.join(CONFIG_FILE);
        if implicit.exists() {
            tracing::debug!("Using config {}", implicit.display());
            Self::load(&implicit)
        } else {
            Ok(Self::default())
        }
    }
}

/// Resolve a configured directory against the working directory.
pub fn resolve_dir(root: &Path, dir: &str) -> PathBuf {
    root.join(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_site_layout() {
        let config = PatchConfig::default();
        assert_eq!(config.blog.dir, "blog");
        assert_eq!(config.blog.first, 14);
        assert_eq!(config.blog.last, 30);
        assert_eq!(config.zapasy.dir, "zapasy");
        assert_eq!(config.zapasy.extension, "html");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: PatchConfig = toml::from_str("[blog]\nlast = 42\n").unwrap();
        assert_eq!(config.blog.dir, "blog");
        assert_eq!(config.blog.first, 14);
        assert_eq!(config.blog.last, 42);
        assert_eq!(config.zapasy.extension, "html");
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = PatchConfig::load(&tmp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, PatchError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "[blog\nfirst = ").unwrap();
        let err = PatchConfig::load(&path).unwrap_err();
        assert!(matches!(err, PatchError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_discover_prefers_working_directory_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE),
            "[zapasy]\ndir = \"matches\"\n",
        )
        .unwrap();
        let config = PatchConfig::discover(None, tmp.path()).unwrap();
        assert_eq!(config.zapasy.dir, "matches");
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = PatchConfig::discover(None, tmp.path()).unwrap();
        assert_eq!(config.blog.dir, "blog");
    }
}
