//! Configuration loading and merging.
//!
//! Configuration is assembled from defaults, then a global file
//! (`~/.config/wpdocs/config.toml`), then a project-local `.wpdocs.toml`,
//! then environment variables. An explicit `--config` path (or
//! `WPDOCS_CONFIG`) replaces the file lookup entirely.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WpDocsError};

/// Default REST endpoint for developer.wordpress.org.
pub const DEFAULT_API_BASE_URL: &str = "https://developer.wordpress.org/wp-json/wp/v2";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub package: PackageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the wp/v2 REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Timeout applied to every request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    /// Path components skipped while walking a skill directory.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_exclude() -> Vec<String> {
    ["node_modules", "__pycache__", ".git"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            exclude: default_exclude(),
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("WPDOCS_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project()? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&config_dir.join("wpdocs/config.toml"))
    }

    fn load_project() -> Result<Option<ConfigPatch>> {
        let cwd = std::env::current_dir()?;
        Self::load_patch(&cwd.join(".wpdocs.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| WpDocsError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| WpDocsError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(api) = patch.api {
            if let Some(base_url) = api.base_url {
                self.api.base_url = base_url;
            }
            if let Some(timeout_secs) = api.timeout_secs {
                self.api.timeout_secs = timeout_secs;
            }
        }
        if let Some(package) = patch.package {
            if let Some(exclude) = package.exclude {
                self.package.exclude = exclude;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(base_url) = std::env::var("WPDOCS_API_BASE_URL") {
            self.api.base_url = base_url;
        }
        if let Ok(raw) = std::env::var("WPDOCS_API_TIMEOUT_SECS") {
            self.api.timeout_secs = raw.parse().map_err(|_| {
                WpDocsError::Config(format!("WPDOCS_API_TIMEOUT_SECS must be an integer: {raw}"))
            })?;
        }
        Ok(())
    }
}

/// Partial configuration as read from a single TOML file.
#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    api: Option<ApiPatch>,
    package: Option<PackagePatch>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiPatch {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct PackagePatch {
    exclude: Option<Vec<String>>,
}
