//! User configuration
//!
//! Optional TOML file with symbol overrides and path-shortening defaults.
//! Command-line flags override anything set here.
//!
//! Location, first match wins:
//! 1. `--config <PATH>`
//! 2. `$PROMPTLINE_CONFIG_PATH`
//! 3. `$XDG_CONFIG_HOME/promptline/config.toml` (`~/.config/...` fallback;
//!    `%APPDATA%\promptline\config.toml` on Windows)
//!
//! ```toml
//! [git]
//! porcelain = "v2"
//! separator = " "
//!
//! [git.symbols]
//! untracked = "…"
//! clean = "✓"
//!
//! [path]
//! full-segments = 2
//! per-word = true
//! ```
//!
//! A prompt helper must not fail because of its config: an unreadable or
//! invalid file is logged at warn level and the defaults are used.

use std::path::{Path, PathBuf};

use anyhow::Context;
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use serde::{Deserialize, Serialize};

use crate::git::PorcelainVersion;
use crate::path::ShortenOptions;
use crate::render::RenderStyle;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "PROMPTLINE_CONFIG_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PromptConfig {
    pub git: GitConfig,
    pub path: ShortenOptions,
}

/// `[git]` section: how to query and how to render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GitConfig {
    pub porcelain: PorcelainVersion,
    #[serde(flatten)]
    pub style: RenderStyle,
}

impl PromptConfig {
    /// Load the config, falling back to defaults on any problem.
    pub fn load(explicit: Option<&Path>) -> Self {
        match Self::try_load(explicit) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load the config. A missing file is not an error.
    pub fn try_load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = config_path(explicit) else {
            log::debug!("No config directory available; using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            if explicit.is_some() {
                log::warn!("Config file not found: {}", path.display());
            } else {
                log::debug!("No config at {}; using defaults", path.display());
            }
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Resolve the config file location (the file need not exist).
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }

    // choose_base_strategy uses:
    // - XDG on Linux and macOS (respects XDG_CONFIG_HOME, falls back to ~/.config)
    // - Windows conventions on Windows (%APPDATA%)
    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("promptline").join("config.toml"))
}
