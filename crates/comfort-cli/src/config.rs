//! Configuration file management.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Widget database path (defaults to the platform data directory)
    #[serde(default)]
    pub store: Option<PathBuf>,

    /// Disable colored output
    #[serde(default)]
    pub no_color: bool,

    /// Lowest temperature the TUI slider reaches (Celsius)
    #[serde(default = "default_slider_min")]
    pub slider_min: i32,

    /// Highest temperature the TUI slider reaches (Celsius)
    #[serde(default = "default_slider_max")]
    pub slider_max: i32,

    /// Ask before `reset` clears everything
    #[serde(default = "default_true")]
    pub confirm_reset: bool,
}

fn default_slider_min() -> i32 {
    -10
}

fn default_slider_max() -> i32 {
    40
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: None,
            no_color: false,
            slider_min: default_slider_min(),
            slider_max: default_slider_max(),
            confirm_reset: true,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("comfort")
            .join("config.toml")
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load config from `path`, falling back to defaults on any problem.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config: {}", e);
                    }
                },
                Err(e) => {
                    eprintln!("Warning: Failed to read config: {}", e);
                }
            }
        }
        Self::default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    /// Save config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Slider bounds as `(low, high)`, swapped if configured backwards.
    pub fn slider_bounds(&self) -> (i32, i32) {
        if self.slider_min <= self.slider_max {
            (self.slider_min, self.slider_max)
        } else {
            (self.slider_max, self.slider_min)
        }
    }
}

/// Resolve the database path: explicit flag, then config, then platform default.
pub fn resolve_store_path(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    flag.or_else(|| config.store.clone())
        .unwrap_or_else(comfort_store::default_db_path)
}
