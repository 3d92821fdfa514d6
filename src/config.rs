//! Configuration loading.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub colors: ColorConfig,
}

/// Editor behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_true")]
    pub line_numbers: bool,

    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    #[serde(default = "default_scroll_offset")]
    pub scroll_offset: usize,
}

fn default_true() -> bool {
    true
}

fn default_tab_size() -> usize {
    4
}

fn default_scroll_offset() -> usize {
    3
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            line_numbers: true,
            tab_size: default_tab_size(),
            scroll_offset: default_scroll_offset(),
        }
    }
}

/// Color configuration, as RGB triples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Tint applied to lines appended by chiasmation
    #[serde(default = "default_mirror_tint")]
    pub mirror_tint: [u8; 3],
}

fn default_mirror_tint() -> [u8; 3] {
    [128, 128, 128]
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            mirror_tint: default_mirror_tint(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Path of the user config file (`~/.config/giasmus/config.json`).
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("giasmus").join("config.json"))
    }

    /// Load the user config if present, falling back to defaults. A config
    /// that exists but does not parse is reported, not silently ignored.
    pub fn load_default() -> Self {
        let Some(path) = Self::user_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring unreadable user config: {:#}", e);
                Self::default()
            }
        }
    }
}
