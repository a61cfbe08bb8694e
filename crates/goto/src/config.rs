use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, path::Path, path::PathBuf};

const CONFIG_FILE: &str = "goto.toml";

/// Application configuration loaded from goto.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Where the keyword store lives
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Program (and leading arguments) that opens a destination
    #[serde(default = "default_open_command")]
    pub open_command: Vec<String>,
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(env::temp_dir)
        .join("goto")
        .join("keywords.json")
}

pub fn default_open_command() -> Vec<String> {
    let command: &[&str] = if cfg!(target_os = "macos") {
        &["open"]
    } else if cfg!(target_os = "windows") {
        // The empty argument is the window title `start` expects first
        &["cmd", "/C", "start", ""]
    } else {
        &["xdg-open"]
    };
    command.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            open_command: default_open_command(),
        }
    }
}

impl Config {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        // Try current directory first
        if let Ok(content) = std::fs::read_to_string(CONFIG_FILE)
            && let Ok(config) = Self::from_toml_str(&content)
        {
            log::debug!("Loaded config from {}", CONFIG_FILE);
            return config;
        }

        // Try home directory
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home).join(format!(".{}", CONFIG_FILE));
            if let Ok(content) = std::fs::read_to_string(&home_config)
                && let Ok(config) = Self::from_toml_str(&content)
            {
                log::debug!("Loaded config from {}", home_config.display());
                return config;
            }
        }

        log::debug!("Using default config");
        Self::default()
    }

    /// Load config from an explicitly given file; unlike [`load`](Self::load),
    /// a missing or malformed file is an error
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
