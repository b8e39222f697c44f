use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WanViewError;

/// Root of the WANManager object tree in prpl-based dumps.
pub const DEFAULT_PREFIX: &str = "Device.X_PRPLWARE-COM_WANManager";

/// Input file used when neither the command line nor the config names one.
pub const DEFAULT_INPUT: &str = "DM.txt";

pub const DEFAULT_WIDE_THRESHOLD: usize = 90;
pub const DEFAULT_FALLBACK_WIDTH: usize = 80;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub prefix: String,
    pub wide_threshold: usize,
    pub fallback_width: usize,
    pub input: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prefix: DEFAULT_PREFIX.to_string(),
            wide_threshold: DEFAULT_WIDE_THRESHOLD,
            fallback_width: DEFAULT_FALLBACK_WIDTH,
            input: None,
        }
    }
}

impl Config {
    /// Load configuration from `explicit` if given, otherwise from the
    /// per-user config file. Only the per-user file may be missing.
    pub fn load(explicit: Option<&Path>) -> Result<Self, WanViewError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let path = config_path()?;
                if !path.exists() {
                    return Ok(Config::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path).map_err(|source| WanViewError::ConfigRead {
            path: path.clone(),
            source,
        })?;

        let config = Self::from_toml_str(&content)
            .map_err(|source| WanViewError::ConfigParse { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Input path to read: the command line wins, then the config file.
    pub fn input_path(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.input.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }
}

pub fn config_path() -> Result<PathBuf, WanViewError> {
    let config_dir = dirs::config_dir().ok_or(WanViewError::NoConfigDir)?;
    Ok(config_dir.join("wan-manager-view").join("config.toml"))
}
