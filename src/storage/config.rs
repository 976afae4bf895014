//! Configuration handling for addr
//!
//! Settings are read from `~/.addr.yaml`, or from an explicit file given
//! with `--config`. Environment variables (`ADDR_DIRECTORY`, ...) override
//! whatever the file sets.

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the config file looked up in the home directory
pub const CONFIG_FILE_NAME: &str = ".addr.yaml";

const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const ENV_DIRECTORY: &str = "ADDR_DIRECTORY";
const ENV_NUMBER_WIDTH: &str = "ADDR_NUMBER_WIDTH";
const ENV_DATE_FORMAT: &str = "ADDR_DATE_FORMAT";
const ENV_TEMPLATE: &str = "ADDR_TEMPLATE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },
}

/// Keys accepted in the YAML config file
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Directory records are written to
    pub directory: Option<PathBuf>,

    /// Zero-pad width for the number in file names
    pub number_width: Option<usize>,

    /// chrono strftime format for the `Date:` line
    pub date_format: Option<String>,

    /// Path to a custom record template
    pub template: Option<PathBuf>,
}

impl ConfigFile {
    /// Reads and parses a config file
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(path, &content)
    }

    /// Reads a config file that may legitimately be absent
    ///
    /// A file that cannot be read yields `None`. A file that exists but
    /// does not parse is still an error.
    pub fn read_optional(path: &Path) -> Result<Option<Self>, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(path, &content).map(Some),
            Err(_) => Ok(None),
        }
    }

    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved settings for one invocation
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Directory records are written to
    pub directory: PathBuf,

    /// Zero-pad width for the number in file names (0 means no padding)
    pub number_width: usize,

    /// chrono strftime format for the `Date:` line
    pub date_format: String,

    /// Custom template path, if any
    pub template: Option<PathBuf>,

    /// The config file that was used, if any
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            number_width: 0,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            template: None,
            source: None,
        }
    }
}

impl Config {
    /// Loads configuration from the process environment
    ///
    /// `explicit` is the `--config` path. Without it, `~/.addr.yaml` is
    /// used when present.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let home = Self::home_dir();
        Self::load_with(explicit, home.as_deref(), |key| std::env::var(key).ok())
    }

    /// Loads configuration with an explicit home directory and env lookup
    pub fn load_with<F>(explicit: Option<&Path>, home: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        match explicit {
            Some(path) => {
                let file = ConfigFile::read(path)?;
                config.merge(file);
                config.source = Some(path.to_path_buf());
            }
            None => {
                if let Some(path) = home.map(|h| h.join(CONFIG_FILE_NAME)) {
                    if let Some(file) = ConfigFile::read_optional(&path)? {
                        config.merge(file);
                        config.source = Some(path);
                    }
                }
            }
        }

        config.apply_env(env)?;
        Ok(config)
    }

    /// Returns the user's home directory
    pub fn home_dir() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }

    /// Overlays values set in a config file
    fn merge(&mut self, file: ConfigFile) {
        if let Some(directory) = file.directory {
            self.directory = directory;
        }
        if let Some(width) = file.number_width {
            self.number_width = width;
        }
        if let Some(format) = file.date_format {
            self.date_format = format;
        }
        if file.template.is_some() {
            self.template = file.template;
        }
    }

    /// Overlays environment variables; empty values count as unset
    fn apply_env<F>(&mut self, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        if let Some(directory) = lookup(ENV_DIRECTORY) {
            self.directory = PathBuf::from(directory);
        }
        if let Some(width) = lookup(ENV_NUMBER_WIDTH) {
            self.number_width = width.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_NUMBER_WIDTH,
                value: width.clone(),
            })?;
        }
        if let Some(format) = lookup(ENV_DATE_FORMAT) {
            self.date_format = format;
        }
        if let Some(template) = lookup(ENV_TEMPLATE) {
            self.template = Some(PathBuf::from(template));
        }

        Ok(())
    }
}
