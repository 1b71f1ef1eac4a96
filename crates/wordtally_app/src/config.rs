use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::logging::LogDestination;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "./wordtally.ron";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// First word of the `greet` message.
    pub greeting_word: String,
    /// Line printed by `hello`.
    pub hello_message: String,
    /// Letter counted by `beans` when `--letter` is absent.
    pub default_letter: char,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            greeting_word: "Hi".to_string(),
            hello_message: "Hello, World".to_string(),
            default_letter: 'b',
            log_destination: LogDestination::Terminal,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Parse the RON config at `path`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Pick the config for this run.
///
/// An explicit path must load. The implicit default path falls back to
/// [`AppConfig::default`]; a broken default file is handed back alongside
/// so it can be logged once logging is up.
pub fn resolve_config(
    explicit: Option<&Path>,
) -> Result<(AppConfig, Option<ConfigError>), ConfigError> {
    if let Some(path) = explicit {
        return load_config(path).map(|config| (config, None));
    }
    match load_config(Path::new(DEFAULT_CONFIG_PATH)) {
        Ok(config) => Ok((config, None)),
        Err(ConfigError::NotFound(_)) => Ok((AppConfig::default(), None)),
        Err(err) => Ok((AppConfig::default(), Some(err))),
    }
}
