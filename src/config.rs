use crate::consts;
use crate::options::Options;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::level_filters::{LevelFilter, ParseLevelFilterError};

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Size of the playing field
    #[serde(default)]
    pub(crate) grid: GridConfig,

    /// Gameplay options
    #[serde(default)]
    pub(crate) options: Options,

    /// Where & how much to log
    #[serde(default)]
    pub(crate) logging: LoggingConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("snakefeed").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct GridConfig {
    pub(crate) cols: u16,
    pub(crate) rows: u16,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            cols: consts::DEFAULT_COLS,
            rows: consts::DEFAULT_ROWS,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawLoggingConfig")]
pub(crate) struct LoggingConfig {
    /// File to append log messages to.  Nothing is logged if this is unset.
    pub(crate) file: Option<PathBuf>,

    pub(crate) level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> LoggingConfig {
        LoggingConfig {
            file: None,
            level: LevelFilter::INFO,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default)]
struct RawLoggingConfig {
    file: Option<String>,
    level: Option<String>,
}

impl TryFrom<RawLoggingConfig> for LoggingConfig {
    type Error = LoggingConfigError;

    fn try_from(value: RawLoggingConfig) -> Result<LoggingConfig, LoggingConfigError> {
        Ok(LoggingConfig {
            file: value.file.map(expanduser::expanduser).transpose()?,
            level: match value.level {
                Some(s) => s.parse::<LevelFilter>()?,
                None => LevelFilter::INFO,
            },
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum LoggingConfigError {
    #[error("invalid log file path: {0}")]
    Path(#[from] std::io::Error),
    #[error("invalid log level: {0}")]
    Level(#[from] ParseLevelFilterError),
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
