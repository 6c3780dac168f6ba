//! Configuration file handling for the sdf portfolio.
//!
//! The configuration lives in `<config dir>/sdf/config.toml`. A missing file
//! means defaults; every field is optional.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use sdf_core::Accent;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Log file name, placed in the data directory.
pub const LOG_FILE: &str = "sdf.log";

/// Errors raised while loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write config file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("could not determine the home directory")]
    NoHomeDir,
}

/// Result alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Accent color for highlights.
    pub accent: Accent,
    /// Frame interval of the event loop in milliseconds.
    pub tick_rate_ms: u64,
    /// Draw the custom pointer markers.
    pub cursor: bool,
    pub typewriter: TypewriterConfig,
    pub tilt: TiltConfig,
    pub reveal: RevealConfig,
    pub marquee: MarqueeConfig,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accent: Accent::default(),
            tick_rate_ms: 33,
            cursor: true,
            typewriter: TypewriterConfig::default(),
            tilt: TiltConfig::default(),
            reveal: RevealConfig::default(),
            marquee: MarqueeConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// Hero headline typewriter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypewriterConfig {
    pub text: String,
    pub type_delay_ms: u64,
    pub delete_delay_ms: u64,
    pub pause_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            text: "% SDF >..".to_string(),
            type_delay_ms: 150,
            delete_delay_ms: 100,
            pause_ms: 2000,
        }
    }
}

/// Card tilt settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TiltConfig {
    /// Offset applied per cell of distance from the card center.
    pub coefficient: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self { coefficient: 0.1 }
    }
}

/// Scroll reveal settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Minimum visible fraction of an element before it is revealed.
    pub threshold: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: 0.1 }
    }
}

/// Command marquee settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarqueeConfig {
    /// Milliseconds per one-column shift.
    pub step_ms: u64,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self { step_ms: 80 }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `tracing` filter directive, overridden by `SDF_LOG`.
    pub level: String,
    /// Log file path. Defaults to `sdf.log` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load the configuration from `path`, or from the default location.
    ///
    /// A missing file yields the defaults. The result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => default_config_path()?,
        };

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&contents).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse { path: path.clone(), source },
            other => other,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check value ranges that the TOML types alone cannot express.
    pub fn validate(&self) -> Result<()> {
        non_zero("tick_rate_ms", self.tick_rate_ms)?;
        non_zero("typewriter.type_delay_ms", self.typewriter.type_delay_ms)?;
        non_zero("typewriter.delete_delay_ms", self.typewriter.delete_delay_ms)?;
        non_zero("typewriter.pause_ms", self.typewriter.pause_ms)?;
        non_zero("marquee.step_ms", self.marquee.step_ms)?;

        let coefficient = self.tilt.coefficient;
        if !coefficient.is_finite() || coefficient < 0.0 {
            return Err(ConfigError::Invalid {
                field: "tilt.coefficient",
                reason: format!("expected a non-negative number, got {coefficient}"),
            });
        }

        let threshold = self.reveal.threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "reveal.threshold",
                reason: format!("expected a fraction in (0, 1], got {threshold}"),
            });
        }

        Ok(())
    }
}

fn non_zero(field: &'static str, value: u64) -> Result<()> {
    if value == 0 {
        return Err(ConfigError::Invalid {
            field,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "sdf").ok_or(ConfigError::NoHomeDir)
}

/// Default configuration file path.
pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE))
}

/// Default log file path.
pub fn default_log_path() -> Result<PathBuf> {
    Ok(project_dirs()?.data_local_dir().join(LOG_FILE))
}
