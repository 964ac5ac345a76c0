//! Optional TOML defaults and resolution of the run configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::GenError;
use crate::params::{interval_to_pause, validate_quality, DEFAULT_QUALITY};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "GENIMAGES_CONFIG";

/// Default output directory.
pub const DEFAULT_OUTPUT: &str = "./test_images";

/// Default interval between images, in seconds.
pub const DEFAULT_INTERVAL: f64 = 1.0;

/// Top-level configuration file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default parameter values (used when CLI flags are omitted).
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Default parameter values from the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Default output directory.
    pub output: Option<String>,
    /// Default interval in seconds.
    pub interval: Option<f64>,
    /// Default JPEG quality.
    pub quality: Option<u8>,
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            log::debug!("Config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `GENIMAGES_CONFIG` environment variable
///
/// There is no implicit location; without either, no file is read.
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(PathBuf::from(p));
    }
    std::env::var(CONFIG_ENV_VAR).ok().filter(|p| !p.is_empty()).map(PathBuf::from)
}

/// Settings for one run. Immutable once resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Directory receiving the images.
    pub output_dir: PathBuf,
    /// Pause between consecutive images.
    pub interval: Duration,
    /// Number of images, or `None` to run until interrupted.
    pub count: Option<u32>,
    /// JPEG encoder quality.
    pub quality: u8,
}

impl RunConfig {
    /// Merge CLI flags over config-file defaults over built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval or quality fails validation.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self, GenError> {
        let defaults = &config.defaults;

        let output_dir = cli
            .output
            .as_deref()
            .or(defaults.output.as_deref())
            .unwrap_or(DEFAULT_OUTPUT);
        let seconds = cli.interval.or(defaults.interval).unwrap_or(DEFAULT_INTERVAL);
        let quality = cli.quality.or(defaults.quality).unwrap_or(DEFAULT_QUALITY);

        let interval = interval_to_pause(seconds).map_err(GenError::InvalidArgument)?;
        validate_quality(quality).map_err(GenError::InvalidArgument)?;

        Ok(Self { output_dir: PathBuf::from(output_dir), interval, count: cli.count, quality })
    }
}
