//! Optional `bintree.toml` discovery and parsing

use rand::Rng;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::values::{RangeError, Value, ValueRange};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ConfigReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid [values] range: {0}")]
    ValueRangeError(#[from] RangeError),

    #[error("Invalid [depth] range: {min}..{max} is empty")]
    DepthRangeError { min: i32, max: i32 },
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    values: Option<RawValues>,
    depth: Option<RawDepth>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawValues {
    low: Option<Value>,
    high: Option<Value>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawDepth {
    min: Option<i32>,
    max: Option<i32>,
}

/// Half-open range of tree depths the CLI picks from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthRange {
    min: i32,
    max: i32,
}

impl DepthRange {
    pub const DEFAULT_MIN: i32 = 3;
    pub const DEFAULT_MAX: i32 = 7;

    pub fn new(min: i32, max: i32) -> Result<Self, ConfigError> {
        if min >= max {
            return Err(ConfigError::DepthRangeError { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Uniformly pick a depth
    pub fn pick<R: Rng>(&self, rng: &mut R) -> i32 {
        rng.random_range(self.min..self.max)
    }
}

impl Default for DepthRange {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeConfig {
    /// File the settings came from, if any
    pub path: Option<PathBuf>,
    /// Range for random node values
    pub values: ValueRange,
    /// Range for the randomly chosen depth
    pub depth: DepthRange,
}

impl TreeConfig {
    pub const FILE_NAME: &'static str = "bintree.toml";

    /// Search the current directory and its parents for `bintree.toml`.
    ///
    /// Defaults apply when no file is found.
    pub fn discover() -> Result<Self, ConfigError> {
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    pub fn discover_from(start: &Path) -> Result<Self, ConfigError> {
        match Self::find_config_file(start) {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!("no {} found, using defaults", Self::FILE_NAME);
                Ok(Self::default())
            }
        }
    }

    /// Load a specific config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.path = Some(path.to_path_buf());

        tracing::debug!(path = %path.display(), values = ?config.values, depth = ?config.depth, "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;

        let values = raw.values.unwrap_or_default();
        let values = ValueRange::new(
            values.low.unwrap_or(ValueRange::DEFAULT_LOW),
            values.high.unwrap_or(ValueRange::DEFAULT_HIGH),
        )?;

        let depth = raw.depth.unwrap_or_default();
        let depth = DepthRange::new(
            depth.min.unwrap_or(DepthRange::DEFAULT_MIN),
            depth.max.unwrap_or(DepthRange::DEFAULT_MAX),
        )?;

        Ok(Self {
            path: None,
            values,
            depth,
        })
    }

    fn find_config_file(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(Self::FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }

            if !current.pop() {
                return None;
            }
        }
    }
}
