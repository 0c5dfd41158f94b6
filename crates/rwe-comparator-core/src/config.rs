//! Engine configuration: match thresholds and search limits.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default score at or above which a match is accepted.
pub const ACCEPT_THRESHOLD: f64 = 85.0;

/// Default score at or above which a match is suggested.
pub const SUGGEST_THRESHOLD: f64 = 70.0;

/// Default number of records requested from the literature source.
pub const DEFAULT_MAX_RESULTS: usize = 25;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid thresholds: accept={accept}, suggest={suggest}")]
    InvalidThresholds { accept: f64, suggest: f64 },

    #[error("max_results must be at least 1")]
    InvalidMaxResults,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Score bands (0.0 - 100.0) used by the name normalizer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchThresholds {
    /// Score >= accept → Accepted
    pub accept: f64,
    /// suggest <= score < accept → Suggested
    pub suggest: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            accept: ACCEPT_THRESHOLD,
            suggest: SUGGEST_THRESHOLD,
        }
    }
}

impl MatchThresholds {
    /// Create validated thresholds.
    pub fn new(accept: f64, suggest: f64) -> ConfigResult<Self> {
        let thresholds = Self { accept, suggest };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Require `0 <= suggest <= accept <= 100`.
    pub fn validate(&self) -> ConfigResult<()> {
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(self.accept) || !in_range(self.suggest) || self.suggest > self.accept {
            return Err(ConfigError::InvalidThresholds {
                accept: self.accept,
                suggest: self.suggest,
            });
        }
        Ok(())
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub thresholds: MatchThresholds,
    /// Records requested per search
    pub max_results: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thresholds: MatchThresholds::default(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        self.thresholds.validate()?;
        if self.max_results == 0 {
            return Err(ConfigError::InvalidMaxResults);
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
