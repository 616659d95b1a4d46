//! Layered configuration for the `times-drill` binary.
//!
//! Priority, lowest to highest:
//! 1. built-in defaults
//! 2. `./times-drill.toml`
//! 3. an explicit `--config` file
//! 4. `TIMES_DRILL_*` environment variables (e.g. `TIMES_DRILL_CARDS=20`)
//!
//! Command-line flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quiz_engine::CARD_PRESETS;

pub const PROJECT_CONFIG_FILE: &str = "times-drill.toml";
pub const ENV_PREFIX: &str = "TIMES_DRILL_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),

    #[error("`presets` must list at least one card count, all greater than zero, got {0:?}")]
    InvalidPresets(Vec<u32>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Multiplicands to practice; empty means "ask".
    pub numbers: Vec<u8>,
    /// Card count; `None` means "ask".
    pub cards: Option<u32>,
    /// Fixed RNG seed for a reproducible question order.
    pub seed: Option<u64>,
    /// Card counts offered when asking.
    pub presets: Vec<u32>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            numbers: Vec::new(),
            cards: None,
            seed: None,
            presets: CARD_PRESETS.to_vec(),
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Merge every source. A missing project file is skipped; a missing
    /// explicit file is an error, and so are unusable presets.
    pub fn load(explicit: Option<&Path>) -> Result<QuizConfig, ConfigError> {
        let config: QuizConfig = Self::figment(explicit)?
            .extract()
            .map_err(|e| ConfigError::Invalid(Box::new(e)))?;
        if config.presets.is_empty() || config.presets.contains(&0) {
            return Err(ConfigError::InvalidPresets(config.presets));
        }
        Ok(config)
    }

    pub fn load_defaults() -> QuizConfig {
        QuizConfig::default()
    }

    fn figment(explicit: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(QuizConfig::default()));

        let project = PathBuf::from(PROJECT_CONFIG_FILE);
        if project.exists() {
            figment = figment.merge(Toml::file(&project));
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
    }
}
