//! Spawner configuration — RON file with defaults for every field.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::factory::DEFAULT_CUE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("hostile_chance must be within 0.0..=1.0, got {0}")]
    HostileChance(f32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    /// Audio cue the neutral mob plays when it vocalizes.
    pub cue_path: PathBuf,
    /// Skip audio entirely.
    pub muted: bool,
    /// Seed for random waves.
    pub seed: u64,
    /// Mobs per biome in a random wave. Zero runs only the scripted encounter.
    pub wave_size: usize,
    /// Probability that a rolled spawn is hostile.
    pub hostile_chance: f32,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            cue_path: PathBuf::from(DEFAULT_CUE),
            muted: false,
            seed: 42,
            wave_size: 0,
            hostile_chance: 0.5,
        }
    }
}

impl SpawnerConfig {
    /// Load a configuration from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<SpawnerConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a configuration from a RON string. Missing fields keep their
    /// defaults.
    pub fn parse_ron(input: &str) -> Result<SpawnerConfig, ConfigError> {
        let config: SpawnerConfig = ron::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.hostile_chance) {
            return Err(ConfigError::HostileChance(self.hostile_chance));
        }
        Ok(())
    }
}
