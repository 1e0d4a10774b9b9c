//! Runtime configuration: where assets and logs live, the RNG seed, and the
//! few rules a player may change.  Gameplay feel stays in `tuning`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::tuning::{MAX_HEALTH, SLIDE_RATE};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Root of the sprite directories (`bg/`, `enm/`, `plane/`, `icon/`).
    pub asset_dir: PathBuf,
    pub log_file: PathBuf,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub rules: GameRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            asset_dir: PathBuf::from("data"),
            log_file: PathBuf::from("airplane.log"),
            seed: None,
            rules: GameRules::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameRules {
    /// Misses allowed before the game is lost (the loss is on miss `max_health + 1`).
    pub max_health: u32,
    /// Ticks per background slide.
    pub slide_rate: u32,
    /// Fixed delay before the first tank; `None` picks 5–8 s at random.
    pub first_spawn_delay_secs: Option<u32>,
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules {
            max_health: MAX_HEALTH,
            slide_rate: SLIDE_RATE,
            first_spawn_delay_secs: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(raw: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw, path)
    }
}
