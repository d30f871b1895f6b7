//! Tunable game configuration.
//!
//! Every field defaults to the values in [`crate::constants`], so a JSON file
//! only needs the keys it wants to override.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::camp::CampConfig;
use crate::constants::{FOOD_PER_LEG, MILES_PER_LEG, TRAIL_MILES};
use crate::hunt::HuntConfig;
use crate::journey::TickSchedule;
use crate::store::StorePrices;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelConfig {
    pub trail_miles: i32,
    pub food_per_leg: i32,
    pub miles_per_leg: i32,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            trail_miles: TRAIL_MILES,
            food_per_leg: FOOD_PER_LEG,
            miles_per_leg: MILES_PER_LEG,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    pub schedule: TickSchedule,
    pub travel: TravelConfig,
    pub prices: StorePrices,
    pub camp: CampConfig,
    pub hunt: HuntConfig,
}

impl GameConfig {
    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON, [`ConfigError::Invalid`] for
    /// values the journey loop cannot run with.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// # Errors
    ///
    /// [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.schedule;
        if s.travel_every == 0 || s.encounter_every == 0 || s.day_every == 0 {
            return Err(ConfigError::Invalid(
                "schedule intervals must be at least one tick".into(),
            ));
        }
        if self.travel.trail_miles <= 0 || self.travel.miles_per_leg <= 0 {
            return Err(ConfigError::Invalid(
                "trail_miles and miles_per_leg must be positive".into(),
            ));
        }
        if self.travel.food_per_leg < 0 {
            return Err(ConfigError::Invalid("food_per_leg cannot be negative".into()));
        }
        let p = &self.prices;
        if [p.oxen, p.ammo_box, p.clothes, p.food_lb]
            .iter()
            .any(|price| *price <= 0)
        {
            return Err(ConfigError::Invalid("store prices must be positive".into()));
        }
        if self.hunt.odds == 0 || self.hunt.ammo_cost <= 0 {
            return Err(ConfigError::Invalid(
                "hunt odds and ammo_cost must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Load a [`GameConfig`] from a JSON file.
///
/// # Errors
///
/// [`ConfigError::Io`] when the file cannot be read, plus anything
/// [`GameConfig::from_json_str`] reports.
pub fn load_game_config(path: &Path) -> Result<GameConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = GameConfig::from_json_str(&raw)?;
    log::debug!("loaded game config from {}", path.display());
    Ok(cfg)
}
