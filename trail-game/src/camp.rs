//! Camping and rest system
use serde::{Deserialize, Serialize};

use crate::constants::{REST_DAYS, REST_HEALTH_GAIN};
use crate::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampConfig {
    pub rest_days: u32,
    pub rest_health: i32,
}

impl Default for CampConfig {
    fn default() -> Self {
        Self {
            rest_days: REST_DAYS,
            rest_health: REST_HEALTH_GAIN,
        }
    }
}

impl CampConfig {
    #[must_use]
    pub fn default_config() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampOutcome {
    pub days: u32,
    pub health_gained: i32,
}

impl CampOutcome {
    #[must_use]
    pub fn message(self) -> String {
        format!("You rest for {} days.", self.days)
    }
}

/// Rest in camp: the calendar moves on, the wagon does not.
pub fn camp_rest(gs: &mut GameState, cfg: &CampConfig) -> CampOutcome {
    gs.player.heal(cfg.rest_health);
    gs.date.advance_days(cfg.rest_days);
    log::debug!(
        "rested {} days, health now {}",
        cfg.rest_days,
        gs.player.health
    );
    CampOutcome {
        days: cfg.rest_days,
        health_gained: cfg.rest_health,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    #[test]
    fn resting_heals_and_costs_two_days() {
        let mut gs = test_state();
        let row = gs.map.row();
        let outcome = camp_rest(&mut gs, &CampConfig::default_config());
        assert_eq!(outcome.days, 2);
        assert_eq!(gs.player.health, 370);
        assert_eq!(gs.days_on_trail(), 2);
        assert_eq!(gs.map.row(), row);
        assert_eq!(outcome.message(), "You rest for 2 days.");
    }
}
