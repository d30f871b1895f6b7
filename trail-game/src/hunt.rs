//! Hunting for food.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::{HUNT_AMMO_COST, HUNT_FOOD_GAIN, HUNT_ODDS};
use crate::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HuntConfig {
    /// Bullets spent per shot, and the minimum needed to hunt at all.
    pub ammo_cost: i32,
    pub food_gain: i32,
    /// One in `odds` shots bring down the animal.
    pub odds: u32,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            ammo_cost: HUNT_AMMO_COST,
            food_gain: HUNT_FOOD_GAIN,
            odds: HUNT_ODDS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HuntAction {
    Shoot,
    Escape,
}

impl FromStr for HuntAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "shoot" => Ok(Self::Shoot),
            "x" | "escape" => Ok(Self::Escape),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HuntBlockReason {
    NotEnoughAmmo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HuntOutcome {
    Success {
        bullets_spent: i32,
        food_gained_lbs: i32,
    },
    Missed {
        bullets_spent: i32,
    },
    Escaped,
    Blocked(HuntBlockReason),
}

impl HuntOutcome {
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::Success {
                food_gained_lbs, ..
            } => format!(
                "Good aim. From the animal you shot, you got {food_gained_lbs} pounds of meat."
            ),
            Self::Missed { .. } => "No luck this time.".to_string(),
            Self::Escaped => "You slip away quietly.".to_string(),
            Self::Blocked(HuntBlockReason::NotEnoughAmmo) => {
                "You do not have enough ammo to hunt.".to_string()
            }
        }
    }
}

#[must_use]
pub fn hunt_block_reason(state: &GameState, cfg: &HuntConfig) -> Option<HuntBlockReason> {
    (state.inventory.ammo < cfg.ammo_cost).then_some(HuntBlockReason::NotEnoughAmmo)
}

/// Resolve one shot (or a retreat). Bullets are spent whether or not the shot lands.
pub fn resolve_hunt<R: Rng + ?Sized>(
    state: &mut GameState,
    action: HuntAction,
    cfg: &HuntConfig,
    rng: &mut R,
) -> HuntOutcome {
    if let Some(blocked) = hunt_block_reason(state, cfg) {
        return HuntOutcome::Blocked(blocked);
    }
    if action == HuntAction::Escape {
        return HuntOutcome::Escaped;
    }

    let hit = rng.gen_range(1..=cfg.odds.max(1)) == 1;
    let bullets_spent = state.inventory.spend_ammo(cfg.ammo_cost);
    state.stats.hunts += 1;
    if hit {
        state.inventory.food = state.inventory.food.saturating_add(cfg.food_gain);
        HuntOutcome::Success {
            bullets_spent,
            food_gained_lbs: cfg.food_gain,
        }
    } else {
        HuntOutcome::Missed { bullets_spent }
    }
}
