//! River crossings.
//!
//! Each method has a fixed day cost. Risk is rolled from the crossing RNG
//! stream; the ferry trades money for safety.
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{
    CAULK_FLOAT_DAYS, FERRY_DAYS, FERRY_FARE, FORD_CLOTHING_LOSS, FORD_DAYS,
};
use crate::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossingMethod {
    Ford,
    CaulkFloat,
    Ferry,
}

impl CrossingMethod {
    pub const ALL: [Self; 3] = [Self::Ford, Self::CaulkFloat, Self::Ferry];

    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Ford => FORD_DAYS,
            Self::CaulkFloat => CAULK_FLOAT_DAYS,
            Self::Ferry => FERRY_DAYS,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ford => "ford",
            Self::CaulkFloat => "caulk_float",
            Self::Ferry => "ferry",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ford => "Ford the river on foot",
            Self::CaulkFloat => "Caulk the wagon and float",
            Self::Ferry => "Take a ferry for $10",
        }
    }

    #[must_use]
    pub const fn from_menu(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(Self::Ford),
            2 => Some(Self::CaulkFloat),
            3 => Some(Self::Ferry),
            _ => None,
        }
    }
}

impl fmt::Display for CrossingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrossingMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "ford" => Ok(Self::Ford),
            "2" | "caulk" | "float" | "caulk_float" => Ok(Self::CaulkFloat),
            "3" | "ferry" => Ok(Self::Ferry),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrossingError {
    #[error("there is no river to cross here")]
    NoRiver,
    #[error("the ferry costs ${fare} but you only have ${available}")]
    FerryUnaffordable { fare: i32, available: i32 },
}

/// What happened on the way across.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CrossingOutcome {
    Safe,
    /// The ford ran deep: outfits and bullets were swept away.
    SuppliesLost { clothing: i32, bullets: i32 },
    /// The floated wagon sank, taking an ox and perhaps a companion with it.
    Sank { casualty: Option<String> },
}

impl fmt::Display for CrossingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe => f.write_str("Your party and wagon made it across the river safely."),
            Self::SuppliesLost { clothing, bullets } => write!(
                f,
                "The water was higher than anticipated. You lost {clothing} outfits and {bullets} bullets."
            ),
            Self::Sank {
                casualty: Some(name),
            } => write!(f, "Your wagon sunk. You lost 1 ox and {name}."),
            Self::Sank { casualty: None } => f.write_str("Your wagon sunk. You lost 1 ox."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossingReport {
    pub method: CrossingMethod,
    pub days: u32,
    pub fare: i32,
    pub outcome: CrossingOutcome,
}

/// Resolve the crossing against the wagon's supplies.
///
/// Only the supplies, party and purse are touched here; the caller advances
/// the calendar by `report.days` and moves the wagon past the river.
///
/// # Errors
///
/// [`CrossingError::FerryUnaffordable`] when the ferry is chosen without the fare.
pub fn resolve_crossing<R: Rng + ?Sized>(
    state: &mut GameState,
    method: CrossingMethod,
    rng: &mut R,
) -> Result<CrossingReport, CrossingError> {
    let mut fare = 0;
    let outcome = match method {
        CrossingMethod::Ford => {
            let odds = rng.gen_range(1..=10);
            if (3..=6).contains(&odds) {
                state.inventory.clothing -= FORD_CLOTHING_LOSS;
                let bullets = if state.inventory.ammo >= 2 {
                    rng.gen_range(1..state.inventory.ammo)
                } else {
                    0
                };
                let bullets = state.inventory.spend_ammo(bullets);
                CrossingOutcome::SuppliesLost {
                    clothing: FORD_CLOTHING_LOSS,
                    bullets,
                }
            } else {
                CrossingOutcome::Safe
            }
        }
        CrossingMethod::CaulkFloat => {
            let odds = rng.gen_range(1..=4);
            if (2..=3).contains(&odds) {
                state.inventory.lose_ox();
                let casualty = state.party.lose_random_member(rng);
                CrossingOutcome::Sank { casualty }
            } else {
                CrossingOutcome::Safe
            }
        }
        CrossingMethod::Ferry => {
            if !state.player.can_afford(FERRY_FARE) {
                log::warn!(
                    "ferry refused: fare {FERRY_FARE}, purse {}",
                    state.player.money
                );
                return Err(CrossingError::FerryUnaffordable {
                    fare: FERRY_FARE,
                    available: state.player.money,
                });
            }
            state.player.money -= FERRY_FARE;
            fare = FERRY_FARE;
            CrossingOutcome::Safe
        }
    };
    Ok(CrossingReport {
        method,
        days: method.days(),
        fare,
        outcome,
    })
}
