//! Random encounters along the trail.
//!
//! A uniform draw over `0..=75` is mapped onto contiguous buckets. Every draw
//! lands in exactly one bucket; two separate ranges resolve to the quiet
//! "travelling" outcome.
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    BROKEN_ARM_HEALTH_LOSS, CHOLERA_HEALTH_LOSS, ENCOUNTER_DRAW_MAX, SALVAGE_AMMO_MAX,
    SALVAGE_CLOTHING_MAX, SALVAGE_FOOD_MAX, SNAKEBITE_HEALTH_LOSS, TYPHOID_HEALTH_LOSS,
    WILD_FRUIT_FOOD_GAIN, WILD_FRUIT_HEALTH_GAIN,
};
use crate::inventory::Inventory;
use crate::party::Party;
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterKind {
    Theft,
    OxDied,
    Cholera,
    Typhoid,
    WildFruit,
    Snakebite,
    AbandonedWagon,
    BrokenArm,
    Travelling,
}

/// Inclusive draw ranges and the encounter each one triggers.
const ENCOUNTER_TABLE: &[(u8, u8, EncounterKind)] = &[
    (0, 3, EncounterKind::Theft),
    (4, 8, EncounterKind::OxDied),
    (9, 13, EncounterKind::Cholera),
    (14, 19, EncounterKind::Typhoid),
    (20, 24, EncounterKind::WildFruit),
    (25, 29, EncounterKind::Snakebite),
    (30, 35, EncounterKind::AbandonedWagon),
    (36, 43, EncounterKind::Travelling),
    (44, 49, EncounterKind::BrokenArm),
    (50, ENCOUNTER_DRAW_MAX, EncounterKind::Travelling),
];

impl EncounterKind {
    /// Map a draw onto the table. Draws past the table fall back to travelling.
    #[must_use]
    pub fn for_draw(draw: u8) -> Self {
        ENCOUNTER_TABLE
            .iter()
            .find(|(low, high, _)| (*low..=*high).contains(&draw))
            .map_or(Self::Travelling, |(_, _, kind)| *kind)
    }

    /// Number of draws (out of 76) that land on this encounter.
    #[must_use]
    pub fn weight(self) -> u32 {
        ENCOUNTER_TABLE
            .iter()
            .filter(|(_, _, kind)| *kind == self)
            .map(|(low, high, _)| u32::from(high - low) + 1)
            .sum()
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Theft => "theft",
            Self::OxDied => "ox_died",
            Self::Cholera => "cholera",
            Self::Typhoid => "typhoid",
            Self::WildFruit => "wild_fruit",
            Self::Snakebite => "snakebite",
            Self::AbandonedWagon => "abandoned_wagon",
            Self::BrokenArm => "broken_arm",
            Self::Travelling => "travelling",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathCause {
    Typhoid,
    Snakebite,
    Drowning,
}

impl DeathCause {
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Typhoid => "typhoid",
            Self::Snakebite => "a snake bite",
            Self::Drowning => "drowning",
        }
    }
}

/// What an encounter did to the wagon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EncounterOutcome {
    Theft {
        stolen: i32,
    },
    OxDied,
    Cholera {
        sufferer: String,
    },
    Death {
        cause: DeathCause,
        /// `None` when nobody was left to lose.
        casualty: Option<String>,
    },
    WildFruit,
    AbandonedWagon {
        food: i32,
        clothing: i32,
        ammo: i32,
    },
    BrokenArm,
    Travelling,
}

impl EncounterOutcome {
    #[must_use]
    pub const fn kind(&self) -> EncounterKind {
        match self {
            Self::Theft { .. } => EncounterKind::Theft,
            Self::OxDied => EncounterKind::OxDied,
            Self::Cholera { .. } => EncounterKind::Cholera,
            Self::Death {
                cause: DeathCause::Snakebite,
                ..
            } => EncounterKind::Snakebite,
            Self::Death { .. } => EncounterKind::Typhoid,
            Self::WildFruit => EncounterKind::WildFruit,
            Self::AbandonedWagon { .. } => EncounterKind::AbandonedWagon,
            Self::BrokenArm => EncounterKind::BrokenArm,
            Self::Travelling => EncounterKind::Travelling,
        }
    }

    /// Name of the companion who died, if any.
    #[must_use]
    pub fn casualty(&self) -> Option<&str> {
        match self {
            Self::Death { casualty, .. } => casualty.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for EncounterOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Theft { stolen } => write!(
                f,
                "A thief comes during the night and steals {stolen} sets of clothing."
            ),
            Self::OxDied => f.write_str("One of your oxen has fallen sick and died."),
            Self::Cholera { sufferer } => write!(f, "{sufferer} has cholera."),
            Self::Death {
                cause,
                casualty: Some(name),
            } => write!(f, "{name} has died of {}.", cause.describe()),
            Self::Death {
                cause,
                casualty: None,
            } => write!(f, "You are stricken by {}.", cause.describe()),
            Self::WildFruit => f.write_str("You found edible wild fruit."),
            Self::AbandonedWagon {
                food,
                clothing,
                ammo,
            } => write!(
                f,
                "You've come across an abandoned wagon. You salvaged {food}lbs of food, \
                 {clothing} outfits, and {ammo} bullets."
            ),
            Self::BrokenArm => f.write_str("You have broken your arm."),
            Self::Travelling => f.write_str("Travelling along the trail."),
        }
    }
}

/// Mutable view of everything an encounter can touch.
pub struct EncounterTargets<'a> {
    pub player: &'a mut Player,
    pub inventory: &'a mut Inventory,
    pub party: &'a mut Party,
}

/// Draw from `0..=75` and resolve the matching encounter.
pub fn roll_encounter<R: Rng + ?Sized>(
    targets: &mut EncounterTargets<'_>,
    rng: &mut R,
) -> EncounterOutcome {
    let draw = rng.gen_range(0..=ENCOUNTER_DRAW_MAX);
    let kind = EncounterKind::for_draw(draw);
    log::debug!("encounter draw {draw} -> {}", kind.key());
    resolve_encounter(kind, targets, rng)
}

/// Apply a specific encounter. Remaining randomness (amounts, victims) comes from `rng`.
pub fn resolve_encounter<R: Rng + ?Sized>(
    kind: EncounterKind,
    targets: &mut EncounterTargets<'_>,
    rng: &mut R,
) -> EncounterOutcome {
    match kind {
        EncounterKind::Theft => {
            let available = targets.inventory.clothing.max(0);
            let stolen = rng.gen_range(0..=available);
            targets.inventory.clothing -= stolen;
            EncounterOutcome::Theft { stolen }
        }
        EncounterKind::OxDied => {
            targets.inventory.lose_ox();
            EncounterOutcome::OxDied
        }
        EncounterKind::Cholera => {
            targets.player.hurt(CHOLERA_HEALTH_LOSS);
            let sufferer = targets
                .party
                .random_member(rng)
                .map_or_else(|| targets.player.name.clone(), str::to_string);
            EncounterOutcome::Cholera { sufferer }
        }
        EncounterKind::Typhoid => {
            targets.player.hurt(TYPHOID_HEALTH_LOSS);
            let casualty = targets.party.lose_random_member(rng);
            EncounterOutcome::Death {
                cause: DeathCause::Typhoid,
                casualty,
            }
        }
        EncounterKind::WildFruit => {
            targets.player.heal(WILD_FRUIT_HEALTH_GAIN);
            targets.inventory.food += WILD_FRUIT_FOOD_GAIN;
            EncounterOutcome::WildFruit
        }
        EncounterKind::Snakebite => {
            targets.player.hurt(SNAKEBITE_HEALTH_LOSS);
            let casualty = targets.party.lose_random_member(rng);
            EncounterOutcome::Death {
                cause: DeathCause::Snakebite,
                casualty,
            }
        }
        EncounterKind::AbandonedWagon => {
            let food = rng.gen_range(1..=SALVAGE_FOOD_MAX);
            let clothing = rng.gen_range(1..=SALVAGE_CLOTHING_MAX);
            let ammo = rng.gen_range(1..=SALVAGE_AMMO_MAX);
            targets.inventory.food += food;
            targets.inventory.clothing += clothing;
            targets.inventory.ammo += ammo;
            EncounterOutcome::AbandonedWagon {
                food,
                clothing,
                ammo,
            }
        }
        EncounterKind::BrokenArm => {
            targets.player.hurt(BROKEN_ARM_HEALTH_LOSS);
            EncounterOutcome::BrokenArm
        }
        EncounterKind::Travelling => EncounterOutcome::Travelling,
    }
}
