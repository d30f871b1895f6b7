//! Wagon supplies.
use serde::{Deserialize, Serialize};

use crate::constants::STARVATION_FOOD_FLOOR;

/// The four goods carried in the wagon.
///
/// Oxen and ammo never drop below zero. Food and clothing may go negative:
/// those values are the starvation and freezing sentinels checked by the
/// journey loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Inventory {
    #[serde(default)]
    pub oxen: i32,
    /// Loose bullets, not boxes.
    #[serde(default)]
    pub ammo: i32,
    /// Outfits of clothing.
    #[serde(default)]
    pub clothing: i32,
    /// Pounds of food.
    #[serde(default)]
    pub food: i32,
}

impl Inventory {
    pub fn lose_ox(&mut self) {
        self.oxen = self.oxen.saturating_sub(1).max(0);
    }

    /// Remove up to `bullets`, returning how many were actually lost.
    pub fn spend_ammo(&mut self, bullets: i32) -> i32 {
        let spent = bullets.clamp(0, self.ammo.max(0));
        self.ammo -= spent;
        spent
    }

    pub fn eat(&mut self, lbs: i32) {
        self.food = self.food.saturating_sub(lbs);
    }

    #[must_use]
    pub const fn starved(&self) -> bool {
        self.food <= STARVATION_FOOD_FLOOR
    }

    #[must_use]
    pub const fn frozen(&self) -> bool {
        self.clothing < 0
    }
}
