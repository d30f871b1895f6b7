//! Otto's Outpost: supply pricing, purchases, and the departure gate.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::constants::{
    AMMO_BOX_PRICE, BULLETS_PER_BOX, CLOTHING_PRICE, FOOD_PRICE_PER_LB, MIN_OXEN_TO_DEPART,
    OXEN_PRICE,
};
use crate::inventory::Inventory;
use crate::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreItem {
    Oxen,
    AmmoBox,
    Clothes,
    FoodLb,
}

impl StoreItem {
    pub const ALL: [Self; 4] = [Self::Oxen, Self::AmmoBox, Self::Clothes, Self::FoodLb];

    #[must_use]
    pub const fn from_menu(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(Self::Oxen),
            2 => Some(Self::AmmoBox),
            3 => Some(Self::Clothes),
            4 => Some(Self::FoodLb),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Oxen => "Oxen",
            Self::AmmoBox => "Ammo",
            Self::Clothes => "Clothes",
            Self::FoodLb => "Food",
        }
    }

    /// Inventory units one purchased unit adds (a box holds ten bullets).
    #[must_use]
    pub const fn units_per_purchase(self) -> i32 {
        match self {
            Self::AmmoBox => BULLETS_PER_BOX,
            Self::Oxen | Self::Clothes | Self::FoodLb => 1,
        }
    }
}

impl fmt::Display for StoreItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit prices in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorePrices {
    pub oxen: i32,
    pub ammo_box: i32,
    pub clothes: i32,
    pub food_lb: i32,
}

impl Default for StorePrices {
    fn default() -> Self {
        Self {
            oxen: OXEN_PRICE,
            ammo_box: AMMO_BOX_PRICE,
            clothes: CLOTHING_PRICE,
            food_lb: FOOD_PRICE_PER_LB,
        }
    }
}

impl StorePrices {
    #[must_use]
    pub const fn unit_price(&self, item: StoreItem) -> i32 {
        match item {
            StoreItem::Oxen => self.oxen,
            StoreItem::AmmoBox => self.ammo_box,
            StoreItem::Clothes => self.clothes,
            StoreItem::FoodLb => self.food_lb,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub item: StoreItem,
    pub quantity: i32,
    pub cost: i32,
    /// Inventory units added (bullets for ammo).
    pub added: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("you must buy at least one ({requested} requested)")]
    InvalidQuantity { requested: i32 },
    #[error("You don't have enough money to buy that.")]
    InsufficientCash { required: i32, available: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DepartureError {
    #[error("You need at least {needed} oxen to pull your wagon.")]
    NeedOxen { have: i32, needed: i32 },
    #[error("You won't make it very far without food.")]
    NeedFood,
}

/// Price a purchase without applying it.
///
/// # Errors
///
/// [`StoreError::InvalidQuantity`] for non-positive quantities and
/// [`StoreError::InsufficientCash`] when the total overflows.
pub fn quote(prices: &StorePrices, item: StoreItem, quantity: i32) -> Result<i32, StoreError> {
    if quantity <= 0 {
        return Err(StoreError::InvalidQuantity {
            requested: quantity,
        });
    }
    prices
        .unit_price(item)
        .checked_mul(quantity)
        .ok_or(StoreError::InsufficientCash {
            required: i32::MAX,
            available: 0,
        })
}

/// Buy `quantity` of `item`, debiting the purse and stocking the wagon.
///
/// # Errors
///
/// See [`quote`]; additionally fails with [`StoreError::InsufficientCash`]
/// when the cost exceeds the player's money. Nothing changes on error.
pub fn purchase(
    gs: &mut GameState,
    prices: &StorePrices,
    item: StoreItem,
    quantity: i32,
) -> Result<Receipt, StoreError> {
    let cost = quote(prices, item, quantity).map_err(|err| match err {
        StoreError::InsufficientCash { required, .. } => StoreError::InsufficientCash {
            required,
            available: gs.player.money,
        },
        other => other,
    })?;
    if !gs.player.can_afford(cost) {
        log::warn!(
            "purchase refused: {quantity} x {item} costs ${cost}, purse ${}",
            gs.player.money
        );
        return Err(StoreError::InsufficientCash {
            required: cost,
            available: gs.player.money,
        });
    }
    let added = quantity.saturating_mul(item.units_per_purchase());
    let inv = &mut gs.inventory;
    match item {
        StoreItem::Oxen => inv.oxen = inv.oxen.saturating_add(added),
        StoreItem::AmmoBox => inv.ammo = inv.ammo.saturating_add(added),
        StoreItem::Clothes => inv.clothing = inv.clothing.saturating_add(added),
        StoreItem::FoodLb => inv.food = inv.food.saturating_add(added),
    }
    gs.player.money -= cost;
    log::debug!("bought {quantity} x {item} for ${cost}");
    Ok(Receipt {
        item,
        quantity,
        cost,
        added,
    })
}

/// The wagon may only leave with enough oxen and some food.
///
/// # Errors
///
/// [`DepartureError::NeedOxen`] first, then [`DepartureError::NeedFood`].
pub fn departure_check(inventory: &Inventory) -> Result<(), DepartureError> {
    if inventory.oxen < MIN_OXEN_TO_DEPART {
        return Err(DepartureError::NeedOxen {
            have: inventory.oxen,
            needed: MIN_OXEN_TO_DEPART,
        });
    }
    if inventory.food <= 0 {
        return Err(DepartureError::NeedFood);
    }
    Ok(())
}
