//! Whole-journey state. This is exactly what a save file holds.
use serde::{Deserialize, Serialize};

use crate::clock::GameDate;
use crate::inventory::Inventory;
use crate::map::TrailMap;
use crate::party::Party;
use crate::player::Player;
use crate::result::Ending;
use crate::seed;

/// Running tallies shown on the result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct JourneyStats {
    #[serde(default)]
    pub legs: u32,
    #[serde(default)]
    pub encounters: u32,
    #[serde(default)]
    pub crossings: u32,
    #[serde(default)]
    pub hunts: u32,
    /// Companions lost, in order of death.
    #[serde(default)]
    pub lost: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub seed: u64,
    /// Ticks elapsed since departure.
    #[serde(default)]
    pub tick: u32,
    pub miles_remaining: i32,
    #[serde(default)]
    pub inventory: Inventory,
    #[serde(default)]
    pub date: GameDate,
    #[serde(default)]
    pub departed: GameDate,
    pub player: Player,
    pub party: Party,
    #[serde(default)]
    pub map: TrailMap,
    /// Set on reaching a river row; travel stops until it is crossed.
    #[serde(default)]
    pub pending_crossing: bool,
    #[serde(default)]
    pub ending: Option<Ending>,
    #[serde(default)]
    pub stats: JourneyStats,
}

impl GameState {
    /// A wagon at Fort Boise with an empty hold, waiting for the store.
    #[must_use]
    pub fn new(player: Player, party: Party, seed: u64, trail_miles: i32) -> Self {
        let departed = GameDate::departure();
        Self {
            seed,
            tick: 0,
            miles_remaining: trail_miles,
            inventory: Inventory::default(),
            date: departed,
            departed,
            player,
            party,
            map: TrailMap::trail(),
            pending_crossing: false,
            ending: None,
            stats: JourneyStats::default(),
        }
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.ending.is_some()
    }

    /// Shareable trail code for this journey's seed, or the seed itself
    /// when it was not drawn from a code.
    #[must_use]
    pub fn share_code(&self) -> String {
        seed::share_code(self.seed)
    }

    #[must_use]
    pub fn days_on_trail(&self) -> i64 {
        self.date.days_since(&self.departed)
    }

    pub(crate) fn record_loss(&mut self, name: Option<&str>) {
        if let Some(name) = name {
            log::info!("{} lost {name}", self.player.name);
            self.stats.lost.push(name.to_string());
        }
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> GameState {
    use crate::player::Profession;

    let player = Player::new("Ada", Profession::Carpenter).unwrap();
    let party = Party::from_names(["Ann", "Bo", "Cal", "Dee"]).unwrap();
    GameState::new(player, party, 42, crate::constants::TRAIL_MILES)
}
