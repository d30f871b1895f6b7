//! How a journey ends and what the result screen shows.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::GameState;

/// Possible journey endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    /// No oxen left to pull the wagon.
    Stuck,
    /// Food fell through the starvation floor.
    Starved,
    /// Every companion has died.
    GrimFate,
    /// Reached Oregon City with the miles behind you.
    Oregon,
    /// Clothing went negative in the mountains.
    Frozen,
    /// The wagon leader's health ran out.
    Dysentery,
}

impl Ending {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Stuck => "stuck",
            Self::Starved => "starved",
            Self::GrimFate => "grim_fate",
            Self::Oregon => "oregon",
            Self::Frozen => "frozen",
            Self::Dysentery => "dysentery",
        }
    }

    #[must_use]
    pub const fn is_victory(self) -> bool {
        matches!(self, Self::Oregon)
    }

    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::Stuck => "Stranded on the trail",
            Self::Starved => "Starved",
            Self::GrimFate => "A grim fate",
            Self::Oregon => "Welcome to Oregon City",
            Self::Frozen => "Frozen in the mountains",
            Self::Dysentery => "Died of dysentery",
        }
    }

    /// Closing line printed under the ending art.
    #[must_use]
    pub fn epilogue(self, leader: &str) -> String {
        match self {
            Self::Stuck => "You cannot continue with no oxen to pull your wagon.".to_string(),
            Self::Starved => "You ran out of food and starved to death.".to_string(),
            Self::GrimFate => "You and your entire party have perished.".to_string(),
            Self::Oregon => "Congratulations, you completed the Oregon Trail!".to_string(),
            Self::Frozen => "You do not have any clothes left. You and your party froze to death \
                             in the mountains."
                .to_string(),
            Self::Dysentery => format!("{leader} has died of dysentery."),
        }
    }
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResultError {
    #[error("the journey is still under way")]
    InProgress,
}

/// Complete summary of a journey for the result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub ending: Ending,
    pub headline: String,
    pub epilogue: String,
    pub share_code: String,
    pub leader: String,
    pub profession: String,
    pub days: i64,
    pub miles_traveled: i32,
    pub miles_remaining: i32,
    pub encounters: u32,
    pub crossings: u32,
    pub survivors: Vec<String>,
    pub lost: Vec<String>,
    pub money: i32,
}

/// Summarise a finished journey.
///
/// # Errors
///
/// Returns [`ResultError::InProgress`] while the journey has no ending.
pub fn result_summary(gs: &GameState, trail_miles: i32) -> Result<ResultSummary, ResultError> {
    let ending = gs.ending.ok_or(ResultError::InProgress)?;
    Ok(ResultSummary {
        ending,
        headline: ending.headline().to_string(),
        epilogue: ending.epilogue(&gs.player.name),
        share_code: gs.share_code(),
        leader: gs.player.name.clone(),
        profession: gs.player.profession.title().to_string(),
        days: gs.days_on_trail(),
        miles_traveled: (trail_miles - gs.miles_remaining).max(0),
        miles_remaining: gs.miles_remaining,
        encounters: gs.stats.encounters,
        crossings: gs.stats.crossings,
        survivors: gs.party.members().to_vec(),
        lost: gs.stats.lost.clone(),
        money: gs.player.money,
    })
}

/// Select the ending in strict priority order, or `None` while the journey goes on.
#[must_use]
pub fn select_ending(gs: &GameState) -> Option<Ending> {
    if gs.inventory.oxen <= 0 {
        return Some(Ending::Stuck);
    }
    if gs.inventory.starved() {
        return Some(Ending::Starved);
    }
    if gs.party.is_empty() {
        return Some(Ending::GrimFate);
    }
    if gs.map.at_final_row() && gs.miles_remaining <= 0 {
        return Some(Ending::Oregon);
    }
    if gs.inventory.frozen() {
        return Some(Ending::Frozen);
    }
    if gs.player.health <= 0 {
        return Some(Ending::Dysentery);
    }
    None
}
