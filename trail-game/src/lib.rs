//! Wagon Trail Game Engine
//!
//! Platform-agnostic core game logic for a wagon journey from Fort Boise to Oregon City.
//! This crate provides all game mechanics without terminal or platform-specific dependencies.

pub mod camp;
pub mod clock;
pub mod config;
pub mod constants;
pub mod crossings;
pub mod encounters;
pub mod hunt;
pub mod inventory;
pub mod journey;
pub mod map;
pub mod party;
pub mod player;
pub mod result;
pub mod seed;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use camp::{CampConfig, CampOutcome, camp_rest};
pub use clock::GameDate;
pub use config::{ConfigError, GameConfig, TravelConfig, load_game_config};
pub use crossings::{CrossingError, CrossingMethod, CrossingOutcome, CrossingReport};
pub use encounters::{DeathCause, EncounterKind, EncounterOutcome};
pub use hunt::{HuntAction, HuntBlockReason, HuntConfig, HuntOutcome};
pub use inventory::Inventory;
pub use journey::{
    JourneySession, LegReport, RngBundle, TickOutcome, TickSchedule, TravelBlocked, advance_leg,
    cross_river, tick,
};
pub use map::{Landmark, MapError, TrailMap};
pub use party::{PARTY_SIZE, Party};
pub use player::{NameError, Player, Profession};
pub use result::{Ending, ResultError, ResultSummary, result_summary, select_ending};
pub use seed::{
    TrailCode, TrailCodeError, decode_to_seed, parse_seed, seed_from_entropy, share_code,
};
pub use state::{GameState, JourneyStats};
pub use store::{DepartureError, Receipt, StoreError, StoreItem, StorePrices};

/// Trait for abstracting save/load operations\
/// Platform-specific implementations should provide this
pub trait GameStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Save game state
    ///
    /// # Errors
    ///
    /// Returns an error if the game state cannot be saved.
    fn save_game(&self, game_state: &GameState) -> Result<(), Self::Error>;

    /// Load game state. `Ok(None)` means there is no save to load.
    ///
    /// # Errors
    ///
    /// Returns an error if a save exists but cannot be read.
    fn load_game(&self) -> Result<Option<GameState>, Self::Error>;

    /// Delete saved game
    ///
    /// # Errors
    ///
    /// Returns an error if the save cannot be deleted.
    fn delete_save(&self) -> Result<(), Self::Error>;
}

/// Main game engine pairing a storage backend with the game configuration
pub struct GameEngine<S>
where
    S: GameStorage,
{
    storage: S,
    config: GameConfig,
}

impl<S> GameEngine<S>
where
    S: GameStorage,
{
    /// Create a new game engine with the provided storage and configuration
    pub const fn new(storage: S, config: GameConfig) -> Self {
        Self { storage, config }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Start a brand-new journey session.
    #[must_use]
    pub fn create_session(&self, player: Player, party: Party, seed: u64) -> JourneySession {
        JourneySession::new(player, party, seed, self.config)
    }

    /// Save a session's state
    ///
    /// # Errors
    ///
    /// Returns an error if the game state cannot be saved.
    pub fn save_session(&self, session: &JourneySession) -> Result<(), S::Error> {
        self.storage.save_game(session.state())
    }

    /// Load a saved journey and wrap it in a session.
    ///
    /// # Errors
    ///
    /// Returns an error if a save exists but cannot be read.
    pub fn load_session(&self) -> Result<Option<JourneySession>, S::Error> {
        Ok(self
            .storage
            .load_game()?
            .map(|state| JourneySession::from_state(state, self.config)))
    }

    /// Remove the save once a journey has ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the save cannot be deleted.
    pub fn delete_save(&self) -> Result<(), S::Error> {
        self.storage.delete_save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStorage {
        save: Rc<RefCell<Option<GameState>>>,
    }

    impl GameStorage for MemoryStorage {
        type Error = Infallible;

        fn save_game(&self, game_state: &GameState) -> Result<(), Self::Error> {
            *self.save.borrow_mut() = Some(game_state.clone());
            Ok(())
        }

        fn load_game(&self) -> Result<Option<GameState>, Self::Error> {
            Ok(self.save.borrow().clone())
        }

        fn delete_save(&self) -> Result<(), Self::Error> {
            self.save.borrow_mut().take();
            Ok(())
        }
    }

    fn leader() -> (Player, Party) {
        (
            Player::new("Ada", Profession::Farmer).unwrap(),
            Party::from_names(["Ann", "Bo", "Cal", "Dee"]).unwrap(),
        )
    }

    #[test]
    fn engine_creates_and_roundtrips_sessions() {
        let engine = GameEngine::new(MemoryStorage::default(), GameConfig::default());
        assert!(engine.load_session().unwrap().is_none());

        let (player, party) = leader();
        let mut session = engine.create_session(player, party, 0xABCD);
        session.purchase(StoreItem::Oxen, 4).unwrap();
        session.purchase(StoreItem::FoodLb, 200).unwrap();
        session.advance_leg().unwrap();
        engine.save_session(&session).unwrap();

        let loaded = engine.load_session().unwrap().expect("save exists");
        assert_eq!(loaded.state(), session.state());
        assert_eq!(loaded.state().player.money, 400 - 80 - 200);

        engine.delete_save().unwrap();
        assert!(engine.load_session().unwrap().is_none());
    }

    #[test]
    fn engine_passes_its_config_to_new_sessions() {
        let mut config = GameConfig::default();
        config.travel.trail_miles = 250;
        let engine = GameEngine::new(MemoryStorage::default(), config);
        let (player, party) = leader();
        let session = engine.create_session(player, party, 1);
        assert_eq!(session.state().miles_remaining, 250);
        assert_eq!(engine.config().travel.trail_miles, 250);
    }
}
