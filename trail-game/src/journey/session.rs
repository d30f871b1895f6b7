use crate::camp::{CampOutcome, camp_rest};
use crate::config::GameConfig;
use crate::crossings::{CrossingError, CrossingMethod, CrossingReport};
use crate::encounters::EncounterOutcome;
use crate::hunt::{HuntAction, HuntOutcome, resolve_hunt};
use crate::journey::{
    LegReport, RngBundle, TravelBlocked, advance_leg, cross_river, encounter_now, settle,
};
use crate::party::Party;
use crate::player::Player;
use crate::result::{Ending, ResultError, ResultSummary, result_summary};
use crate::state::GameState;
use crate::store::{DepartureError, Receipt, StoreError, StoreItem, departure_check, purchase};

/// High-level session wrapper binding the RNG streams and config to a mutable game state.
#[derive(Debug, Clone)]
pub struct JourneySession {
    config: GameConfig,
    rng: RngBundle,
    state: GameState,
}

impl JourneySession {
    /// Start a fresh journey at Fort Boise.
    #[must_use]
    pub fn new(player: Player, party: Party, seed: u64, config: GameConfig) -> Self {
        let state = GameState::new(player, party, seed, config.travel.trail_miles);
        Self {
            config,
            rng: RngBundle::from_user_seed(seed),
            state,
        }
    }

    /// Resume a journey from a saved state.
    #[must_use]
    pub fn from_state(state: GameState, config: GameConfig) -> Self {
        let rng = RngBundle::resumed(state.seed, state.tick);
        Self { config, rng, state }
    }

    /// Advance one travel leg.
    ///
    /// # Errors
    ///
    /// [`TravelBlocked`] when the journey is over or a river must be crossed first.
    pub fn advance_leg(&mut self) -> Result<LegReport, TravelBlocked> {
        advance_leg(&mut self.state, &self.config, self.rng.encounter())
    }

    /// Press on down the trail: one encounter right now.
    pub fn continue_on_trail(&mut self) -> Option<(EncounterOutcome, Option<Ending>)> {
        encounter_now(&mut self.state, self.rng.encounter())
    }

    /// # Errors
    ///
    /// See [`cross_river`].
    pub fn cross_river(&mut self, method: CrossingMethod) -> Result<CrossingReport, CrossingError> {
        cross_river(&mut self.state, method, self.rng.crossing())
    }

    pub fn hunt(&mut self, action: HuntAction) -> HuntOutcome {
        resolve_hunt(&mut self.state, action, &self.config.hunt, self.rng.hunt())
    }

    pub fn rest(&mut self) -> CampOutcome {
        let outcome = camp_rest(&mut self.state, &self.config.camp);
        settle(&mut self.state);
        outcome
    }

    /// # Errors
    ///
    /// See [`purchase`].
    pub fn purchase(&mut self, item: StoreItem, quantity: i32) -> Result<Receipt, StoreError> {
        purchase(&mut self.state, &self.config.prices, item, quantity)
    }

    /// # Errors
    ///
    /// See [`departure_check`].
    pub fn ready_to_depart(&self) -> Result<(), DepartureError> {
        departure_check(&self.state.inventory)
    }

    /// # Errors
    ///
    /// [`ResultError::InProgress`] until the journey ends.
    pub fn result_summary(&self) -> Result<ResultSummary, ResultError> {
        result_summary(&self.state, self.config.travel.trail_miles)
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Borrow the underlying immutable game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Borrow the underlying mutable game state.
    pub const fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Total RNG draws this session has made.
    #[must_use]
    pub const fn rng_draws(&self) -> u64 {
        self.rng.draws()
    }

    /// Deterministically reseed the session.
    pub fn reseed(&mut self, seed: u64) {
        self.state.seed = seed;
        self.rng = RngBundle::from_user_seed(seed);
    }

    /// Consume the session, returning the underlying game state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Profession;

    fn session(seed: u64) -> JourneySession {
        let player = Player::new("Ada", Profession::Banker).unwrap();
        let party = Party::from_names(["Ann", "Bo", "Cal", "Dee"]).unwrap();
        JourneySession::new(player, party, seed, GameConfig::default())
    }

    fn outfit(s: &mut JourneySession) {
        s.purchase(StoreItem::Oxen, 6).unwrap();
        s.purchase(StoreItem::FoodLb, 400).unwrap();
        s.purchase(StoreItem::Clothes, 8).unwrap();
        s.purchase(StoreItem::AmmoBox, 10).unwrap();
    }

    #[test]
    fn same_seed_same_actions_same_state() {
        let mut a = session(77);
        let mut b = session(77);
        outfit(&mut a);
        outfit(&mut b);
        for _ in 0..12 {
            let ra = a.advance_leg();
            let rb = b.advance_leg();
            assert_eq!(ra, rb);
            if ra.is_err() {
                break;
            }
        }
        assert_eq!(a.state(), b.state());
        assert_eq!(a.rng_draws(), b.rng_draws());
    }

    #[test]
    fn departure_gate_follows_the_store() {
        let mut s = session(1);
        assert!(s.ready_to_depart().is_err());
        outfit(&mut s);
        assert_eq!(s.ready_to_depart(), Ok(()));
        assert_eq!(s.state().player.money, 1_000 - 120 - 400 - 80 - 30);
    }

    #[test]
    fn resting_moves_only_the_calendar() {
        let mut s = session(2);
        outfit(&mut s);
        let outcome = s.rest();
        assert_eq!(outcome.days, 2);
        assert!(!s.is_over());
        assert!(s.result_summary().is_err());
    }

    #[test]
    fn reseeding_matches_a_fresh_session() {
        let mut a = session(5);
        outfit(&mut a);
        a.reseed(99);
        let mut b = session(99);
        outfit(&mut b);
        assert_eq!(a.advance_leg(), b.advance_leg());
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn from_state_keeps_the_journey() {
        let mut s = session(3);
        outfit(&mut s);
        s.advance_leg().unwrap();
        let snapshot = s.into_state();
        let resumed = JourneySession::from_state(snapshot.clone(), GameConfig::default());
        assert_eq!(resumed.state(), &snapshot);
        assert_eq!(resumed.rng_draws(), 0);
    }
}
