//! Journey loop.
//!
//! Time advances in explicit ticks. A [`TickSchedule`] says which ticks carry
//! a day, a travel leg, or an encounter; [`tick`] applies them in that order
//! and then settles the journey's ending.
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GameConfig;
use crate::constants::{
    DAY_EVERY_TICKS, ENCOUNTER_EVERY_TICKS, LOG_ARRIVED, LOG_CROSSING_PENDING,
    LOG_CROSSING_RESOLVED, LOG_DAY_PASSED, LOG_ENCOUNTER, LOG_JOURNEY_ENDED,
    LOG_PARTY_MEMBER_LOST, LOG_TRAVEL_BLOCKED, LOG_TRAVELED, TRAVEL_EVERY_TICKS,
};
use crate::crossings::{
    CrossingError, CrossingMethod, CrossingOutcome, CrossingReport, resolve_crossing,
};
use crate::encounters::{EncounterOutcome, EncounterTargets, roll_encounter};
use crate::map::Landmark;
use crate::result::{Ending, select_ending};
use crate::state::GameState;

mod rng;
pub mod session;
pub use rng::{CountingRng, RngBundle};
pub use session::JourneySession;

/// How many ticks apart each periodic event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickSchedule {
    pub travel_every: u32,
    pub encounter_every: u32,
    pub day_every: u32,
}

impl Default for TickSchedule {
    fn default() -> Self {
        Self {
            travel_every: TRAVEL_EVERY_TICKS,
            encounter_every: ENCOUNTER_EVERY_TICKS,
            day_every: DAY_EVERY_TICKS,
        }
    }
}

impl TickSchedule {
    const fn due(every: u32, tick: u32) -> bool {
        every != 0 && tick % every == 0
    }

    #[must_use]
    pub const fn is_day(&self, tick: u32) -> bool {
        Self::due(self.day_every, tick)
    }

    #[must_use]
    pub const fn is_travel(&self, tick: u32) -> bool {
        Self::due(self.travel_every, tick)
    }

    #[must_use]
    pub const fn is_encounter(&self, tick: u32) -> bool {
        Self::due(self.encounter_every, tick)
    }
}

/// Why the wagon cannot move right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TravelBlocked {
    #[error("the journey is over ({0})")]
    Ended(Ending),
    #[error("the river must be crossed before the wagon can go on")]
    CrossingPending,
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickOutcome {
    pub tick: u32,
    pub day_passed: bool,
    pub traveled: bool,
    pub encounter: Option<EncounterOutcome>,
    pub arrived: Option<Landmark>,
    pub crossing_pending: bool,
    pub ending: Option<Ending>,
    pub log_keys: Vec<&'static str>,
}

impl TickOutcome {
    const fn new(tick: u32) -> Self {
        Self {
            tick,
            day_passed: false,
            traveled: false,
            encounter: None,
            arrived: None,
            crossing_pending: false,
            ending: None,
            log_keys: Vec::new(),
        }
    }
}

/// The ticks that made up one travel leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct LegReport {
    pub ticks: Vec<TickOutcome>,
}

impl LegReport {
    pub fn encounters(&self) -> impl Iterator<Item = &EncounterOutcome> {
        self.ticks.iter().filter_map(|t| t.encounter.as_ref())
    }

    pub fn arrivals(&self) -> impl Iterator<Item = Landmark> + '_ {
        self.ticks.iter().filter_map(|t| t.arrived)
    }

    #[must_use]
    pub fn days_passed(&self) -> usize {
        self.ticks.iter().filter(|t| t.day_passed).count()
    }

    #[must_use]
    pub fn crossing_pending(&self) -> bool {
        self.ticks.last().is_some_and(|t| t.crossing_pending)
    }

    #[must_use]
    pub fn ending(&self) -> Option<Ending> {
        self.ticks.last().and_then(|t| t.ending)
    }
}

fn ensure_can_travel(gs: &GameState) -> Result<(), TravelBlocked> {
    if let Some(ending) = gs.ending {
        log::warn!("{LOG_TRAVEL_BLOCKED}: journey ended ({ending})");
        return Err(TravelBlocked::Ended(ending));
    }
    if gs.pending_crossing {
        log::warn!("{LOG_TRAVEL_BLOCKED}: river at row {}", gs.map.row());
        return Err(TravelBlocked::CrossingPending);
    }
    Ok(())
}

/// Advance the journey by one tick.
///
/// # Errors
///
/// [`TravelBlocked`] when the journey has ended or a river is waiting to be crossed.
pub fn tick<R: Rng + ?Sized>(
    gs: &mut GameState,
    cfg: &GameConfig,
    rng: &mut R,
) -> Result<TickOutcome, TravelBlocked> {
    ensure_can_travel(gs)?;
    gs.tick = gs.tick.saturating_add(1);
    let t = gs.tick;
    let mut outcome = TickOutcome::new(t);

    if cfg.schedule.is_day(t) {
        gs.date.advance_days(1);
        outcome.day_passed = true;
        outcome.log_keys.push(LOG_DAY_PASSED);
        log::debug!("{LOG_DAY_PASSED}: {} (tick {t})", gs.date);
        if gs.map.advance() {
            outcome.arrived = arrive(gs, &mut outcome.log_keys);
        }
    }

    if cfg.schedule.is_travel(t) {
        gs.inventory.eat(cfg.travel.food_per_leg);
        gs.miles_remaining = (gs.miles_remaining - cfg.travel.miles_per_leg).max(0);
        gs.stats.legs += 1;
        outcome.traveled = true;
        outcome.log_keys.push(LOG_TRAVELED);
        log::debug!(
            "{LOG_TRAVELED}: {} miles left, {} lbs food",
            gs.miles_remaining,
            gs.inventory.food
        );
    }

    if cfg.schedule.is_encounter(t) {
        let encounter = run_encounter(gs, rng);
        outcome.log_keys.push(LOG_ENCOUNTER);
        if encounter.casualty().is_some() {
            outcome.log_keys.push(LOG_PARTY_MEMBER_LOST);
        }
        outcome.encounter = Some(encounter);
    }

    outcome.crossing_pending = gs.pending_crossing;
    outcome.ending = settle(gs);
    if outcome.ending.is_some() {
        outcome.log_keys.push(LOG_JOURNEY_ENDED);
    }
    Ok(outcome)
}

/// Run ticks until a travel leg happens, the journey ends, or a river blocks the way.
///
/// # Errors
///
/// [`TravelBlocked`] if the wagon could not move at all.
pub fn advance_leg<R: Rng + ?Sized>(
    gs: &mut GameState,
    cfg: &GameConfig,
    rng: &mut R,
) -> Result<LegReport, TravelBlocked> {
    ensure_can_travel(gs)?;
    let mut report = LegReport::default();
    loop {
        let outcome = tick(gs, cfg, rng)?;
        let done = outcome.traveled || outcome.ending.is_some() || outcome.crossing_pending;
        report.ticks.push(outcome);
        if done {
            return Ok(report);
        }
    }
}

/// Resolve one encounter outside the tick schedule ("continue on trail").
///
/// Returns `None` when the journey is already over.
pub fn encounter_now<R: Rng + ?Sized>(
    gs: &mut GameState,
    rng: &mut R,
) -> Option<(EncounterOutcome, Option<Ending>)> {
    if gs.is_over() {
        return None;
    }
    let outcome = run_encounter(gs, rng);
    Some((outcome, settle(gs)))
}

/// Cross the river blocking the trail, then move the wagon past it.
///
/// # Errors
///
/// [`CrossingError::NoRiver`] when no crossing is pending, or whatever
/// [`resolve_crossing`] rejects. A rejected crossing leaves it pending.
pub fn cross_river<R: Rng + ?Sized>(
    gs: &mut GameState,
    method: CrossingMethod,
    rng: &mut R,
) -> Result<CrossingReport, CrossingError> {
    if !gs.pending_crossing || gs.is_over() {
        return Err(CrossingError::NoRiver);
    }
    let report = resolve_crossing(gs, method, rng)?;
    gs.date.advance_days(report.days);
    gs.pending_crossing = false;
    gs.stats.crossings += 1;
    if let CrossingOutcome::Sank { casualty } = &report.outcome {
        gs.record_loss(casualty.as_deref());
    }
    gs.map.advance();
    log::info!(
        "{LOG_CROSSING_RESOLVED}: {} in {} days, now at row {}",
        method,
        report.days,
        gs.map.row()
    );
    settle(gs);
    Ok(report)
}

/// Record an ending once the state calls for one. Endings never change after.
pub fn settle(gs: &mut GameState) -> Option<Ending> {
    if gs.ending.is_none() {
        gs.ending = select_ending(gs);
        if let Some(ending) = gs.ending {
            log::info!(
                "{LOG_JOURNEY_ENDED}: {ending} on {} after {} ticks",
                gs.date,
                gs.tick
            );
        }
    }
    gs.ending
}

fn run_encounter<R: Rng + ?Sized>(gs: &mut GameState, rng: &mut R) -> EncounterOutcome {
    let mut targets = EncounterTargets {
        player: &mut gs.player,
        inventory: &mut gs.inventory,
        party: &mut gs.party,
    };
    let outcome = roll_encounter(&mut targets, rng);
    gs.stats.encounters += 1;
    gs.record_loss(outcome.casualty());
    log::debug!("{LOG_ENCOUNTER}: {}", outcome.kind().key());
    outcome
}

fn arrive(gs: &mut GameState, log_keys: &mut Vec<&'static str>) -> Option<Landmark> {
    let landmark = gs.map.landmark()?;
    log_keys.push(LOG_ARRIVED);
    log::info!("{LOG_ARRIVED}: {}", landmark.name());
    if landmark == Landmark::River {
        gs.pending_crossing = true;
        log_keys.push(LOG_CROSSING_PENDING);
    }
    Some(landmark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Inventory;
    use crate::state::test_state;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn stocked() -> GameState {
        let mut gs = test_state();
        gs.inventory = Inventory {
            oxen: 6,
            ammo: 100,
            clothing: 10,
            food: 600,
        };
        gs
    }

    /// Schedule with no encounters so supply math is exact.
    fn quiet() -> GameConfig {
        let mut cfg = GameConfig::default();
        cfg.schedule.encounter_every = u32::MAX;
        cfg
    }

    #[test]
    fn schedule_matches_the_old_real_time_ratios() {
        let s = TickSchedule::default();
        assert!(s.is_travel(3) && s.is_travel(12) && !s.is_travel(4));
        assert!(s.is_encounter(8) && !s.is_encounter(12));
        assert!(s.is_day(12) && s.is_day(24) && !s.is_day(6));
        assert!(!TickSchedule { day_every: 0, ..s }.is_day(0));
    }

    #[test]
    fn each_leg_eats_thirteen_and_covers_twenty_three() {
        let mut gs = stocked();
        let cfg = quiet();
        let mut rng = SmallRng::seed_from_u64(1);
        let leg = advance_leg(&mut gs, &cfg, &mut rng).unwrap();
        assert_eq!(leg.ticks.len(), 3);
        assert_eq!(gs.inventory.food, 587);
        assert_eq!(gs.miles_remaining, 477);
        advance_leg(&mut gs, &cfg, &mut rng).unwrap();
        assert_eq!(gs.inventory.food, 574);
        assert_eq!(gs.miles_remaining, 454);
        assert_eq!(gs.stats.legs, 2);
    }

    #[test]
    fn reaching_a_river_blocks_travel_until_crossed() {
        let mut gs = stocked();
        let cfg = quiet();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut legs = 0;
        while !gs.pending_crossing {
            advance_leg(&mut gs, &cfg, &mut rng).unwrap();
            legs += 1;
        }
        // Day two lands on tick 24, which is also a travel tick.
        assert_eq!(legs, 8);
        assert_eq!(gs.map.row(), 2);
        assert_eq!(
            advance_leg(&mut gs, &cfg, &mut rng),
            Err(TravelBlocked::CrossingPending)
        );
        let before = gs.date;
        let report = cross_river(&mut gs, CrossingMethod::Ferry, &mut rng).unwrap();
        assert_eq!(report.days, 4);
        assert_eq!(gs.date.days_since(&before), 4);
        assert_eq!(gs.map.row(), 3);
        assert!(!gs.pending_crossing);
        assert!(advance_leg(&mut gs, &cfg, &mut rng).is_ok());
    }

    #[test]
    fn crossing_without_a_river_is_an_error() {
        let mut gs = stocked();
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(
            cross_river(&mut gs, CrossingMethod::Ford, &mut rng),
            Err(CrossingError::NoRiver)
        );
    }

    #[test]
    fn no_oxen_ends_in_stuck_on_the_next_tick() {
        let mut gs = stocked();
        gs.inventory.oxen = 0;
        let mut rng = SmallRng::seed_from_u64(5);
        let outcome = tick(&mut gs, &GameConfig::default(), &mut rng).unwrap();
        assert_eq!(outcome.ending, Some(Ending::Stuck));
        assert!(outcome.log_keys.contains(&LOG_JOURNEY_ENDED));
        assert_eq!(
            tick(&mut gs, &GameConfig::default(), &mut rng),
            Err(TravelBlocked::Ended(Ending::Stuck))
        );
    }

    #[test]
    fn miles_never_drop_below_zero() {
        let mut gs = stocked();
        gs.miles_remaining = 10;
        let mut rng = SmallRng::seed_from_u64(5);
        advance_leg(&mut gs, &quiet(), &mut rng).unwrap();
        assert_eq!(gs.miles_remaining, 0);
    }

    #[test]
    fn a_quiet_journey_reaches_oregon() {
        let mut gs = stocked();
        let cfg = quiet();
        let mut rng = SmallRng::seed_from_u64(9);
        let mut guard = 0;
        let mut arrivals = Vec::new();
        let mut days = 0;
        let mut crossing_days = 0;
        while !gs.is_over() {
            guard += 1;
            assert!(guard < 200, "journey never finished");
            if gs.pending_crossing {
                let report = cross_river(&mut gs, CrossingMethod::Ferry, &mut rng).unwrap();
                crossing_days += i64::from(report.days);
            } else {
                let leg = advance_leg(&mut gs, &cfg, &mut rng).unwrap();
                assert_eq!(leg.encounters().count(), 0);
                arrivals.extend(leg.arrivals());
                days += i64::try_from(leg.days_passed()).unwrap();
            }
        }
        assert_eq!(gs.ending, Some(Ending::Oregon));
        assert_eq!(gs.map.row(), 9);
        assert_eq!(gs.miles_remaining, 0);
        assert_eq!(gs.stats.crossings, 2);
        assert_eq!(
            arrivals,
            vec![
                Landmark::River,
                Landmark::TheDalles,
                Landmark::River,
                Landmark::FortWallaWalla,
                Landmark::OregonCity,
            ]
        );
        assert_eq!(days + crossing_days, gs.days_on_trail());
    }

    #[test]
    fn leg_report_counts_match_the_state() {
        let mut gs = stocked();
        let mut rng = SmallRng::seed_from_u64(21);
        let mut encounters = 0;
        while gs.stats.legs < 12 && !gs.is_over() {
            if gs.pending_crossing {
                cross_river(&mut gs, CrossingMethod::Ferry, &mut rng).unwrap();
                continue;
            }
            let leg = advance_leg(&mut gs, &GameConfig::default(), &mut rng).unwrap();
            encounters += leg.encounters().count();
            assert_eq!(leg.crossing_pending(), gs.pending_crossing);
            assert_eq!(leg.ending(), gs.ending);
        }
        assert_eq!(u32::try_from(encounters).unwrap(), gs.stats.encounters);
    }

    #[test]
    fn continue_on_trail_rolls_one_encounter() {
        let mut gs = stocked();
        let mut rng = SmallRng::seed_from_u64(12);
        let (_, ending) = encounter_now(&mut gs, &mut rng).unwrap();
        assert_eq!(ending, None);
        assert_eq!(gs.stats.encounters, 1);
        gs.ending = Some(Ending::Frozen);
        assert!(encounter_now(&mut gs, &mut rng).is_none());
    }
}
