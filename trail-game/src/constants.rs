//! Centralized balance and tuning constants for Wagon Trail game logic.
//!
//! These values define the deterministic math for the journey simulation.
//! `GameConfig::default()` is built from them, so a JSON config file can
//! override any of them without touching code.

// Logging keys -------------------------------------------------------------
pub(crate) const LOG_DAY_PASSED: &str = "log.day.passed";
pub(crate) const LOG_TRAVELED: &str = "log.traveled";
pub(crate) const LOG_ENCOUNTER: &str = "log.encounter";
pub(crate) const LOG_ARRIVED: &str = "log.landmark.arrived";
pub(crate) const LOG_CROSSING_PENDING: &str = "log.crossing.pending";
pub(crate) const LOG_CROSSING_RESOLVED: &str = "log.crossing.resolved";
pub(crate) const LOG_JOURNEY_ENDED: &str = "log.journey.ended";
pub(crate) const LOG_TRAVEL_BLOCKED: &str = "log.travel-blocked";
pub(crate) const LOG_PARTY_MEMBER_LOST: &str = "log.party.lost";

// Trail geometry -----------------------------------------------------------
/// Miles between Fort Boise and Oregon City.
pub const TRAIL_MILES: i32 = 500;
/// Side length of the square map grid.
pub const MAP_SIZE: usize = 10;
/// Column the wagon is drawn in; rows carry all the logic.
pub const MAP_WAGON_COLUMN: usize = 5;
pub const MAP_FILL_SYMBOL: &str = " ⛰ ";
pub const MAP_WAGON_SYMBOL: &str = " 𖥞 ";
pub const RIVER_ROWS: [usize; 2] = [2, 6];
pub const SHOP_ROWS: [usize; 3] = [0, 4, 8];

// Tick schedule ------------------------------------------------------------
// One tick stands for five seconds of the old real-time clock:
// travel every 15s, encounter every 40s, day every 60s.
pub const TRAVEL_EVERY_TICKS: u32 = 3;
pub const ENCOUNTER_EVERY_TICKS: u32 = 8;
pub const DAY_EVERY_TICKS: u32 = 12;

// Travel -------------------------------------------------------------------
pub const FOOD_PER_LEG: i32 = 13;
pub const MILES_PER_LEG: i32 = 23;

// Termination thresholds ---------------------------------------------------
/// Food at or below this value means the party starved.
pub const STARVATION_FOOD_FLOOR: i32 = -10;

// Encounters ---------------------------------------------------------------
/// Inclusive upper bound of the encounter draw (draws are `0..=75`).
pub const ENCOUNTER_DRAW_MAX: u8 = 75;
pub const CHOLERA_HEALTH_LOSS: i32 = 30;
pub const TYPHOID_HEALTH_LOSS: i32 = 40;
pub const SNAKEBITE_HEALTH_LOSS: i32 = 40;
pub const BROKEN_ARM_HEALTH_LOSS: i32 = 20;
pub const WILD_FRUIT_HEALTH_GAIN: i32 = 10;
pub const WILD_FRUIT_FOOD_GAIN: i32 = 10;
pub const SALVAGE_FOOD_MAX: i32 = 50;
pub const SALVAGE_CLOTHING_MAX: i32 = 5;
pub const SALVAGE_AMMO_MAX: i32 = 100;

// River crossings ----------------------------------------------------------
pub const FORD_DAYS: u32 = 3;
pub const CAULK_FLOAT_DAYS: u32 = 5;
pub const FERRY_DAYS: u32 = 4;
pub const FERRY_FARE: i32 = 10;
pub const FORD_CLOTHING_LOSS: i32 = 2;

// Store --------------------------------------------------------------------
pub const OXEN_PRICE: i32 = 20;
pub const AMMO_BOX_PRICE: i32 = 3;
pub const CLOTHING_PRICE: i32 = 10;
pub const FOOD_PRICE_PER_LB: i32 = 1;
pub const BULLETS_PER_BOX: i32 = 10;
pub const MIN_OXEN_TO_DEPART: i32 = 2;

// Camp and hunting ---------------------------------------------------------
pub const REST_DAYS: u32 = 2;
pub const REST_HEALTH_GAIN: i32 = 20;
pub const HUNT_AMMO_COST: i32 = 10;
pub const HUNT_FOOD_GAIN: i32 = 100;
/// One in this many shots brings down the animal.
pub const HUNT_ODDS: u32 = 5;

// Calendar -----------------------------------------------------------------
pub const START_YEAR: i32 = 1846;
pub const START_MONTH: u32 = 3;
pub const START_DAY: u32 = 1;
