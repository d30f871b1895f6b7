use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashMap;
use trail_game::crossings::resolve_crossing;
use trail_game::encounters::{EncounterKind, EncounterTargets, roll_encounter};
use trail_game::hunt::resolve_hunt;
use trail_game::{
    CrossingMethod, CrossingOutcome, GameState, HuntAction, HuntConfig, HuntOutcome, Inventory,
    Party, Player, Profession,
};

const TRIALS: u32 = 38_000;

fn fresh_state() -> GameState {
    let player = Player::new("Ezra", Profession::Banker).unwrap();
    let party = Party::from_names(["Mary", "John", "Sarah", "Elijah"]).unwrap();
    let mut gs = GameState::new(player, party, 1, 500);
    gs.inventory = Inventory {
        oxen: 6,
        ammo: 200,
        clothing: 8,
        food: 300,
    };
    gs
}

fn rate(hits: u32) -> f64 {
    f64::from(hits) / f64::from(TRIALS)
}

#[test]
fn encounter_frequencies_follow_bucket_widths() {
    let template = fresh_state();
    let mut rng = SmallRng::seed_from_u64(0x5EED);
    let mut counts: HashMap<EncounterKind, u32> = HashMap::new();
    for _ in 0..TRIALS {
        let mut gs = template.clone();
        let mut targets = EncounterTargets {
            player: &mut gs.player,
            inventory: &mut gs.inventory,
            party: &mut gs.party,
        };
        let outcome = roll_encounter(&mut targets, &mut rng);
        *counts.entry(outcome.kind()).or_default() += 1;
    }
    for (kind, hits) in &counts {
        let expected = f64::from(kind.weight()) / 76.0;
        let observed = rate(*hits);
        assert!(
            (observed - expected).abs() < 0.015,
            "{kind:?}: observed {observed:.3}, expected {expected:.3}"
        );
    }
    assert_eq!(counts.len(), 9);
}

#[test]
fn ford_loses_supplies_about_four_times_in_ten() {
    let template = fresh_state();
    let mut rng = SmallRng::seed_from_u64(17);
    let losses = (0..TRIALS)
        .filter(|_| {
            let mut gs = template.clone();
            let report = resolve_crossing(&mut gs, CrossingMethod::Ford, &mut rng).unwrap();
            matches!(report.outcome, CrossingOutcome::SuppliesLost { .. })
        })
        .count();
    let observed = rate(u32::try_from(losses).unwrap());
    assert!((observed - 0.4).abs() < 0.02, "observed {observed:.3}");
}

#[test]
fn floated_wagon_sinks_about_half_the_time() {
    let template = fresh_state();
    let mut rng = SmallRng::seed_from_u64(23);
    let sinks = (0..TRIALS)
        .filter(|_| {
            let mut gs = template.clone();
            let report = resolve_crossing(&mut gs, CrossingMethod::CaulkFloat, &mut rng).unwrap();
            matches!(report.outcome, CrossingOutcome::Sank { .. })
        })
        .count();
    let observed = rate(u32::try_from(sinks).unwrap());
    assert!((observed - 0.5).abs() < 0.02, "observed {observed:.3}");
}

#[test]
fn one_shot_in_five_brings_home_meat() {
    let template = fresh_state();
    let cfg = HuntConfig::default();
    let mut rng = SmallRng::seed_from_u64(29);
    let hits = (0..TRIALS)
        .filter(|_| {
            let mut gs = template.clone();
            matches!(
                resolve_hunt(&mut gs, HuntAction::Shoot, &cfg, &mut rng),
                HuntOutcome::Success { .. }
            )
        })
        .count();
    let observed = rate(u32::try_from(hits).unwrap());
    assert!((observed - 0.2).abs() < 0.02, "observed {observed:.3}");
}
