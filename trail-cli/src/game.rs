//! The journey loop as the player sees it: legs, the menu, and river crossings.
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use trail_game::hunt::hunt_block_reason;
use trail_game::{
    CrossingError, CrossingMethod, GameEngine, GameStorage, HuntAction, HuntOutcome,
    JourneySession, Landmark, LegReport,
};

use crate::art;
use crate::prompt::{DIVIDER, Prompter};
use crate::screens;
use crate::store;

const MENU: &str = "
    1. Continue on trail
    2. Check inventory
    3. Wagon party
    4. Display map
    5. Hunt for food
    6. Rest
    7. Shop
    8. View progress
    9. Save game and exit
    ";

/// Where the menu left things.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuExit {
    BackOnTrail,
    Saved,
}

/// Play a journey until it ends or the player saves and quits.
pub fn play<S, R, W>(
    p: &mut Prompter<R, W>,
    engine: &GameEngine<S>,
    session: &mut JourneySession,
) -> Result<()>
where
    S: GameStorage,
    R: BufRead,
    W: Write,
{
    while !session.is_over() {
        if session.state().pending_crossing {
            river(p, session)?;
            continue;
        }
        let report = session.advance_leg()?;
        show_leg(p, &report)?;
        if session.is_over() || report.crossing_pending() {
            continue;
        }
        p.show(&screens::header(session.state()))?;
        if !p.line("Press M to view menu: ")?.eq_ignore_ascii_case("m") {
            continue;
        }
        if menu(p, engine, session)? == MenuExit::Saved {
            return Ok(());
        }
    }
    finish(p, engine, session)
}

fn show_leg<R: BufRead, W: Write>(p: &mut Prompter<R, W>, report: &LegReport) -> Result<()> {
    log::debug!(
        "leg of {} ticks, {} days passed",
        report.ticks.len(),
        report.days_passed()
    );
    for encounter in report.encounters() {
        if encounter.casualty().is_some() {
            p.show(art::GRAVESTONE)?;
        }
        p.say(&encounter.to_string())?;
    }
    for landmark in report.arrivals() {
        match landmark {
            Landmark::TheDalles | Landmark::FortWallaWalla => {
                if let Some(picture) = art::landmark(landmark) {
                    p.show(picture)?;
                }
                p.say(&format!("Welcome to {}. The shop is open.", landmark.name()))?;
            }
            Landmark::OregonCity => {
                if let Some(picture) = art::landmark(landmark) {
                    p.show(picture)?;
                }
                p.say("Oregon City is in sight!")?;
            }
            Landmark::FortBoise | Landmark::River => {}
        }
    }
    Ok(())
}

fn menu<S, R, W>(
    p: &mut Prompter<R, W>,
    engine: &GameEngine<S>,
    session: &mut JourneySession,
) -> Result<MenuExit>
where
    S: GameStorage,
    R: BufRead,
    W: Write,
{
    loop {
        p.show(MENU)?;
        let choice = p.menu(">>> ", "Please enter a valid selection", 9)?;
        match choice {
            1 => {
                if let Some((encounter, _)) = session.continue_on_trail() {
                    if encounter.casualty().is_some() {
                        p.show(art::GRAVESTONE)?;
                    }
                    p.say(&encounter.to_string())?;
                }
                return Ok(MenuExit::BackOnTrail);
            }
            2 => p.show(&screens::inventory(session.state()))?,
            3 => p.show(&screens::party(session.state()))?,
            4 => p.show(&screens::route_map(session.state()))?,
            5 => {
                hunt(p, session)?;
                return Ok(MenuExit::BackOnTrail);
            }
            6 => {
                let outcome = session.rest();
                p.say(&outcome.message())?;
                return Ok(MenuExit::BackOnTrail);
            }
            7 if session.state().map.shop_open() => {
                store::visit(p, session)?;
                return Ok(MenuExit::BackOnTrail);
            }
            7 => p.show("There is no shop nearby.")?,
            8 => return Ok(MenuExit::BackOnTrail),
            _ => {
                engine
                    .save_session(session)
                    .context("could not save the journey")?;
                p.say("Your progress has been saved.")?;
                return Ok(MenuExit::Saved);
            }
        }
    }
}

fn hunt<R: BufRead, W: Write>(p: &mut Prompter<R, W>, session: &mut JourneySession) -> Result<()> {
    if let Some(reason) = hunt_block_reason(session.state(), &session.config().hunt) {
        log::warn!("hunt blocked: {reason:?}");
        p.say(&HuntOutcome::Blocked(reason).message())?;
        return Ok(());
    }
    p.show(art::DEER)?;
    let action = p.choose(
        "Press 'S' to shoot or 'X' to escape\n>>> ",
        "Please enter a valid selection",
        |answer| answer.parse::<HuntAction>().ok(),
    )?;
    let outcome = session.hunt(action);
    p.say(&outcome.message())
}

fn river<R: BufRead, W: Write>(p: &mut Prompter<R, W>, session: &mut JourneySession) -> Result<()> {
    p.show(art::RIVER)?;
    p.say("You have come to a river. How would you like to cross?")?;
    let mut options = String::new();
    for (idx, method) in CrossingMethod::ALL.iter().enumerate() {
        options.push_str(&format!(
            "    {}. {} ({} days)\n",
            idx + 1,
            method.label(),
            method.days()
        ));
    }
    loop {
        p.show(&options)?;
        let choice = p.menu(">>> ", "Please enter a valid selection", 3)?;
        let Some(method) = CrossingMethod::from_menu(choice) else {
            continue;
        };
        match session.cross_river(method) {
            Ok(report) => {
                if report.fare > 0 {
                    p.show(&format!("You paid ${} for the ferry.", report.fare))?;
                }
                p.say(&report.outcome.to_string())?;
                p.show(&format!("The crossing took {} days.", report.days))?;
                return p.show(DIVIDER);
            }
            Err(err @ CrossingError::FerryUnaffordable { .. }) => p.say(&err.to_string())?,
            Err(CrossingError::NoRiver) => {
                bail!("no river to cross at row {}", session.state().map.row())
            }
        }
    }
}

fn finish<S, R, W>(
    p: &mut Prompter<R, W>,
    engine: &GameEngine<S>,
    session: &JourneySession,
) -> Result<()>
where
    S: GameStorage,
    R: BufRead,
    W: Write,
{
    let summary = session.result_summary()?;
    screens::result_screen(p, &summary)?;
    engine
        .delete_save()
        .context("could not remove the finished journey's save")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::io::Cursor;
    use std::time::Duration;
    use trail_game::{GameConfig, GameState, Party, Player, Profession, StoreItem};

    #[derive(Default)]
    struct MemoryStorage {
        save: RefCell<Option<GameState>>,
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

    fn outfitted(engine: &GameEngine<MemoryStorage>) -> JourneySession {
        let player = Player::new("Ezra", Profession::Banker).unwrap();
        let party = Party::from_names(["Mary", "John", "Sarah", "Elijah"]).unwrap();
        let mut session = engine.create_session(player, party, 7);
        session.purchase(StoreItem::Oxen, 6).unwrap();
        session.purchase(StoreItem::Clothes, 5).unwrap();
        session.purchase(StoreItem::FoodLb, 500).unwrap();
        session
    }

    fn prompter(input: String) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.into_bytes()), Vec::new(), Duration::ZERO)
    }

    #[test]
    fn saving_from_the_menu_stops_the_journey() {
        let engine = GameEngine::new(MemoryStorage::default(), GameConfig::default());
        let mut session = outfitted(&engine);
        let mut p = prompter("m\n2\n4\n9\n".to_string());
        play(&mut p, &engine, &mut session).unwrap();
        let saved = engine.load_session().unwrap().expect("saved");
        assert_eq!(saved.state(), session.state());
        assert!(!session.is_over());
        let out = String::from_utf8(p.output().clone()).unwrap();
        assert!(out.contains("Your progress has been saved."));
        assert!(out.contains("OXEN: 6"));
        let map_at = out.find(&session.state().map.to_string()).unwrap();
        assert!(out[..map_at].contains("FORT BOISE"));
        assert!(out[map_at..].contains("OREGON CITY"));
    }

    #[test]
    fn pressing_on_reaches_an_ending_and_clears_the_save() {
        let engine = GameEngine::new(MemoryStorage::default(), GameConfig::default());
        let mut session = outfitted(&engine);
        engine.save_session(&session).unwrap();
        let mut p = prompter("3\n".repeat(200));
        play(&mut p, &engine, &mut session).unwrap();
        assert!(session.is_over());
        assert!(session.state().stats.crossings <= 2);
        assert!(engine.load_session().unwrap().is_none());
        let out = String::from_utf8(p.output().clone()).unwrap();
        assert!(out.contains("Trail code"));
    }
}
