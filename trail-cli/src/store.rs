//! Otto's Outpost, the interactive store.
use anyhow::Result;
use std::io::{BufRead, Write};
use trail_game::{JourneySession, StoreItem};

use crate::prompt::Prompter;

fn store_menu(session: &JourneySession) -> String {
    let prices = session.config().prices;
    format!(
        "
    ------------------------------------------------------------
    | Welcome to Otto's Outpost! What can I get for you today? |
    ------------------------------------------------------------

    1. Oxen ${}
    2. Ammo ${}/box, 10 bullets/box
    3. Clothes ${}
    4. Food ${}/lb
    5. Exit store
    ",
        prices.oxen, prices.ammo_box, prices.clothes, prices.food_lb
    )
}

/// Shop until the wagon is ready to leave or the purse is empty.
pub fn visit<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    session: &mut JourneySession,
) -> Result<()> {
    loop {
        let money = session.state().player.money;
        if money <= 0 {
            p.say("You have spent every last dollar.")?;
            return Ok(());
        }
        p.show(&format!("You have ${money}"))?;
        p.show(&store_menu(session))?;
        let choice = p.menu("Make a selection\n>>> ", "Please make a valid selection", 5)?;
        let Some(item) = StoreItem::from_menu(choice) else {
            match session.ready_to_depart() {
                Ok(()) => return Ok(()),
                Err(err) => {
                    p.say(&err.to_string())?;
                    continue;
                }
            }
        };
        let quantity = p.choose(
            "How many would you like to purchase?: ",
            "Please enter a whole number.",
            |answer| answer.parse::<i32>().ok(),
        )?;
        match session.purchase(item, quantity) {
            Ok(receipt) => {
                log::debug!("receipt: {receipt:?}");
                p.show(&format!(
                    "You bought {} {} for ${}.",
                    receipt.quantity,
                    receipt.item.label().to_lowercase(),
                    receipt.cost
                ))?;
            }
            Err(err) => p.say(&err.to_string())?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;
    use trail_game::{GameConfig, Party, Player, Profession};

    fn session() -> JourneySession {
        let player = Player::new("Ezra", Profession::Farmer).unwrap();
        let party = Party::from_names(["A", "B", "C", "D"]).unwrap();
        JourneySession::new(player, party, 3, GameConfig::default())
    }

    #[test]
    fn cannot_leave_without_oxen_and_food() {
        let script = "5\n1\n2\n5\n4\n-3\n4\nlots\n100\n5\n";
        let mut p = Prompter::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            Duration::ZERO,
        );
        let mut s = session();
        visit(&mut p, &mut s).unwrap();
        assert_eq!(s.state().inventory.oxen, 2);
        assert_eq!(s.state().inventory.food, 100);
        assert_eq!(s.state().player.money, 400 - 40 - 100);
    }

    #[test]
    fn overspending_is_refused() {
        let script = "1\n21\n1\n2\n4\n1\n5\n";
        let mut p = Prompter::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            Duration::ZERO,
        );
        let mut s = session();
        visit(&mut p, &mut s).unwrap();
        assert_eq!(s.state().inventory.oxen, 2);
        assert_eq!(s.state().player.money, 400 - 40 - 1);
    }
}
