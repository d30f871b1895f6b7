//! Text screens: intro, character creation, header, and the result screen.
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use trail_game::{
    GameState, Landmark, PARTY_SIZE, Party, Player, Profession, ResultSummary,
    player::validate_name,
};

use crate::art;
use crate::prompt::{DIVIDER, Prompter};

const STORY: &str = "
    Get ready to complete the last leg of the trail to Oregon. As the wagon leader,
    it is up to you to get your party from Fort Boise to Oregon City. This trek is
    about 500 miles of plains, rivers, and mountains in a covered wagon. Beware of
    thieves, cholera, snakebites, and other potential fatalities. If you can make it
    all the way, acres of free, fertile farmland are yours to claim!
    Your adventure awaits!
    ";

const RULES: &str = "
    Choose your profession: banker, carpenter, or farmer. Each starts with a
    different amount of money and a different difficulty. If you run low on
    supplies, you can hunt for food or stop into a shop if there's one nearby.
    How will you cross the rivers? You can ford the river or caulk your wagon
    and float across, hoping you and your wagon aren't swallowed alive! If you
    have money, you can take a ferry. Resting restores health. Good luck, travelers!
    ";

pub fn intro<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<()> {
    if p.yes("View the story? (y/n): ")? {
        p.say(STORY)?;
        p.show(DIVIDER)?;
    }
    if p.yes("View the rules? (y/n): ")? {
        p.say(RULES)?;
        p.show(DIVIDER)?;
    }
    Ok(())
}

fn profession_menu() -> String {
    let mut menu = String::from(
        "\n    Many kinds of people made the journey to Oregon.\n\n    You may:\n\n",
    );
    for (idx, profession) in Profession::ALL.iter().enumerate() {
        let start = profession.start();
        menu.push_str(&format!(
            "    {}. Be a {} from {}\n        - {}\n        - {} HP\n        - ${}\n",
            idx + 1,
            profession.as_str(),
            profession.hometown(),
            profession.difficulty(),
            start.health,
            start.money,
        ));
    }
    menu.push_str("\n    What is your choice? (1, 2, or 3)\n");
    menu
}

pub fn create_character<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<Player> {
    p.show(&profession_menu())?;
    let profession = p.choose(">>> ", "Please make a valid selection.", |answer| {
        answer.parse::<u8>().ok().and_then(Profession::from_menu)
    })?;
    p.show(art::profession(profession))?;
    let player = p.choose(
        "What is the first name of the wagon leader?: ",
        "The wagon leader needs a name.",
        |answer| Player::new(answer, profession).ok(),
    )?;
    log::info!("{} the {} sets out", player.name, profession.as_str());
    Ok(player)
}

pub fn name_party<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<Party> {
    p.show(&format!(
        "What are the first names of the {PARTY_SIZE} other members in your party? Enter one at a time."
    ))?;
    let mut names = Vec::with_capacity(PARTY_SIZE);
    for _ in 0..PARTY_SIZE {
        let name = p.choose(">>> ", "Enter party member's name", |answer| {
            validate_name(answer).ok()
        })?;
        names.push(name);
    }
    Ok(Party::from_names(names)?)
}

pub fn leaving_tips<R: BufRead, W: Write>(p: &mut Prompter<R, W>, money: i32) -> Result<()> {
    p.show(DIVIDER)?;
    p.say(&format!(
        "
    Before leaving Fort Boise, you should buy supplies. You have ${money} in cash
    but you don't have to spend it all now.
    You will need:
    - a team of oxen to pull your wagon (at least 6 is recommended)
    - clothing for both summer and winter (1-2 outfits per person)
    - plenty of food for the trip (50lbs per person is recommended)
    - ammunition for your rifles
    "
    ))?;
    p.show(DIVIDER)
}

#[must_use]
pub fn header(gs: &GameState) -> String {
    let rule = "-=x=-=x=-=x=-=x=-=x=-=x=-=x=-=x=-=x=-=x=-=x=-=x=-=x=-=x=-=x=-".yellow();
    format!(
        "
    {rule}
                        {date}

        HEALTH         MILES REMAINING        FOOD REMAINING
         {health:<14} {miles:<22} {food}

                press M at any time to view menu
    {rule}
    ",
        date = gs.date.to_string().bold(),
        health = gs.player.health,
        miles = format!("{} miles", gs.miles_remaining),
        food = format!("{} lbs", gs.inventory.food),
    )
}

#[must_use]
pub fn inventory(gs: &GameState) -> String {
    let inv = gs.inventory;
    format!(
        "
    OXEN: {}
    AMMO: {} bullets
    CLOTHES: {} outfits
    FOOD: {} lbs
    MONEY: ${}
    ",
        inv.oxen, inv.ammo, inv.clothing, inv.food, gs.player.money
    )
}

/// The trail grid between its two ends.
#[must_use]
pub fn route_map(gs: &GameState) -> String {
    let start = art::landmark(Landmark::FortBoise).unwrap_or("Fort Boise\n");
    let end = art::landmark(Landmark::OregonCity).unwrap_or("Oregon City\n");
    format!("{start}\n{}\n{end}", gs.map)
}

#[must_use]
pub fn party(gs: &GameState) -> String {
    let mut out = String::from("Party Members:\n");
    for member in gs.party.members() {
        out.push_str(&format!("- {member}\n"));
    }
    out
}

pub fn result_screen<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    summary: &ResultSummary,
) -> Result<()> {
    p.show(art::ending(summary.ending))?;
    p.say(&summary.epilogue)?;
    p.show(DIVIDER)?;
    let headline = if summary.ending.is_victory() {
        summary.headline.green().bold()
    } else {
        summary.headline.red().bold()
    };
    p.show(&format!("    {headline}"))?;
    p.show(&format!(
        "    {} the {}: {} days on the trail, {} miles traveled, {} miles to go",
        summary.leader,
        summary.profession,
        summary.days,
        summary.miles_traveled,
        summary.miles_remaining
    ))?;
    p.show(&format!(
        "    Encounters: {}   Rivers crossed: {}   Money left: ${}",
        summary.encounters, summary.crossings, summary.money
    ))?;
    if !summary.survivors.is_empty() {
        p.show(&format!("    Survivors: {}", summary.survivors.join(", ")))?;
    }
    if !summary.lost.is_empty() {
        p.show(&format!("    Lost on the trail: {}", summary.lost.join(", ")))?;
    }
    p.show(&format!("    Trail code: {}", summary.share_code.cyan()))?;
    p.show(DIVIDER)
}
