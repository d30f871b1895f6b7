mod art;
mod game;
mod prompt;
mod screens;
mod storage;
mod store;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use trail_game::{
    GameConfig, GameEngine, JourneySession, load_game_config, seed_from_entropy, share_code,
};

use prompt::Prompter;
use storage::{FileStorage, FileStorageError};

#[derive(Debug, Parser)]
#[command(name = "wagon-trail", version)]
#[command(about = "Lead a wagon party from Fort Boise to Oregon City")]
struct Args {
    /// Where the journey is saved and loaded from
    #[arg(long, default_value = "oregontrail.json")]
    save_file: PathBuf,

    /// Seed for a new journey: a number or a trail code such as OT-WAGON42
    #[arg(long, value_parser = parse_seed_arg)]
    seed: Option<u64>,

    /// JSON file overriding the game balance
    #[arg(long)]
    config: Option<PathBuf>,

    /// Delay between narrated characters, in milliseconds (0 prints instantly)
    #[arg(long, default_value_t = 0)]
    text_delay_ms: u64,

    /// Skip the story and rules prompts
    #[arg(long)]
    skip_intro: bool,
}

fn parse_seed_arg(raw: &str) -> Result<u64, String> {
    trail_game::parse_seed(raw)
        .ok_or_else(|| format!("'{raw}' is neither a number nor a trail code"))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_game_config(path)
            .with_context(|| format!("failed to load game config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    let engine = GameEngine::new(FileStorage::new(&args.save_file), config);
    log::debug!("save file: {}", engine.storage().path().display());

    let stdin = io::stdin();
    let mut p = Prompter::new(
        stdin.lock(),
        io::stdout(),
        Duration::from_millis(args.text_delay_ms),
    );
    p.show(art::TITLE)?;
    p.show(art::WAGON)?;

    let mut session = match resume(&mut p, &engine)? {
        Some(session) => session,
        None => new_journey(&mut p, &engine, &args)?,
    };
    game::play(&mut p, &engine, &mut session)
}

/// Offer to pick up a saved journey. Any failure falls back to a new one.
fn resume<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    engine: &GameEngine<FileStorage>,
) -> Result<Option<JourneySession>> {
    if !p.yes("Load previous game? y/n: ")? {
        return Ok(None);
    }
    match engine.load_session() {
        Ok(Some(session)) => {
            p.say(&format!(
                "Welcome back, {}. The trail awaits.",
                session.state().player.name
            ))?;
            Ok(Some(session))
        }
        Ok(None) => {
            p.show("This file does not exist.")?;
            Ok(None)
        }
        Err(err @ FileStorageError::Empty { .. }) => {
            p.show(&err.to_string())?;
            Ok(None)
        }
        Err(err) => {
            log::warn!("could not load save: {err}");
            p.show(&format!("{err}. Starting a new journey."))?;
            Ok(None)
        }
    }
}

fn new_journey<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    engine: &GameEngine<FileStorage>,
    args: &Args,
) -> Result<JourneySession> {
    if !args.skip_intro {
        screens::intro(p)?;
    }
    let player = screens::create_character(p)?;
    let party = screens::name_party(p)?;
    screens::leaving_tips(p, player.money)?;

    let seed = args
        .seed
        .unwrap_or_else(|| seed_from_entropy(rand::random()));
    log::info!("new journey, trail code {}", share_code(seed));
    let mut session = engine.create_session(player, party, seed);
    store::visit(p, &mut session)?;
    Ok(session)
}
