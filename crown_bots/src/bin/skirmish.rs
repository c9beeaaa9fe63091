use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use crown_bots::{autopilot::Autopilot, simple::SimpleEnemy};
use crown_engine::{
    config::EngineConfig, game_engine::GameEngine, state::Phase, MAX_GAME_RECORDING_SIZE,
};
use crown_shared::scenario::Scenario;
use rand::prelude::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Play a headless game between the autopilot and the stock Enemy")]
struct Args {
    /// Random seed for reproducible games
    #[arg(long, default_value_t = 0x100)]
    seed: u64,

    /// Scenario TOML file; defaults to the built-in realm
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Engine config TOML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Player turns to play before calling it a stalemate
    #[arg(long, default_value_t = 500)]
    max_turns: u32,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("reading scenario {}", path.display()))?;
            Scenario::from_toml(&source)?
        }
        None => Scenario::crown_conquest(),
    };

    let config = match &args.config {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            EngineConfig::from_toml(&source)?
        }
        None => EngineConfig::default(),
    };

    let dice = Xoshiro256StarStar::seed_from_u64(args.seed);
    let enemy_rng = Xoshiro256StarStar::seed_from_u64(args.seed.wrapping_add(1));
    let autopilot_rng = Xoshiro256StarStar::seed_from_u64(args.seed.wrapping_add(2));

    let enemy = SimpleEnemy::new(enemy_rng);
    let mut engine = GameEngine::new(&scenario, config, Box::new(enemy), Box::new(dice))?;
    let mut autopilot = Autopilot::new(autopilot_rng);

    info!(
        seed = args.seed,
        territories = scenario.territories.len(),
        "skirmish starting"
    );

    for turn in 0..args.max_turns {
        if let Phase::GameOver(outcome) = engine.tick() {
            info!(turn, ?outcome, "skirmish finished");
            break;
        }

        if engine.state().recording().len() >= MAX_GAME_RECORDING_SIZE {
            warn!(turn, "recording limit reached");
            break;
        }

        if !autopilot.play_turn(&mut engine)? {
            warn!(turn, "autopilot has no legal action");
            break;
        }

        info!(turn, status = engine.status(), "player turn played");
    }

    engine.tick();
    if args.json {
        println!("{}", engine.snapshot().to_json()?);
    } else {
        println!("{}", engine.status());
    }

    Ok(())
}
