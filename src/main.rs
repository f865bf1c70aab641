//! Five Rings headless driver
//!
//! Builds a board and plays a seeded sequence of random legal rotations.
//! Useful as a soak run and for eyeballing rule behaviour with `RUST_LOG=debug`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;

use five_rings::Session;
use five_rings::Settings;
use five_rings::rules::{Move, legal_moves};

/// Five Rings - play seeded random rotations on a fresh board
#[derive(Parser, Debug)]
#[command(name = "five-rings")]
#[command(version)]
#[command(about = "Headless Five Rings driver", long_about = None)]
struct Cli {
    /// Settings file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board scale, overrides the settings file
    #[arg(long)]
    scale: Option<f32>,

    /// Seed for move selection
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Number of rotations to play
    #[arg(long, default_value_t = 200)]
    moves: u32,

    /// Print the final state as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// An explicit scale wins over the config file
    fn settings(&self) -> five_rings::Result<Settings> {
        match (self.scale, &self.config) {
            (Some(scale), _) => Ok(Settings::with_scale(scale)),
            (None, Some(path)) => Settings::load(path),
            (None, None) => Ok(Settings::default()),
        }
    }
}

fn play(session: &mut Session, seed: u64, moves: u32) -> u32 {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut played = 0;

    for _ in 0..moves {
        let candidates: Vec<Move> = legal_moves(session.board(), session.state()).collect();
        let Some(&mv) = candidates.choose(&mut rng) else {
            log::warn!("No legal moves left after {} rotations", played);
            break;
        };
        let mover = session.state().current_player;
        let outcome = session.rotate(mv.ring, mv.direction);
        for quad in outcome.fired() {
            log::info!(
                "Move {}: {} rotated ring {} {:?}, quad {} scored for {}",
                played + 1,
                mover.as_str(),
                mv.ring,
                mv.direction,
                quad.index,
                quad.player.as_str()
            );
        }
        played += 1;
    }

    played
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = match Session::new(&settings) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Five Rings: scale {}, seed {}, {} moves",
        settings.board_scale,
        cli.seed,
        cli.moves
    );

    let played = play(&mut session, cli.seed, cli.moves);
    let state = session.state();

    if cli.json {
        match serde_json::to_string_pretty(state) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("Rotations played: {played}");
        println!("White: {}  Black: {}", state.score_white, state.score_black);
        println!("To move: {}", state.current_player.as_str());
        println!("Empty points: {}/{}", state.empty_points(), state.occupancy.len());
    }

    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The rules engine is embedded by the web front end; there is no wasm binary
}
