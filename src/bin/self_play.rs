//! Engine-vs-engine self-play runner.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `cargo run --release --bin self_play -- --games 10 --mode turbo --seed 7 --verbose`
//!
//! Set `RUST_LOG=debug` for per-move logging.

use std::process::ExitCode;

use corgi_draughts::engines::engine_minimax::MinimaxEngine;
use corgi_draughts::engines::engine_random::RandomEngine;
use corgi_draughts::engines::engine_trait::Engine;
use corgi_draughts::game_state::game_mode::{Difficulty, GameMode, ModeSettings};
use corgi_draughts::utils::match_harness::{
    play_engine_match, play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use corgi_draughts::utils::render_board::render_board;

struct Args {
    games: u16,
    mode: GameMode,
    seed: u64,
    verbose: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        games: 4,
        mode: GameMode::Classic,
        seed: 1234,
        verbose: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--verbose" | "-v" => args.verbose = true,
            "--games" => args.games = parse_value(&flag, iter.next())?,
            "--seed" => args.seed = parse_value(&flag, iter.next())?,
            "--mode" => {
                let value = iter.next().ok_or("--mode needs a value")?;
                args.mode = value.parse().map_err(|e| format!("{e}"))?;
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }
    Ok(args)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map_err(|_| format!("invalid value '{value}' for {flag}"))
}

fn run(args: Args) -> Result<(), String> {
    let settings = ModeSettings::new(args.mode, Difficulty::Medium);
    let rules = settings.rules;
    let per_game = MatchConfig {
        settings,
        ..MatchConfig::default()
    };

    // Showcase game with the final position drawn.
    let mut player = RandomEngine::seeded(rules, args.seed);
    let mut bot = MinimaxEngine::with_depth(rules, settings.depth);
    let showcase =
        play_engine_match(&mut player, &mut bot, args.seed, &per_game).map_err(|e| e.to_string())?;
    println!(
        "mode={} depth={} outcome={:?} plies={}",
        settings.mode, settings.depth, showcase.outcome, showcase.played_plies
    );
    println!("{}\n", render_board(&showcase.final_board));

    let base_seed = args.seed;
    let stats = play_engine_match_series(
        move || Box::new(RandomEngine::seeded(rules, base_seed)) as Box<dyn Engine>,
        move || Box::new(MinimaxEngine::with_depth(rules, settings.depth)) as Box<dyn Engine>,
        &MatchSeriesConfig {
            games: args.games,
            base_seed,
            per_game,
            verbose: args.verbose,
        },
    )
    .map_err(|e| e.to_string())?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let result = parse_args().and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("self_play: {err}");
            ExitCode::FAILURE
        }
    }
}
