//! Head-to-head engine match harness for local testing.
//!
//! Runs a player-side engine against a bot-side engine without any
//! presentation layer, with an optional seeded random opening.

use std::time::Instant;

use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::engines::engine_trait::Engine;
use crate::errors::DraughtsResult;
use crate::game_state::draughts_rules::RuleSet;
use crate::game_state::draughts_types::*;
use crate::game_state::game_mode::ModeSettings;
use crate::game_state::game_session::{GamePhase, GameSession};
use crate::move_generation::capture_priority::legal_moves_for_side;
use crate::move_generation::legal_move_apply::apply_planned_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    PlayerWin,
    BotWin,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub settings: ModeSettings,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 2,
            opening_max_plies: 6,
            settings: ModeSettings::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub opening_plies: u8,
    pub played_plies: u16,
    pub player_total_time_ns: u128,
    pub bot_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 4,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player_wins: u16,
    pub bot_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<MatchOutcome>,
    pub total_plies: u32,
    pub player_total_time_ns: u128,
    pub bot_total_time_ns: u128,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player_wins={} bot_wins={} draws={} avg_plies={:.1} player_ms={:.3} bot_ms={:.3}",
            self.games,
            self.player_wins,
            self.bot_wins,
            self.draws,
            if self.games == 0 {
                0.0
            } else {
                f64::from(self.total_plies) / f64::from(self.games)
            },
            self.player_total_time_ns as f64 / 1_000_000.0,
            self.bot_total_time_ns as f64 / 1_000_000.0
        )
    }
}

/// Play one seeded match from the initial board. The player side moves first.
pub fn play_engine_match(
    player_engine: &mut dyn Engine,
    bot_engine: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> DraughtsResult<MatchResult> {
    player_engine.new_game();
    bot_engine.new_game();

    let (board, to_move, opening_plies) = apply_seeded_random_opening(
        &Board::new_game(),
        config.settings.rules,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;
    let mut session = GameSession::from_board(board, config.settings, to_move);

    let mut played_plies = 0u16;
    let mut player_total_time_ns = 0u128;
    let mut bot_total_time_ns = 0u128;

    while played_plies < config.max_plies {
        let mover = match session.phase() {
            GamePhase::GameOver { .. } => break,
            GamePhase::BotToMove => Side::Bot,
            GamePhase::PlayerToMove | GamePhase::PlayerCapturing { .. } => Side::Player,
        };

        let started = Instant::now();
        match mover {
            Side::Player => {
                session.play_engine_turn(player_engine)?;
                player_total_time_ns += started.elapsed().as_nanos();
            }
            Side::Bot => {
                session.play_engine_turn(bot_engine)?;
                bot_total_time_ns += started.elapsed().as_nanos();
            }
        }
        played_plies += 1;
    }

    let outcome = match session.winner() {
        Some(Side::Player) => MatchOutcome::PlayerWin,
        Some(Side::Bot) => MatchOutcome::BotWin,
        None => MatchOutcome::DrawMaxPlies,
    };

    Ok(MatchResult {
        outcome,
        final_board: session.board().clone(),
        opening_plies,
        played_plies,
        player_total_time_ns,
        bot_total_time_ns,
    })
}

/// Play a series of matches and aggregate the results.
///
/// Game `i` uses seed `base_seed + i`, so a series is reproducible as long
/// as the engines are.
pub fn play_engine_match_series<F1, F2>(
    player_factory: F1,
    bot_factory: F2,
    config: &MatchSeriesConfig,
) -> DraughtsResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for i in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player = player_factory();
        let mut bot = bot_factory();
        if config.verbose {
            println!(
                "[series] game {}/{} seed={} player={} bot={}",
                i + 1,
                config.games,
                seed,
                player.name(),
                bot.name()
            );
        }

        let result = play_engine_match(player.as_mut(), bot.as_mut(), seed, &config.per_game)?;
        match result.outcome {
            MatchOutcome::PlayerWin => stats.player_wins += 1,
            MatchOutcome::BotWin => stats.bot_wins += 1,
            MatchOutcome::DrawMaxPlies => stats.draws += 1,
        }
        stats.outcomes.push(result.outcome);
        stats.total_plies += u32::from(result.played_plies);
        stats.player_total_time_ns = stats
            .player_total_time_ns
            .saturating_add(result.player_total_time_ns);
        stats.bot_total_time_ns = stats.bot_total_time_ns.saturating_add(result.bot_total_time_ns);

        info!(
            "series game={} seed={} outcome={:?} plies={}",
            i + 1,
            seed,
            result.outcome,
            result.played_plies
        );
        if config.verbose {
            println!(
                "[series] game {}/{} result={:?} player_wins={} bot_wins={} draws={}\n",
                i + 1,
                config.games,
                result.outcome,
                stats.player_wins,
                stats.bot_wins,
                stats.draws
            );
        }
    }

    Ok(stats)
}

/// Play a seeded number of random turns, player first. Returns the board, the
/// side to move next and the number of plies actually played.
fn apply_seeded_random_opening(
    initial: &Board,
    rules: RuleSet,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> DraughtsResult<(Board, Side, u8)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = initial.clone();
    let mut side = Side::Player;

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    let mut played = 0u8;
    for _ in 0..target_plies {
        let legal_moves = legal_moves_for_side(&board, side, rules);
        if legal_moves.is_empty() {
            break;
        }
        let idx = rng.random_range(0..legal_moves.len());
        board = apply_planned_move(&board, &legal_moves[idx])?;
        side = side.opposite();
        played += 1;
    }

    Ok((board, side, played))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::game_mode::{Difficulty, GameMode};

    fn quick_config() -> MatchConfig {
        MatchConfig {
            max_plies: 30,
            settings: ModeSettings::new(GameMode::Classic, Difficulty::Easy),
            ..MatchConfig::default()
        }
    }

    #[test]
    fn random_opening_is_reproducible() {
        let rules = RuleSet::classic();
        let a = apply_seeded_random_opening(&Board::new_game(), rules, 11, 2, 6).expect("opening");
        let b = apply_seeded_random_opening(&Board::new_game(), rules, 11, 2, 6).expect("opening");
        assert_eq!(a, b);
        assert!((2..=6).contains(&a.2));
        let expected_side = if a.2 % 2 == 0 { Side::Player } else { Side::Bot };
        assert_eq!(a.1, expected_side);
    }

    #[test]
    fn match_runs_random_vs_minimax() {
        let mut player = RandomEngine::seeded(RuleSet::classic(), 5);
        let mut bot = MinimaxEngine::with_depth(RuleSet::classic(), 2);
        let config = quick_config();
        let result = play_engine_match(&mut player, &mut bot, 42, &config).expect("match runs");

        assert!(result.played_plies > 0);
        assert!(result.played_plies <= config.max_plies);
        if result.outcome == MatchOutcome::DrawMaxPlies {
            assert_eq!(result.played_plies, config.max_plies);
        }
    }

    #[test]
    fn series_counts_every_game() {
        let config = MatchSeriesConfig {
            games: 3,
            base_seed: 777,
            per_game: quick_config(),
            verbose: false,
        };
        let stats = play_engine_match_series(
            || Box::new(RandomEngine::seeded(RuleSet::classic(), 1)),
            || Box::new(MinimaxEngine::with_depth(RuleSet::classic(), 1)),
            &config,
        )
        .expect("series runs");

        assert_eq!(stats.games, 3);
        assert_eq!(stats.outcomes.len(), 3);
        assert_eq!(stats.player_wins + stats.bot_wins + stats.draws, 3);
        assert!(stats.report().starts_with("games=3 "));
    }
}
