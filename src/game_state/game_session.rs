//! Turn state machine for one game between the player and an engine.
//!
//! The player plays step by step: a capture that can be continued keeps the
//! turn in `PlayerCapturing` until the chain is exhausted, and a man is only
//! crowned once its chain ends. Engine turns are played as a whole and
//! returned hop by hop so a presentation layer can animate them.

use log::{info, warn};

use crate::engines::engine_trait::{Engine, SearchParams};
use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::game_mode::ModeSettings;
use crate::game_state::game_status::check_game_status;
use crate::game_state::draughts_types::*;
use crate::move_generation::capture_priority::{
    continuation_moves, legal_moves_for_side, valid_moves_with_capture_priority,
};
use crate::move_generation::legal_move_apply::{execute_move, promote_if_due, relocate};
use crate::move_generation::move_generator::{PlannedMove, ValidMoves};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    PlayerToMove,
    /// The player captured with `piece` and must keep capturing with it.
    PlayerCapturing { piece: Position },
    BotToMove,
    GameOver { winner: Side },
}

/// One hop of a turn and the board right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnStep {
    pub from: Position,
    pub to: Position,
    pub captured: Option<Position>,
    pub board: Board,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineTurn {
    pub side: Side,
    pub planned: Option<PlannedMove>,
    pub steps: Vec<TurnStep>,
    pub info_lines: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    settings: ModeSettings,
    phase: GamePhase,
    turns: u32,
}

impl GameSession {
    pub fn new(settings: ModeSettings) -> Self {
        info!("new_game mode={} depth={}", settings.mode, settings.depth);
        Self {
            board: Board::new_game(),
            settings,
            phase: GamePhase::PlayerToMove,
            turns: 0,
        }
    }

    /// Session resumed from an arbitrary position. A decided position starts
    /// in `GameOver`.
    pub fn from_board(board: Board, settings: ModeSettings, to_move: Side) -> Self {
        let phase = match check_game_status(&board, settings.rules) {
            Some(winner) => GamePhase::GameOver { winner },
            None => Self::phase_for(to_move),
        };
        Self {
            board,
            settings,
            phase,
            turns: 0,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn settings(&self) -> &ModeSettings {
        &self.settings
    }

    /// Completed turns of either side since the start or the last reset.
    #[inline]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            GamePhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Side whose turn it is, `None` once the game is over.
    pub fn side_to_move(&self) -> Option<Side> {
        match self.phase {
            GamePhase::PlayerToMove | GamePhase::PlayerCapturing { .. } => Some(Side::Player),
            GamePhase::BotToMove => Some(Side::Bot),
            GamePhase::GameOver { .. } => None,
        }
    }

    pub fn reset(&mut self) {
        info!("new_game mode={} depth={}", self.settings.mode, self.settings.depth);
        self.board = Board::new_game();
        self.phase = GamePhase::PlayerToMove;
        self.turns = 0;
    }

    /// Legal moves of the player's piece on `pos`.
    ///
    /// Mid-chain only the capturing piece may move; every other square gets
    /// an empty set with `must_capture` set.
    pub fn select(&self, pos: Position) -> ValidMoves {
        match self.phase {
            GamePhase::PlayerToMove => match self.board.piece_at(pos) {
                Some(piece) if piece.side == Side::Player => {
                    valid_moves_with_capture_priority(&self.board, pos, self.settings.rules)
                }
                _ => ValidMoves::default(),
            },
            GamePhase::PlayerCapturing { piece } if piece == pos => {
                continuation_moves(&self.board, pos, self.settings.rules)
            }
            GamePhase::PlayerCapturing { .. } => ValidMoves {
                must_capture: true,
                ..ValidMoves::default()
            },
            GamePhase::BotToMove | GamePhase::GameOver { .. } => ValidMoves::default(),
        }
    }

    /// Play one player step and return the phase that follows it.
    pub fn play_player_move(&mut self, from: Position, to: Position) -> DraughtsResult<GamePhase> {
        if !matches!(
            self.phase,
            GamePhase::PlayerToMove | GamePhase::PlayerCapturing { .. }
        ) {
            return Err(DraughtsError::OutOfTurn);
        }

        let legal = self.select(from);
        let Some(chosen) = legal.find(to) else {
            return Err(DraughtsError::IllegalMove { from, to });
        };

        if !chosen.is_capture() {
            self.board = execute_move(&self.board, from, to)?;
            self.finish_turn(Side::Player);
            return Ok(self.phase);
        }

        let mut next = relocate(&self.board, from, to)?;
        let more = continuation_moves(&next, to, self.settings.rules);
        if !more.moves.is_empty() {
            self.board = next;
            self.phase = GamePhase::PlayerCapturing { piece: to };
            return Ok(self.phase);
        }

        promote_if_due(&mut next, to);
        self.board = next;
        self.finish_turn(Side::Player);
        Ok(self.phase)
    }

    /// Let `engine` play the side to move, capture chain included.
    ///
    /// An engine that finds no move loses the game.
    pub fn play_engine_turn(&mut self, engine: &mut dyn Engine) -> DraughtsResult<EngineTurn> {
        let side = match self.phase {
            GamePhase::PlayerToMove => Side::Player,
            GamePhase::BotToMove => Side::Bot,
            GamePhase::PlayerCapturing { .. } | GamePhase::GameOver { .. } => {
                return Err(DraughtsError::OutOfTurn);
            }
        };

        let params = SearchParams {
            depth: Some(self.settings.depth),
        };
        let output = engine.choose_move(&self.board, side, &params)?;

        let Some(planned) = output.best_move else {
            warn!("engine={} side={side} has no move", engine.name());
            self.end_game(side.opposite());
            return Ok(EngineTurn {
                side,
                planned: None,
                steps: Vec::new(),
                info_lines: output.info_lines,
            });
        };

        if !legal_moves_for_side(&self.board, side, self.settings.rules).contains(&planned) {
            return Err(DraughtsError::IllegalMove {
                from: planned.from,
                to: planned.to(),
            });
        }

        let steps = self.play_hops(&planned)?;
        self.finish_turn(side);

        Ok(EngineTurn {
            side,
            planned: Some(planned),
            steps,
            info_lines: output.info_lines,
        })
    }

    fn play_hops(&mut self, planned: &PlannedMove) -> DraughtsResult<Vec<TurnStep>> {
        let hops = planned.hops();
        let last = hops.len().saturating_sub(1);
        let mut steps = Vec::with_capacity(hops.len());

        for (i, (from, to)) in hops.into_iter().enumerate() {
            let mut next = relocate(&self.board, from, to)?;
            if i == last {
                promote_if_due(&mut next, to);
            }
            steps.push(TurnStep {
                from,
                to,
                captured: planned.movement.path.get(i).map(|step| step.captured),
                board: next.clone(),
            });
            self.board = next;
        }
        Ok(steps)
    }

    fn finish_turn(&mut self, side: Side) {
        self.turns += 1;
        match check_game_status(&self.board, self.settings.rules) {
            Some(winner) => self.end_game(winner),
            None => self.phase = Self::phase_for(side.opposite()),
        }
    }

    fn end_game(&mut self, winner: Side) {
        info!("game_over winner={winner} turns={}", self.turns);
        self.phase = GamePhase::GameOver { winner };
    }

    const fn phase_for(side: Side) -> GamePhase {
        match side {
            Side::Player => GamePhase::PlayerToMove,
            Side::Bot => GamePhase::BotToMove,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(ModeSettings::default())
    }
}
