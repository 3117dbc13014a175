//! Errors used throughout the draughts engine.
//!
//! `DraughtsError` is the single error type for board construction, notation
//! parsing, move execution and the game session. Query operations (move
//! generation, status checks, evaluation, search) are total and never return
//! it; an error therefore points at a caller that skipped legality checks or
//! fed in a malformed board.

use std::fmt;

use thiserror::Error;

use crate::game_state::draughts_types::Position;

/// Why a structurally invalid move was rejected by the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// A coordinate lies outside the 10x10 grid.
    OutOfBounds,
    /// A coordinate is a light square, which is never playable.
    LightSquare,
    /// There is no piece on the source square.
    EmptySource,
    /// The destination square already holds a piece.
    OccupiedDestination,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InvalidMoveReason::OutOfBounds => "square is off the board",
            InvalidMoveReason::LightSquare => "square is not a dark square",
            InvalidMoveReason::EmptySource => "no piece on the source square",
            InvalidMoveReason::OccupiedDestination => "destination square is occupied",
        };
        f.write_str(text)
    }
}

/// Unified error type for the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraughtsError {
    /// Structural precondition failure in the move executor.
    #[error("invalid move {from} -> {to}: {reason}")]
    InvalidMove {
        from: Position,
        to: Position,
        reason: InvalidMoveReason,
    },

    /// Malformed board: wrong dimensions, pieces on light squares, bad notation.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// The move is well formed but not among the legal moves of the side to move.
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Position, to: Position },

    /// The requested action does not belong to the current turn.
    #[error("action is not allowed in the current game phase")]
    OutOfTurn,

    #[error("unknown game mode '{0}'")]
    UnknownMode(String),
}

/// Result alias for fallible engine operations.
pub type DraughtsResult<T> = Result<T, DraughtsError>;
