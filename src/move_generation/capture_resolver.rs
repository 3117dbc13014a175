//! Recursive capture-chain enumeration.
//!
//! Each candidate jump is explored on a scratch board with the capturing piece
//! moved and the jumped piece removed. The set of squares already stood on is
//! a `Copy` bitset, so every branch extends its own copy and sibling branches
//! never see each other's squares. The moving man is not promoted mid-chain.

use crate::game_state::draughts_rules::RuleSet;
use crate::game_state::draughts_types::*;
use crate::move_generation::legal_move_shared::{move_directions, Jump};
use crate::move_generation::legal_moves_king::long_range_jumps;
use crate::move_generation::legal_moves_man::man_jump;
use crate::move_generation::move_generator::{CaptureStep, Move};

/// Squares a chain has already passed through, one bit per square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitedSquares(u128);

impl VisitedSquares {
    #[inline]
    fn bit(pos: Position) -> u128 {
        1u128 << (pos.row * BOARD_SIZE + pos.col)
    }

    #[inline]
    pub fn contains(self, pos: Position) -> bool {
        self.0 & Self::bit(pos) != 0
    }

    #[inline]
    pub fn with(self, pos: Position) -> Self {
        Self(self.0 | Self::bit(pos))
    }
}

/// All capture chains available to the piece on `from`.
///
/// One entry per first jump (direction order, then distance), each carrying
/// the length of the longest chain that starts with it. Empty square or a
/// piece without captures yields an empty list.
pub fn find_all_captures(board: &Board, from: Position, rules: RuleSet) -> Vec<Move> {
    if !from.is_playable() {
        return Vec::new();
    }
    match board.piece_at(from) {
        Some(piece) => resolve_captures(board, from, piece, VisitedSquares::default(), rules),
        None => Vec::new(),
    }
}

fn resolve_captures(
    board: &Board,
    from: Position,
    piece: Piece,
    visited: VisitedSquares,
    rules: RuleSet,
) -> Vec<Move> {
    if visited.contains(from) {
        return Vec::new();
    }
    let visited = visited.with(from);
    let long_range = piece.is_king() || rules.flying_men;

    let mut captures = Vec::new();
    for &direction in move_directions(piece) {
        let jumps = if long_range {
            long_range_jumps(board, from, piece.side, direction)
        } else {
            man_jump(board, from, piece.side, direction).into_iter().collect()
        };

        for jump in jumps {
            let scratch = board.with_jump(from, jump.landing, Some(jump.captured));
            let continuations = resolve_captures(&scratch, jump.landing, piece, visited, rules);
            captures.push(capture_move(jump, &continuations));
        }
    }
    captures
}

/// First jump plus the best continuation; the earliest chain wins ties.
fn capture_move(jump: Jump, continuations: &[Move]) -> Move {
    let mut best: Option<&Move> = None;
    for candidate in continuations {
        if best.map_or(true, |b| candidate.captured_pieces > b.captured_pieces) {
            best = Some(candidate);
        }
    }

    let step = CaptureStep {
        to: jump.landing,
        captured: jump.captured,
    };
    let mut path = Vec::with_capacity(1 + best.map_or(0, |b| b.path.len()));
    path.push(step);
    if let Some(best) = best {
        path.extend(best.path.iter().copied());
    }

    Move {
        to: jump.landing,
        captured: Some(jump.captured),
        captured_pieces: 1 + best.map_or(0, |b| b.captured_pieces),
        path,
    }
}

/// Largest chain length in `captures`, or 0.
#[inline]
pub fn max_captured(captures: &[Move]) -> u8 {
    captures.iter().map(|c| c.captured_pieces).max().unwrap_or(0)
}
