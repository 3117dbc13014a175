//! Move execution.
//!
//! `execute_move` guards only the structural preconditions (in-bounds dark
//! squares, occupied source, empty destination). Whether the move is legal
//! under the capture rules is decided by the generators before it gets here.

use log::debug;

use crate::errors::{DraughtsError, DraughtsResult, InvalidMoveReason};
use crate::game_state::draughts_types::*;
use crate::move_generation::move_generator::PlannedMove;

/// Move a piece from `from` to `to`, remove the piece it jumped (if any) and
/// promote a man that lands on its far edge.
pub fn execute_move(board: &Board, from: Position, to: Position) -> DraughtsResult<Board> {
    let mut next = relocate(board, from, to)?;
    promote_if_due(&mut next, to);
    debug!("execute_move from={from} to={to}");
    Ok(next)
}

/// Apply a whole turn: a quiet step, or a capture chain hop by hop.
///
/// Chains are played on scratch copies without promotion; a man is only
/// crowned if the chain ends on its promotion row.
pub fn apply_planned_move(board: &Board, planned: &PlannedMove) -> DraughtsResult<Board> {
    if !planned.is_capture() {
        return execute_move(board, planned.from, planned.to());
    }

    let mut next = board.clone();
    for (from, to) in planned.hops() {
        next = relocate(&next, from, to)?;
    }
    let landing = planned.final_square();
    promote_if_due(&mut next, landing);
    debug!(
        "apply_planned_move from={} to={} captured={}",
        planned.from, landing, planned.movement.captured_pieces
    );
    Ok(next)
}

/// Validated relocation with capture removal but no promotion.
pub(crate) fn relocate(board: &Board, from: Position, to: Position) -> DraughtsResult<Board> {
    validate_move(board, from, to)?;
    let captured = jumped_square(board, from, to);
    Ok(board.with_jump(from, to, captured))
}

/// Crown a man standing on its promotion row. Kings and empty squares are left alone.
pub(crate) fn promote_if_due(board: &mut Board, at: Position) {
    if let Some(piece) = board.piece_at(at) {
        if !piece.is_king() && at.row == piece.side.promotion_row() {
            board.set(at, Some(piece.promoted()));
        }
    }
}

fn validate_move(board: &Board, from: Position, to: Position) -> DraughtsResult<()> {
    for square in [from, to] {
        if !square.is_on_board() {
            return Err(invalid(from, to, InvalidMoveReason::OutOfBounds));
        }
        if !square.is_playable() {
            return Err(invalid(from, to, InvalidMoveReason::LightSquare));
        }
    }
    if board.is_empty_at(from) {
        return Err(invalid(from, to, InvalidMoveReason::EmptySource));
    }
    if !board.is_empty_at(to) {
        return Err(invalid(from, to, InvalidMoveReason::OccupiedDestination));
    }
    Ok(())
}

/// Square of the piece removed by this move, if any.
///
/// A one-square step takes nothing. A longer move takes the first occupied
/// square on the line: the midpoint for a man's jump, the single passed
/// piece for a king or a flying man.
fn jumped_square(board: &Board, from: Position, to: Position) -> Option<Position> {
    let d_row = to.row as isize - from.row as isize;
    let d_col = to.col as isize - from.col as isize;
    if d_row.abs() <= 1 && d_col.abs() <= 1 {
        return None;
    }

    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    let mut distance = 1;
    while let Some(square) = from.offset(step_row, step_col, distance) {
        if square == to {
            break;
        }
        if !board.is_empty_at(square) {
            return Some(square);
        }
        distance += 1;
    }
    None
}

#[inline]
fn invalid(from: Position, to: Position, reason: InvalidMoveReason) -> DraughtsError {
    DraughtsError::InvalidMove { from, to, reason }
}
