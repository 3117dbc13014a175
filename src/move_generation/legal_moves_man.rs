use crate::game_state::draughts_types::*;
use crate::move_generation::legal_move_shared::{is_enemy_piece, move_directions, Direction, Jump};
use crate::move_generation::move_generator::Move;

/// One-step forward moves onto empty dark squares.
pub fn generate_man_moves(board: &Board, from: Position, piece: Piece, out: &mut Vec<Move>) {
    for &(d_row, d_col) in move_directions(piece) {
        if let Some(to) = from.offset(d_row, d_col, 1) {
            if to.is_playable() && board.is_empty_at(to) {
                out.push(Move::quiet(to));
            }
        }
    }
}

/// Short capture: an adjacent enemy with an empty square right behind it.
pub fn man_jump(board: &Board, from: Position, side: Side, direction: Direction) -> Option<Jump> {
    let (d_row, d_col) = direction;
    let captured = from.offset(d_row, d_col, 1)?;
    if !is_enemy_piece(board.piece_at(captured), side) {
        return None;
    }
    let landing = from.offset(d_row, d_col, 2)?;
    if landing.is_playable() && board.is_empty_at(landing) {
        Some(Jump { landing, captured })
    } else {
        None
    }
}
