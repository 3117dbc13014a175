use crate::game_state::draughts_types::*;

/// Diagonal direction as `(d_row, d_col)`.
pub type Direction = (isize, isize);

/// All four diagonals. Scan order is fixed and doubles as the tie-break order
/// for captures of equal length.
pub const KING_DIRECTIONS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const PLAYER_MAN_DIRECTIONS: [Direction; 2] = [(-1, -1), (-1, 1)];

pub const BOT_MAN_DIRECTIONS: [Direction; 2] = [(1, -1), (1, 1)];

#[inline]
pub fn move_directions(piece: Piece) -> &'static [Direction] {
    match (piece.kind, piece.side) {
        (PieceKind::King, _) => &KING_DIRECTIONS,
        (PieceKind::Man, Side::Player) => &PLAYER_MAN_DIRECTIONS,
        (PieceKind::Man, Side::Bot) => &BOT_MAN_DIRECTIONS,
    }
}

#[inline]
pub fn is_enemy_piece(cell: Cell, side: Side) -> bool {
    matches!(cell, Some(piece) if piece.is_enemy_of(side))
}

/// Occupied dark square holding a piece, or `None`.
#[inline]
pub fn playable_piece(board: &Board, pos: Position) -> Option<Piece> {
    if pos.is_playable() {
        board.piece_at(pos)
    } else {
        None
    }
}

/// A single jump: land on `landing` after removing the piece on `captured`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    pub landing: Position,
    pub captured: Position,
}
