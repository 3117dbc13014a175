//! Core value types for the 10x10 draughts board.
//!
//! Sides, piece kinds and board coordinates. The board itself lives in
//! `game_state::board`.

use std::fmt;

pub use crate::game_state::board::Board;

/// Board edge length.
pub const BOARD_SIZE: usize = 10;

/// The two sides of the game. The human plays the beagles, the computer the corgis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Bot,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Bot => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Player => Side::Bot,
            Side::Bot => Side::Player,
        }
    }

    /// Row on which this side's men are promoted.
    #[inline]
    pub const fn promotion_row(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Bot => BOARD_SIZE - 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Bot => f.write_str("bot"),
        }
    }
}

/// Rank of a piece. Only ever changes from `Man` to `King`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    pub const PLAYER_MAN: Piece = Piece::new(Side::Player, PieceKind::Man);
    pub const PLAYER_KING: Piece = Piece::new(Side::Player, PieceKind::King);
    pub const BOT_MAN: Piece = Piece::new(Side::Bot, PieceKind::Man);
    pub const BOT_KING: Piece = Piece::new(Side::Bot, PieceKind::King);

    #[inline]
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }

    #[inline]
    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }

    #[inline]
    pub fn is_enemy_of(self, side: Side) -> bool {
        self.side != side
    }

    #[inline]
    pub fn promoted(self) -> Self {
        Self::new(self.side, PieceKind::King)
    }
}

/// Content of a single square.
pub type Cell = Option<Piece>;

/// Zero-based board coordinate. Row 0 is the bot's far edge, row 9 the player's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `distance` times along `(d_row, d_col)`; `None` once off the board.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize, distance: isize) -> Option<Position> {
        let row = self.row as isize + d_row * distance;
        let col = self.col as isize + d_col * distance;
        if is_valid_position(row, col) {
            Some(Position::new(row as usize, col as usize))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    #[inline]
    pub fn is_playable(self) -> bool {
        self.is_on_board() && is_dark_square(self.row as isize, self.col as isize)
    }

    /// Index of a dark square in `0..50`, row-major.
    #[inline]
    pub(crate) fn dark_index(self) -> usize {
        self.row * (BOARD_SIZE / 2) + self.col / 2
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[inline]
pub fn is_valid_position(row: isize, col: isize) -> bool {
    (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col)
}

#[inline]
pub fn is_dark_square(row: isize, col: isize) -> bool {
    (row + col).rem_euclid(2) == 1
}

#[inline]
pub fn is_valid_square(row: isize, col: isize) -> bool {
    is_valid_position(row, col) && is_dark_square(row, col)
}
