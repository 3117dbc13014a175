//! 10x10 board value.
//!
//! A `Board` is never mutated once handed out: every move produces a fresh
//! copy. That lets search and capture resolution branch freely on scratch
//! boards without aliasing the caller's position.

use log::debug;

use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_rules::{BOT_HOME_ROWS, PIECES_PER_SIDE, PLAYER_HOME_ROWS};
use crate::game_state::draughts_types::*;

/// Per-side, per-rank piece counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceCounts {
    pub player_men: usize,
    pub bot_men: usize,
    pub player_kings: usize,
    pub bot_kings: usize,
}

impl PieceCounts {
    #[inline]
    pub fn total(&self, side: Side) -> usize {
        match side {
            Side::Player => self.player_men + self.player_kings,
            Side::Bot => self.bot_men + self.bot_kings,
        }
    }

    #[inline]
    pub fn kings(&self, side: Side) -> usize {
        match side {
            Side::Player => self.player_kings,
            Side::Bot => self.bot_kings,
        }
    }
}

/// Dark squares packed one byte each: the serialized form used for caching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardKey([u8; 50]);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard opening layout: four rows of men per side on the dark squares.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if !is_dark_square(row as isize, col as isize) {
                    continue;
                }
                if BOT_HOME_ROWS.contains(&row) {
                    board.cells[row][col] = Some(Piece::BOT_MAN);
                } else if PLAYER_HOME_ROWS.contains(&row) {
                    board.cells[row][col] = Some(Piece::PLAYER_MAN);
                }
            }
        }
        debug!("new_game layout=international pieces_per_side={PIECES_PER_SIDE}");
        board
    }

    /// Build from a row-major grid, rejecting bad shapes and light-square pieces.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> DraughtsResult<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(DraughtsError::InvalidBoard(format!(
                "expected {BOARD_SIZE} rows, found {}",
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != BOARD_SIZE {
                return Err(DraughtsError::InvalidBoard(format!(
                    "row {row} has {} cells, expected {BOARD_SIZE}",
                    cells.len()
                )));
            }
            for (col, cell) in cells.into_iter().enumerate() {
                if cell.is_some() && !is_dark_square(row as isize, col as isize) {
                    return Err(DraughtsError::InvalidBoard(format!(
                        "piece on light square ({row},{col})"
                    )));
                }
                board.cells[row][col] = cell;
            }
        }
        Ok(board)
    }

    pub fn from_pieces<I>(pieces: I) -> DraughtsResult<Self>
    where
        I: IntoIterator<Item = (Position, Piece)>,
    {
        let mut board = Self::empty();
        for (pos, piece) in pieces {
            if !pos.is_playable() {
                return Err(DraughtsError::InvalidBoard(format!(
                    "piece placed on unplayable square {pos}"
                )));
            }
            board.set(pos, Some(piece));
        }
        Ok(board)
    }

    /// Cell at `(row, col)`; `None` for empty and off-board coordinates alike.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            self.cells[row][col]
        } else {
            None
        }
    }

    #[inline]
    pub fn piece_at(&self, pos: Position) -> Cell {
        self.cell(pos.row, pos.col)
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    #[inline]
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    /// Scratch copy with a piece moved and, optionally, one square cleared.
    /// No promotion and no validation; callers have already checked the squares.
    pub(crate) fn with_jump(&self, from: Position, to: Position, captured: Option<Position>) -> Self {
        let mut next = self.clone();
        let piece = next.piece_at(from);
        next.set(from, None);
        next.set(to, piece);
        if let Some(captured) = captured {
            next.set(captured, None);
        }
        next
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }

    /// Every occupied square of `side`, row-major.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Position, Piece)> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
            .filter_map(move |pos| match self.piece_at(pos) {
                Some(piece) if piece.side == side && pos.is_playable() => Some((pos, piece)),
                _ => None,
            })
    }

    pub fn count_pieces(&self) -> PieceCounts {
        let mut counts = PieceCounts::default();
        for row in &self.cells {
            for cell in row.iter().flatten() {
                match (cell.side, cell.kind) {
                    (Side::Player, PieceKind::Man) => counts.player_men += 1,
                    (Side::Player, PieceKind::King) => counts.player_kings += 1,
                    (Side::Bot, PieceKind::Man) => counts.bot_men += 1,
                    (Side::Bot, PieceKind::King) => counts.bot_kings += 1,
                }
            }
        }
        counts
    }

    pub fn cache_key(&self) -> BoardKey {
        let mut packed = [0u8; 50];
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Position::new(row, col);
                if !pos.is_playable() {
                    continue;
                }
                packed[pos.dark_index()] = match self.piece_at(pos) {
                    None => 0,
                    Some(Piece { side: Side::Player, kind: PieceKind::Man }) => 1,
                    Some(Piece { side: Side::Player, kind: PieceKind::King }) => 2,
                    Some(Piece { side: Side::Bot, kind: PieceKind::Man }) => 3,
                    Some(Piece { side: Side::Bot, kind: PieceKind::King }) => 4,
                };
            }
        }
        BoardKey(packed)
    }

    /// Board turned half a circle with every piece handed to the other side.
    pub fn rotated(&self) -> Self {
        let mut next = Self::empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let swapped = self.cells[row][col]
                    .map(|piece| Piece::new(piece.side.opposite(), piece.kind));
                next.cells[BOARD_SIZE - 1 - row][BOARD_SIZE - 1 - col] = swapped;
            }
        }
        next
    }
}
