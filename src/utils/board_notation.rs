//! Plain-text board notation.
//!
//! Ten rows of ten characters, row 0 first: `.` empty, `b` beagle (player)
//! man, `B` beagle king, `c` corgi (bot) man, `C` corgi king. Spaces inside a
//! row and blank lines are ignored, so diagrams can be indented in tests.

use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_types::*;

pub fn parse_board(text: &str) -> DraughtsResult<Board> {
    let rows: Vec<Vec<Cell>> = text
        .lines()
        .map(|line| line.chars().filter(|ch| !ch.is_whitespace()).collect::<String>())
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(cell_from_char).collect::<DraughtsResult<Vec<Cell>>>())
        .collect::<DraughtsResult<_>>()?;

    Board::from_rows(rows)
}

pub fn generate_board_notation(board: &Board) -> String {
    board
        .rows()
        .map(|row| row.iter().map(|cell| char_from_cell(*cell)).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn cell_from_char(ch: char) -> DraughtsResult<Cell> {
    match ch {
        '.' => Ok(None),
        'b' => Ok(Some(Piece::PLAYER_MAN)),
        'B' => Ok(Some(Piece::PLAYER_KING)),
        'c' => Ok(Some(Piece::BOT_MAN)),
        'C' => Ok(Some(Piece::BOT_KING)),
        other => Err(DraughtsError::InvalidBoard(format!(
            "unknown board character '{other}'"
        ))),
    }
}

pub(crate) fn char_from_cell(cell: Cell) -> char {
    match cell {
        None => '.',
        Some(Piece { side: Side::Player, kind: PieceKind::Man }) => 'b',
        Some(Piece { side: Side::Player, kind: PieceKind::King }) => 'B',
        Some(Piece { side: Side::Bot, kind: PieceKind::Man }) => 'c',
        Some(Piece { side: Side::Bot, kind: PieceKind::King }) => 'C',
    }
}
