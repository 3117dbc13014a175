use crate::game_state::draughts_types::*;
use crate::move_generation::legal_move_shared::{is_enemy_piece, move_directions, Direction, Jump};
use crate::move_generation::move_generator::Move;

/// Sliding moves along every diagonal until the first occupied square or edge.
pub fn generate_king_moves(board: &Board, from: Position, piece: Piece, out: &mut Vec<Move>) {
    for &(d_row, d_col) in move_directions(piece) {
        let mut distance = 1;
        while let Some(to) = from.offset(d_row, d_col, distance) {
            if !board.is_empty_at(to) {
                break;
            }
            out.push(Move::quiet(to));
            distance += 1;
        }
    }
}

/// Long-range capture scan along one diagonal.
///
/// Empty squares before the enemy are free travel. Exactly one enemy may be
/// passed; every empty square behind it is a landing square until the next
/// piece or the edge. A second piece directly in line ends the scan.
pub fn long_range_jumps(board: &Board, from: Position, side: Side, direction: Direction) -> Vec<Jump> {
    let (d_row, d_col) = direction;
    let mut jumps = Vec::new();
    let mut enemy: Option<Position> = None;
    let mut distance = 1;

    while let Some(pos) = from.offset(d_row, d_col, distance) {
        let cell = board.piece_at(pos);
        match (cell, enemy) {
            (None, Some(captured)) => jumps.push(Jump {
                landing: pos,
                captured,
            }),
            (None, None) => {}
            (Some(_), None) if is_enemy_piece(cell, side) => enemy = Some(pos),
            _ => break,
        }
        distance += 1;
    }

    jumps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_slides_until_blocked() {
        let from = Position::new(9, 0);
        let board = Board::from_pieces([
            (from, Piece::PLAYER_KING),
            (Position::new(6, 3), Piece::PLAYER_MAN),
        ])
        .expect("valid");
        let mut out = Vec::new();
        generate_king_moves(&board, from, Piece::PLAYER_KING, &mut out);
        let targets: Vec<Position> = out.iter().map(|m| m.to).collect();
        assert_eq!(targets, vec![Position::new(8, 1), Position::new(7, 2)]);
    }

    #[test]
    fn every_square_behind_the_enemy_is_a_landing() {
        let from = Position::new(9, 0);
        let board = Board::from_pieces([
            (from, Piece::PLAYER_KING),
            (Position::new(6, 3), Piece::BOT_MAN),
            (Position::new(2, 7), Piece::PLAYER_MAN),
        ])
        .expect("valid");
        let jumps = long_range_jumps(&board, from, Side::Player, (-1, 1));
        let landings: Vec<Position> = jumps.iter().map(|j| j.landing).collect();
        assert_eq!(
            landings,
            vec![Position::new(5, 4), Position::new(4, 5), Position::new(3, 6)]
        );
        assert!(jumps.iter().all(|j| j.captured == Position::new(6, 3)));
    }

    #[test]
    fn two_pieces_in_a_row_block_the_capture() {
        let from = Position::new(9, 0);
        let board = Board::from_pieces([
            (from, Piece::PLAYER_KING),
            (Position::new(6, 3), Piece::BOT_MAN),
            (Position::new(5, 4), Piece::BOT_MAN),
        ])
        .expect("valid");
        assert!(long_range_jumps(&board, from, Side::Player, (-1, 1)).is_empty());
    }
}
