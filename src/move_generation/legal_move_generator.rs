//! Per-piece move generation with the local capture obligation.
//!
//! A piece that can capture must capture, and only with its own longest
//! chains. The side-wide majority rule is layered on top in
//! `capture_priority`.

use crate::game_state::draughts_rules::RuleSet;
use crate::game_state::draughts_types::*;
use crate::move_generation::capture_resolver::{find_all_captures, max_captured};
use crate::move_generation::legal_move_shared::playable_piece;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_man::generate_man_moves;
use crate::move_generation::move_generator::{Move, ValidMoves};

pub fn valid_moves(board: &Board, from: Position, rules: RuleSet) -> ValidMoves {
    let Some(piece) = playable_piece(board, from) else {
        return ValidMoves::default();
    };

    let captures = find_all_captures(board, from, rules);
    if !captures.is_empty() {
        return ValidMoves::forced(longest_captures(captures));
    }

    ValidMoves {
        moves: quiet_moves(board, from, piece),
        captures: Vec::new(),
        must_capture: false,
    }
}

/// Non-capturing moves only, ignoring any capture obligation.
pub fn quiet_moves(board: &Board, from: Position, piece: Piece) -> Vec<Move> {
    let mut moves = Vec::with_capacity(if piece.is_king() { 17 } else { 2 });
    if piece.is_king() {
        generate_king_moves(board, from, piece, &mut moves);
    } else {
        generate_man_moves(board, from, piece, &mut moves);
    }
    moves
}

/// Keep only the chains tied for the longest, preserving scan order.
pub fn longest_captures(captures: Vec<Move>) -> Vec<Move> {
    let best = max_captured(&captures);
    captures
        .into_iter()
        .filter(|c| c.captured_pieces == best)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_notation::parse_board;

    #[test]
    fn opening_men_have_quiet_moves_only() {
        let board = Board::new_game();
        let moves = valid_moves(&board, Position::new(6, 1), RuleSet::classic());
        assert!(!moves.must_capture);
        assert!(moves.captures.is_empty());
        assert_eq!(moves.moves.len(), 2);

        let blocked = valid_moves(&board, Position::new(7, 2), RuleSet::classic());
        assert!(blocked.moves.is_empty());
        assert!(!blocked.must_capture);
    }

    #[test]
    fn empty_and_light_squares_yield_nothing() {
        let board = Board::new_game();
        assert_eq!(valid_moves(&board, Position::new(5, 0), RuleSet::classic()), ValidMoves::default());
        assert_eq!(valid_moves(&board, Position::new(6, 0), RuleSet::classic()), ValidMoves::default());
        assert_eq!(valid_moves(&board, Position::new(12, 3), RuleSet::classic()), ValidMoves::default());
    }

    #[test]
    fn piece_keeps_only_its_longest_chains() {
        // (6,3) can take one piece towards (4,1) or two towards (4,5) then (2,7).
        let board = parse_board(
            "
            ..........
            ..........
            ..........
            ......c...
            ..........
            ..c.c.....
            ...b......
            ..........
            ..........
            ..........
            ",
        )
        .expect("valid board");
        let moves = valid_moves(&board, Position::new(6, 3), RuleSet::classic());
        assert!(moves.must_capture);
        assert_eq!(moves.moves.len(), 1);
        assert_eq!(moves.moves[0].to, Position::new(4, 5));
        assert_eq!(moves.moves[0].captured_pieces, 2);
        assert_eq!(moves.moves, moves.captures);
    }
}
