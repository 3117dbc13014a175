//! Side-wide majority capture rule.
//!
//! When any piece of the side to move can capture, only chains tied for the
//! longest capture available to the whole side are legal. A piece whose best
//! chain is shorter gets no moves at all, with `must_capture` still set.

use crate::game_state::draughts_rules::RuleSet;
use crate::game_state::draughts_types::*;
use crate::move_generation::capture_resolver::{find_all_captures, max_captured};
use crate::move_generation::legal_move_generator::{longest_captures, valid_moves};
use crate::move_generation::legal_move_shared::playable_piece;
use crate::move_generation::move_generator::{Move, PieceCaptures, PlannedMove, ValidMoves};

/// Raw capture lists for every piece of `side` that has at least one capture.
fn side_captures(board: &Board, side: Side, rules: RuleSet) -> Vec<(Position, Vec<Move>)> {
    board
        .pieces(side)
        .filter_map(|(from, _)| {
            let captures = find_all_captures(board, from, rules);
            (!captures.is_empty()).then_some((from, captures))
        })
        .collect()
}

/// Longest chain available to any piece of `side`; 0 when nothing can capture.
pub fn max_capture_count(board: &Board, side: Side, rules: RuleSet) -> u8 {
    side_captures(board, side, rules)
        .iter()
        .map(|(_, captures)| max_captured(captures))
        .max()
        .unwrap_or(0)
}

pub fn has_captures(board: &Board, side: Side, rules: RuleSet) -> bool {
    max_capture_count(board, side, rules) > 0
}

/// Pieces whose best chain ties the side-wide maximum, each with those chains.
pub fn pieces_with_captures(board: &Board, side: Side, rules: RuleSet) -> Vec<PieceCaptures> {
    let all = side_captures(board, side, rules);
    let global_max = all
        .iter()
        .map(|(_, captures)| max_captured(captures))
        .max()
        .unwrap_or(0);
    if global_max == 0 {
        return Vec::new();
    }

    all.into_iter()
        .filter(|(_, captures)| max_captured(captures) == global_max)
        .map(|(from, captures)| PieceCaptures {
            from,
            captures: captures
                .into_iter()
                .filter(|c| c.captured_pieces == global_max)
                .collect(),
        })
        .collect()
}

/// Legal moves of the piece on `from` under mandatory and majority capture.
pub fn valid_moves_with_capture_priority(board: &Board, from: Position, rules: RuleSet) -> ValidMoves {
    let Some(piece) = playable_piece(board, from) else {
        return ValidMoves::default();
    };

    let global_max = max_capture_count(board, piece.side, rules);
    if global_max == 0 {
        return valid_moves(board, from, rules);
    }

    let captures: Vec<Move> = find_all_captures(board, from, rules)
        .into_iter()
        .filter(|c| c.captured_pieces == global_max)
        .collect();
    ValidMoves::forced(captures)
}

/// Moves allowed after a capture step landed on `at`: only that piece's own
/// longest continuations. Empty with `must_capture == false` ends the turn.
pub fn continuation_moves(board: &Board, at: Position, rules: RuleSet) -> ValidMoves {
    let captures = find_all_captures(board, at, rules);
    if captures.is_empty() {
        return ValidMoves::default();
    }
    ValidMoves::forced(longest_captures(captures))
}

/// Every legal turn of `side`, in row-major piece order.
///
/// Agrees square by square with `valid_moves_with_capture_priority` while
/// resolving capture chains only once per piece.
pub fn legal_moves_for_side(board: &Board, side: Side, rules: RuleSet) -> Vec<PlannedMove> {
    let with_captures = side_captures(board, side, rules);
    let global_max = with_captures
        .iter()
        .map(|(_, captures)| max_captured(captures))
        .max()
        .unwrap_or(0);

    if global_max > 0 {
        return with_captures
            .into_iter()
            .flat_map(|(from, captures)| {
                captures
                    .into_iter()
                    .filter(move |c| c.captured_pieces == global_max)
                    .map(move |movement| PlannedMove {
                        from,
                        movement,
                        must_capture: true,
                    })
            })
            .collect();
    }

    board
        .pieces(side)
        .flat_map(|(from, _)| {
            valid_moves(board, from, rules)
                .moves
                .into_iter()
                .map(move |movement| PlannedMove {
                    from,
                    movement,
                    must_capture: false,
                })
        })
        .collect()
}

/// Whether `side` has at least one legal move; stops at the first one found.
pub fn side_has_legal_move(board: &Board, side: Side, rules: RuleSet) -> bool {
    board
        .pieces(side)
        .any(|(from, _)| !valid_moves(board, from, rules).moves.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::execute_move;
    use crate::utils::board_notation::parse_board;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    /// (6,1) can take one piece, (6,7) can take two; the bot has no capture.
    fn majority_board() -> Board {
        parse_board(
            "
            ..........
            ..........
            ..........
            ......c...
            ..........
            ..c...c...
            .b.....b..
            b.......b.
            ..........
            ..........
            ",
        )
        .expect("valid board")
    }

    /// (6,1) and (6,7) can each take two pieces, (9,4) only one.
    fn tied_majority_board() -> Board {
        parse_board(
            "
            ..........
            ..........
            ..........
            ..c...c...
            ..........
            ..c...c...
            .b.....b..
            ..........
            .....c....
            ....b.....
            ",
        )
        .expect("valid board")
    }

    fn kings_board() -> Board {
        parse_board(
            "
            ..........
            ....c.....
            ..........
            ..c...c...
            ..........
            ....B.....
            ..........
            ..b...b...
            .C........
            ..........
            ",
        )
        .expect("valid board")
    }

    /// Both sides have long-range man captures under crazy jumps.
    fn flying_men_board() -> Board {
        parse_board(
            "
            .........c
            ..........
            ..........
            ..........
            ...c......
            ..........
            .....b....
            b.........
            ..........
            ..........
            ",
        )
        .expect("valid board")
    }

    #[test]
    fn shorter_capture_is_not_legal() {
        let board = majority_board();
        let rules = RuleSet::classic();

        let short = valid_moves_with_capture_priority(&board, pos(6, 1), rules);
        assert!(short.moves.is_empty());
        assert!(short.captures.is_empty());
        assert!(short.must_capture);

        // The same piece still reports its own capture without the side-wide rule.
        let local = valid_moves(&board, pos(6, 1), rules);
        assert_eq!(local.moves.len(), 1);
        assert_eq!(local.moves[0].captured_pieces, 1);

        let long = valid_moves_with_capture_priority(&board, pos(6, 7), rules);
        assert!(long.must_capture);
        assert_eq!(long.moves.len(), 1);
        assert_eq!(long.moves[0].to, pos(4, 5));
        assert_eq!(long.moves[0].captured_pieces, 2);
    }

    #[test]
    fn only_the_longest_capturing_pieces_are_listed() {
        let board = majority_board();
        let listed = pieces_with_captures(&board, Side::Player, RuleSet::classic());
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].from, pos(6, 7));
        assert!(listed[0].captures.iter().all(|c| c.captured_pieces == 2));

        assert!(has_captures(&board, Side::Player, RuleSet::classic()));
        assert!(!has_captures(&board, Side::Bot, RuleSet::classic()));
        assert!(pieces_with_captures(&board, Side::Bot, RuleSet::classic()).is_empty());
    }

    #[test]
    fn tied_longest_pieces_are_all_listed_in_board_order() {
        let board = tied_majority_board();
        let rules = RuleSet::classic();

        let listed = pieces_with_captures(&board, Side::Player, rules);
        let origins: Vec<Position> = listed.iter().map(|p| p.from).collect();
        assert_eq!(origins, vec![pos(6, 1), pos(6, 7)]);
        assert!(listed
            .iter()
            .all(|p| p.captures.iter().all(|c| c.captured_pieces == 2)));

        assert_eq!(valid_moves(&board, pos(9, 4), rules).moves[0].captured_pieces, 1);
        assert!(valid_moves_with_capture_priority(&board, pos(9, 4), rules).moves.is_empty());

        let turns: Vec<(Position, Position)> = legal_moves_for_side(&board, Side::Player, rules)
            .iter()
            .map(|p| (p.from, p.to()))
            .collect();
        assert_eq!(turns, vec![(pos(6, 1), pos(4, 3)), (pos(6, 7), pos(4, 5))]);
    }

    #[test]
    fn capture_only_mobility_counts_as_a_legal_move() {
        let board = parse_board(
            "
            ..........
            ..........
            ..........
            ..........
            ..........
            c.c.......
            .b........
            ..........
            ..........
            ..........
            ",
        )
        .expect("valid board");
        let rules = RuleSet::classic();
        assert!(side_has_legal_move(&board, Side::Player, rules));

        let mut blocked = board.clone();
        blocked.set(pos(4, 3), Some(Piece::BOT_MAN));
        assert!(!side_has_legal_move(&blocked, Side::Player, rules));
    }

    #[test]
    fn pieces_without_captures_are_frozen_while_a_capture_exists() {
        let mut board = majority_board();
        board.set(pos(8, 3), Some(Piece::PLAYER_MAN));
        let frozen = valid_moves_with_capture_priority(&board, pos(8, 3), RuleSet::classic());
        assert!(frozen.moves.is_empty());
        assert!(frozen.must_capture);
    }

    #[test]
    fn without_captures_priority_defers_to_plain_moves() {
        let board = Board::new_game();
        for (from, _) in board.pieces(Side::Player) {
            assert_eq!(
                valid_moves_with_capture_priority(&board, from, RuleSet::classic()),
                valid_moves(&board, from, RuleSet::classic())
            );
        }
    }

    #[test]
    fn side_move_list_matches_per_square_queries() {
        let rules = RuleSet::classic();
        for board in [Board::new_game(), majority_board()] {
            for side in [Side::Player, Side::Bot] {
                let listed = legal_moves_for_side(&board, side, rules);
                let mut expected = Vec::new();
                for (from, _) in board.pieces(side) {
                    for movement in valid_moves_with_capture_priority(&board, from, rules).moves {
                        expected.push((from, movement));
                    }
                }
                let got: Vec<(Position, Move)> =
                    listed.into_iter().map(|p| (p.from, p.movement)).collect();
                assert_eq!(got, expected);
                assert_eq!(side_has_legal_move(&board, side, rules), !got.is_empty());
            }
        }
    }

    #[test]
    fn every_generated_move_executes_onto_an_empty_square() {
        let cases = [
            (Board::new_game(), RuleSet::classic()),
            (majority_board(), RuleSet::classic()),
            (tied_majority_board(), RuleSet::classic()),
            (kings_board(), RuleSet::classic()),
            (flying_men_board(), RuleSet::crazy_jumps()),
        ];
        for (board, rules) in cases {
            for side in [Side::Player, Side::Bot] {
                for (from, _) in board.pieces(side) {
                    for mv in valid_moves_with_capture_priority(&board, from, rules).moves {
                        assert!(mv.to.is_playable());
                        assert!(board.is_empty_at(mv.to));
                        let next = execute_move(&board, from, mv.to).expect("generated move executes");
                        assert!(next.is_empty_at(from));
                        assert_eq!(next.piece_at(mv.to).map(|p| p.side), Some(side));
                        if let Some(captured) = mv.captured {
                            assert!(next.is_empty_at(captured));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn chain_continues_from_the_landing_square() {
        let board = parse_board(
            "
            ..........
            ..........
            ..........
            ......c...
            ..........
            ......c...
            .......b..
            ..........
            ..........
            ..........
            ",
        )
        .expect("valid board");
        let rules = RuleSet::classic();

        let first = valid_moves_with_capture_priority(&board, pos(6, 7), rules);
        assert_eq!(first.moves.len(), 1);
        let after_first = execute_move(&board, pos(6, 7), pos(4, 5)).expect("first jump");
        assert!(after_first.is_empty_at(pos(5, 6)));

        for next in [
            valid_moves_with_capture_priority(&after_first, pos(4, 5), rules),
            continuation_moves(&after_first, pos(4, 5), rules),
        ] {
            assert!(next.must_capture);
            assert_eq!(next.moves.len(), 1);
            assert_eq!(next.moves[0].to, pos(2, 7));
            assert_eq!(next.moves[0].captured, Some(pos(3, 6)));
        }

        let done = execute_move(&after_first, pos(4, 5), pos(2, 7)).expect("second jump");
        assert_eq!(done.count_pieces().total(Side::Bot), 0);
        assert_eq!(continuation_moves(&done, pos(2, 7), rules), ValidMoves::default());
    }
}
