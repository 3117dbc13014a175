//! Terminal-position detection.

use crate::game_state::draughts_rules::RuleSet;
use crate::game_state::draughts_types::*;
use crate::move_generation::capture_priority::side_has_legal_move;

/// Winner of the position, or `None` while both sides can still move.
///
/// A side without pieces, or whose pieces are all blocked, has lost. The bot
/// side is examined first, so a degenerate board where both sides are stuck
/// reports the player as winner.
pub fn check_game_status(board: &Board, rules: RuleSet) -> Option<Side> {
    let counts = board.count_pieces();
    if counts.total(Side::Bot) == 0 {
        return Some(Side::Player);
    }
    if counts.total(Side::Player) == 0 {
        return Some(Side::Bot);
    }

    if !side_has_legal_move(board, Side::Bot, rules) {
        return Some(Side::Player);
    }
    if !side_has_legal_move(board, Side::Player, rules) {
        return Some(Side::Bot);
    }
    None
}
