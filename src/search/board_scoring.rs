//! Pluggable board evaluation.
//!
//! Search delegates static scoring to `BoardScorer`, so heuristics can be
//! swapped without touching the search. Scores are always from the bot's
//! point of view: positive favours the corgis.

use crate::game_state::draughts_rules::{RuleSet, WIN_SCORE};
use crate::game_state::draughts_types::*;
use crate::move_generation::capture_resolver::find_all_captures;

pub type Score = f64;

pub trait BoardScorer: Send + Sync {
    fn score(&self, board: &Board) -> Score;
}

/// Material plus advancement, centrality, king bonus and capture pressure.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer {
    pub rules: RuleSet,
}

impl PositionalScorer {
    pub const MAN_VALUE: Score = 10.0;
    pub const KING_VALUE: Score = 30.0;
    const PIECE_COUNT_WEIGHT: Score = 5.0;
    const KING_COUNT_WEIGHT: Score = 10.0;
    const BOT_CAPTURE_WEIGHT: Score = 3.0;
    const PLAYER_CAPTURE_WEIGHT: Score = 2.0;

    pub const fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Value of one piece for its owner, before the sign is applied.
    fn piece_value(pos: Position, piece: Piece) -> Score {
        let center_distance = (4.5 - pos.col as Score).abs() + (4.5 - pos.row as Score).abs();
        match piece.kind {
            PieceKind::Man => {
                let advancement = match piece.side {
                    Side::Bot => pos.row,
                    Side::Player => BOARD_SIZE - 1 - pos.row,
                } as Score;
                Self::MAN_VALUE + advancement + (5.0 - center_distance) / 2.0
            }
            PieceKind::King => Self::KING_VALUE + (6.0 - center_distance),
        }
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, board: &Board) -> Score {
        let counts = board.count_pieces();
        if counts.total(Side::Bot) == 0 {
            return -WIN_SCORE;
        }
        if counts.total(Side::Player) == 0 {
            return WIN_SCORE;
        }

        let mut score = 0.0;
        let mut capture_chances = [0usize; 2];

        for side in [Side::Player, Side::Bot] {
            let sign = if side == Side::Bot { 1.0 } else { -1.0 };
            for (pos, piece) in board.pieces(side) {
                score += sign * Self::piece_value(pos, piece);
                capture_chances[side.index()] += find_all_captures(board, pos, self.rules).len();
            }
        }

        let bot = Side::Bot;
        let player = Side::Player;
        score += Self::PIECE_COUNT_WEIGHT * (counts.total(bot) as Score - counts.total(player) as Score);
        score += Self::KING_COUNT_WEIGHT * (counts.kings(bot) as Score - counts.kings(player) as Score);
        score += Self::BOT_CAPTURE_WEIGHT * capture_chances[bot.index()] as Score;
        score -= Self::PLAYER_CAPTURE_WEIGHT * capture_chances[player.index()] as Score;
        score
    }
}
