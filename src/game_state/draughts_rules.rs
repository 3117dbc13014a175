//! Rule constants and the rule-variant switch.

/// Rows filled with bot men at the start of a game.
pub const BOT_HOME_ROWS: std::ops::Range<usize> = 0..4;

/// Rows filled with player men at the start of a game.
pub const PLAYER_HOME_ROWS: std::ops::Range<usize> = 6..10;

/// Men placed per side in the starting position.
pub const PIECES_PER_SIDE: usize = 20;

/// Score for a decided game, from the bot's point of view.
pub const WIN_SCORE: f64 = 1000.0;

/// Default transposition cache size before it is cleared wholesale.
pub const CACHE_SIZE_LIMIT: usize = 1000;

/// Rule variant knobs consumed by move generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RuleSet {
    /// Men capture at any distance along their forward diagonals, scanning
    /// like a king. Quiet moves are unaffected.
    pub flying_men: bool,
}

impl RuleSet {
    pub const fn classic() -> Self {
        Self { flying_men: false }
    }

    pub const fn crazy_jumps() -> Self {
        Self { flying_men: true }
    }
}
