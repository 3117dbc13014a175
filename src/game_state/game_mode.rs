//! Game modes, difficulty levels and the settings derived from them.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::DraughtsError;
use crate::game_state::draughts_rules::RuleSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameMode {
    #[default]
    Classic,
    CrazyJumps,
    PartyMode,
    Turbo,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::Classic,
        GameMode::CrazyJumps,
        GameMode::PartyMode,
        GameMode::Turbo,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::CrazyJumps => "crazy_jumps",
            GameMode::PartyMode => "party_mode",
            GameMode::Turbo => "turbo",
        }
    }

    pub const fn rules(self) -> RuleSet {
        match self {
            GameMode::CrazyJumps => RuleSet::crazy_jumps(),
            _ => RuleSet::classic(),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = DraughtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        GameMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| DraughtsError::UnknownMode(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }
}

/// Everything a game needs from its mode: search depth, the pause before the
/// bot plays, and the rule variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSettings {
    pub mode: GameMode,
    pub depth: u8,
    pub bot_delay: Duration,
    pub rules: RuleSet,
}

impl ModeSettings {
    const TURBO_DEPTH: u8 = 4;
    const TURBO_DELAY: Duration = Duration::from_millis(300);
    const NORMAL_DELAY: Duration = Duration::from_millis(1000);

    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        let (depth, bot_delay) = match mode {
            GameMode::Turbo => (Self::TURBO_DEPTH, Self::TURBO_DELAY),
            _ => (difficulty.depth(), Self::NORMAL_DELAY),
        };
        Self {
            mode,
            depth,
            bot_delay,
            rules: mode.rules(),
        }
    }
}

impl Default for ModeSettings {
    fn default() -> Self {
        Self::new(GameMode::default(), Difficulty::default())
    }
}

impl From<GameMode> for ModeSettings {
    fn from(mode: GameMode) -> Self {
        Self::new(mode, Difficulty::default())
    }
}
