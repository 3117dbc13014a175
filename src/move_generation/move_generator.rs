//! Move data types and the generator abstraction used by search and engines.

use crate::game_state::draughts_rules::RuleSet;
use crate::game_state::draughts_types::*;
use crate::move_generation::capture_priority::legal_moves_for_side;

/// One jump inside a capture chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaptureStep {
    pub to: Position,
    pub captured: Position,
}

/// Destination of a piece plus capture metadata.
///
/// For a capture, `to`/`captured` describe the first jump, `captured_pieces`
/// the length of the best chain starting with it, and `path` that chain
/// jump by jump. Quiet moves carry no capture data and an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub to: Position,
    pub captured: Option<Position>,
    pub captured_pieces: u8,
    pub path: Vec<CaptureStep>,
}

impl Move {
    #[inline]
    pub fn quiet(to: Position) -> Self {
        Self {
            to,
            captured: None,
            captured_pieces: 0,
            path: Vec::new(),
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Legal moves of a single piece.
///
/// `must_capture` with empty `moves` means the piece is blocked by the
/// capture obligation: another piece has to make a (longer) capture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidMoves {
    pub moves: Vec<Move>,
    pub captures: Vec<Move>,
    pub must_capture: bool,
}

impl ValidMoves {
    pub(crate) fn forced(captures: Vec<Move>) -> Self {
        Self {
            moves: captures.clone(),
            captures,
            must_capture: true,
        }
    }

    pub fn find(&self, to: Position) -> Option<&Move> {
        self.moves.iter().find(|mv| mv.to == to)
    }
}

/// A capturing piece and its capture set, as shown to the player for highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceCaptures {
    pub from: Position,
    pub captures: Vec<Move>,
}

/// A full turn for one piece: the origin, its first step and (for captures)
/// the rest of the chain in `movement.path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlannedMove {
    pub from: Position,
    pub movement: Move,
    pub must_capture: bool,
}

impl PlannedMove {
    #[inline]
    pub fn to(&self) -> Position {
        self.movement.to
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.movement.is_capture()
    }

    /// Square the piece stands on once the whole turn is played.
    pub fn final_square(&self) -> Position {
        self.movement
            .path
            .last()
            .map(|step| step.to)
            .unwrap_or(self.movement.to)
    }

    /// Every `(from, to)` hop of the turn, in playing order.
    pub fn hops(&self) -> Vec<(Position, Position)> {
        if self.movement.path.is_empty() {
            return vec![(self.from, self.movement.to)];
        }
        let mut at = self.from;
        self.movement
            .path
            .iter()
            .map(|step| {
                let hop = (at, step.to);
                at = step.to;
                hop
            })
            .collect()
    }
}

pub trait MoveGenerator: Send + Sync {
    fn rules(&self) -> RuleSet;

    fn legal_moves(&self, board: &Board, side: Side) -> Vec<PlannedMove>;
}

/// Generator applying mandatory and majority capture.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator {
    pub rules: RuleSet,
}

impl LegalMoveGenerator {
    pub const fn new(rules: RuleSet) -> Self {
        Self { rules }
    }
}

impl MoveGenerator for LegalMoveGenerator {
    fn rules(&self) -> RuleSet {
        self.rules
    }

    fn legal_moves(&self, board: &Board, side: Side) -> Vec<PlannedMove> {
        legal_moves_for_side(board, side, self.rules)
    }
}
