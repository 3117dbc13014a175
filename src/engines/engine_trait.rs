//! Engine abstraction shared by the game session and the match harness.
//!
//! Any strategy that can pick a whole turn for one side implements `Engine`,
//! so the minimax bot and the random baseline can be swapped at runtime.

use crate::errors::DraughtsResult;
use crate::game_state::draughts_types::*;
use crate::move_generation::move_generator::PlannedMove;
use crate::search::board_scoring::Score;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Overrides the engine's configured depth when set.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineOutput {
    pub best_move: Option<PlannedMove>,
    pub score: Option<Score>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        board: &Board,
        side: Side,
        params: &SearchParams,
    ) -> DraughtsResult<EngineOutput>;
}
