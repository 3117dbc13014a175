//! Random-move engine.
//!
//! Picks uniformly among the legal turns of the side to move. Used as a weak
//! opponent and for match-harness smoke tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::DraughtsResult;
use crate::game_state::draughts_rules::RuleSet;
use crate::game_state::draughts_types::*;
use crate::move_generation::move_generator::{LegalMoveGenerator, MoveGenerator};

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            move_generator: LegalMoveGenerator::new(rules),
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible engine for tests and seeded matches.
    pub fn seeded(rules: RuleSet, seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator::new(rules),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: Side,
        params: &SearchParams,
    ) -> DraughtsResult<EngineOutput> {
        let legal_moves = self.move_generator.legal_moves(board, side);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine side={side} legal_moves={}", legal_moves.len()));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("random_engine requested_depth={depth} (ignored)"));
        }

        out.best_move = legal_moves.as_slice().choose(&mut self.rng).cloned();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_a_legal_move() {
        let board = Board::new_game();
        let rules = RuleSet::classic();
        let mut engine = RandomEngine::seeded(rules, 7);
        let out = engine
            .choose_move(&board, Side::Player, &SearchParams::default())
            .expect("random engine never fails");
        let picked = out.best_move.expect("opening has moves");
        assert!(LegalMoveGenerator::new(rules)
            .legal_moves(&board, Side::Player)
            .contains(&picked));
    }

    #[test]
    fn same_seed_same_choices() {
        let board = Board::new_game();
        let mut a = RandomEngine::seeded(RuleSet::classic(), 42);
        let mut b = RandomEngine::seeded(RuleSet::classic(), 42);
        for side in [Side::Bot, Side::Player, Side::Bot] {
            let params = SearchParams::default();
            assert_eq!(
                a.choose_move(&board, side, &params).expect("ok").best_move,
                b.choose_move(&board, side, &params).expect("ok").best_move
            );
        }
    }

    #[test]
    fn no_legal_move_yields_none() {
        let board = Board::from_pieces([(Position::new(6, 1), Piece::PLAYER_MAN)]).expect("valid");
        let out = RandomEngine::seeded(RuleSet::classic(), 1)
            .choose_move(&board, Side::Bot, &SearchParams::default())
            .expect("ok");
        assert_eq!(out.best_move, None);
    }
}
