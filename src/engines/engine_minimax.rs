//! Minimax bot engine.
//!
//! Owns its move generator, scorer and transposition cache so each engine
//! instance is isolated. The cache survives between turns of one game and is
//! dropped by `new_game`.

use log::warn;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::DraughtsResult;
use crate::game_state::draughts_rules::RuleSet;
use crate::game_state::draughts_types::*;
use crate::move_generation::move_generator::{LegalMoveGenerator, PlannedMove};
use crate::search::board_scoring::PositionalScorer;
use crate::search::minimax::{minimax_search, SearchConfig, SearchResult};
use crate::search::transposition_table::{SearchCache, TTStats};

pub struct MinimaxEngine {
    config: SearchConfig,
    move_generator: LegalMoveGenerator,
    scorer: PositionalScorer,
    cache: SearchCache,
}

impl MinimaxEngine {
    pub fn new(rules: RuleSet, config: SearchConfig) -> Self {
        Self {
            config,
            move_generator: LegalMoveGenerator::new(rules),
            scorer: PositionalScorer::new(rules),
            cache: SearchCache::new(config.cache_capacity),
        }
    }

    pub fn with_depth(rules: RuleSet, depth: u8) -> Self {
        Self::new(
            rules,
            SearchConfig {
                depth,
                ..SearchConfig::default()
            },
        )
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.config.depth
    }

    /// Full search result for `side` to move at `depth` turns.
    pub fn search(&mut self, board: &Board, side: Side, depth: u8) -> SearchResult {
        minimax_search(
            board,
            side,
            depth,
            &self.move_generator,
            &self.scorer,
            &mut self.cache,
        )
    }

    /// Best turn for the bot, or `None` at depth 0 or when the bot is stuck.
    pub fn get_best_move(&mut self, board: &Board, depth: u8) -> Option<PlannedMove> {
        self.search(board, Side::Bot, depth).best_move
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> TTStats {
        self.cache.stats()
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(RuleSet::default(), SearchConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn new_game(&mut self) {
        self.clear_cache();
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: Side,
        params: &SearchParams,
    ) -> DraughtsResult<EngineOutput> {
        // A zero-depth search never yields a move.
        let depth = params.depth.unwrap_or(self.config.depth).max(1);
        let result = self.search(board, side, depth);

        if result.best_move.is_none() {
            warn!("minimax_engine side={side} found no move");
        }

        let stats = self.cache.stats();
        Ok(EngineOutput {
            best_move: result.best_move,
            score: Some(result.score),
            info_lines: vec![
                format!(
                    "minimax_engine side={side} depth={depth} score={} nodes={} cache_hits={}",
                    result.score, result.nodes, result.cache_hits
                ),
                format!(
                    "minimax_engine cache entries={} probes={} hits={} stores={} clears={}",
                    self.cache.len(),
                    stats.probes,
                    stats.hits,
                    stats.stores,
                    stats.clears
                ),
            ],
        })
    }
}
