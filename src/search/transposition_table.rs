//! Bounded transposition cache for the minimax search.
//!
//! Entries are keyed by the packed board, the remaining depth and the side to
//! maximize. When the table is full it is cleared wholesale before the next
//! insert; there is no per-entry replacement policy.

use std::collections::HashMap;

use log::debug;

use crate::game_state::board::BoardKey;
use crate::game_state::draughts_rules::CACHE_SIZE_LIMIT;
use crate::move_generation::move_generator::PlannedMove;
use crate::search::board_scoring::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub board: BoardKey,
    pub depth: u8,
    pub maximizing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TTEntry {
    pub score: Score,
    pub bound: Bound,
    pub best_move: Option<PlannedMove>,
}

impl TTEntry {
    /// Whether the stored score settles a node searched with `(alpha, beta)`.
    pub fn cutoff(&self, alpha: Score, beta: Score) -> bool {
        match self.bound {
            Bound::Exact => true,
            Bound::Lower => self.score >= beta,
            Bound::Upper => self.score <= alpha,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
    pub clears: u64,
}

#[derive(Debug, Clone)]
pub struct SearchCache {
    entries: HashMap<CacheKey, TTEntry>,
    capacity: usize,
    stats: TTStats,
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new(CACHE_SIZE_LIMIT)
    }
}

impl SearchCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            capacity,
            stats: TTStats::default(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> TTStats {
        self.stats
    }

    /// Drop every entry. Statistics are kept so callers can see clears.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.stats.clears += 1;
            debug!("search_cache clear entries={}", self.entries.len());
        }
        self.entries.clear();
    }

    /// Entry for `key` if its bound settles the `(alpha, beta)` window.
    /// Only such entries count as hits.
    pub fn probe(&mut self, key: &CacheKey, alpha: Score, beta: Score) -> Option<&TTEntry> {
        self.stats.probes += 1;
        let hit = self.entries.get(key).filter(|entry| entry.cutoff(alpha, beta));
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    pub fn store(&mut self, key: CacheKey, entry: TTEntry) {
        self.stats.stores += 1;
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&key) {
            self.clear();
        }
        self.entries.insert(key, entry);
    }
}
