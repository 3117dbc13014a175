//! Minimax search with alpha-beta pruning over whole turns.
//!
//! The bot is always the maximizing side. Each ply is one complete turn of
//! the side to move (a capture chain is a single ply), and results are
//! memoized in a bounded `SearchCache` together with the bound they were
//! computed under.

use log::error;

use crate::game_state::draughts_rules::{CACHE_SIZE_LIMIT, WIN_SCORE};
use crate::game_state::draughts_types::*;
use crate::move_generation::legal_move_apply::apply_planned_move;
use crate::move_generation::move_generator::{MoveGenerator, PlannedMove};
use crate::search::board_scoring::{BoardScorer, Score};
use crate::search::transposition_table::{Bound, CacheKey, SearchCache, TTEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub cache_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            cache_capacity: CACHE_SIZE_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<PlannedMove>,
    pub score: Score,
    pub nodes: u64,
    pub cache_hits: u64,
}

struct SearchContext<'a, G, S> {
    generator: &'a G,
    scorer: &'a S,
    cache: &'a mut SearchCache,
    nodes: u64,
    cache_hits: u64,
}

/// Search `depth` turns ahead with `side` to move.
///
/// At depth 0 the static score is returned with no move. A side without a
/// legal move scores as lost: `-WIN_SCORE` for the bot, `+WIN_SCORE` for the
/// player.
pub fn minimax_search<G: MoveGenerator, S: BoardScorer>(
    board: &Board,
    side: Side,
    depth: u8,
    generator: &G,
    scorer: &S,
    cache: &mut SearchCache,
) -> SearchResult {
    let mut ctx = SearchContext {
        generator,
        scorer,
        cache,
        nodes: 0,
        cache_hits: 0,
    };
    let (score, best_move) = minimax(board, side, depth, Score::NEG_INFINITY, Score::INFINITY, &mut ctx);

    SearchResult {
        best_move,
        score,
        nodes: ctx.nodes,
        cache_hits: ctx.cache_hits,
    }
}

fn minimax<G: MoveGenerator, S: BoardScorer>(
    board: &Board,
    side: Side,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    ctx: &mut SearchContext<'_, G, S>,
) -> (Score, Option<PlannedMove>) {
    ctx.nodes += 1;

    if depth == 0 {
        return (ctx.scorer.score(board), None);
    }

    let maximizing = side == Side::Bot;
    let key = CacheKey {
        board: board.cache_key(),
        depth,
        maximizing,
    };
    if let Some(entry) = ctx.cache.probe(&key, alpha, beta) {
        ctx.cache_hits += 1;
        return (entry.score, entry.best_move.clone());
    }

    let moves = ctx.generator.legal_moves(board, side);
    if moves.is_empty() {
        let score = if maximizing { -WIN_SCORE } else { WIN_SCORE };
        ctx.cache.store(
            key,
            TTEntry {
                score,
                bound: Bound::Exact,
                best_move: None,
            },
        );
        return (score, None);
    }

    let (alpha_orig, beta_orig) = (alpha, beta);
    let mut best_score = if maximizing { Score::NEG_INFINITY } else { Score::INFINITY };
    let mut best_move: Option<PlannedMove> = None;

    for planned in moves {
        let child = match apply_planned_move(board, &planned) {
            Ok(child) => child,
            Err(err) => {
                error!("search skipped move from={} to={}: {err}", planned.from, planned.to());
                continue;
            }
        };

        let (score, _) = minimax(&child, side.opposite(), depth - 1, alpha, beta, ctx);

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(planned);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(planned);
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            break;
        }
    }

    if best_move.is_none() {
        return (ctx.scorer.score(board), None);
    }

    let bound = if best_score <= alpha_orig {
        Bound::Upper
    } else if best_score >= beta_orig {
        Bound::Lower
    } else {
        Bound::Exact
    };
    ctx.cache.store(
        key,
        TTEntry {
            score: best_score,
            bound,
            best_move: best_move.clone(),
        },
    );

    (best_score, best_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::draughts_rules::RuleSet;
    use crate::move_generation::move_generator::LegalMoveGenerator;
    use crate::search::board_scoring::PositionalScorer;
    use crate::utils::board_notation::parse_board;

    fn search(board: &Board, side: Side, depth: u8, cache: &mut SearchCache) -> SearchResult {
        let rules = RuleSet::classic();
        minimax_search(
            board,
            side,
            depth,
            &LegalMoveGenerator::new(rules),
            &PositionalScorer::new(rules),
            cache,
        )
    }

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn depth_zero_returns_the_static_score() {
        let board = Board::new_game();
        let result = search(&board, Side::Bot, 0, &mut SearchCache::default());
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn stuck_bot_scores_as_lost() {
        let board = parse_board(
            "
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            .c........
            b.b.......
            ",
        )
        .expect("valid board");
        let result = search(&board, Side::Bot, 2, &mut SearchCache::default());
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -WIN_SCORE);
    }

    #[test]
    fn forced_capture_is_the_only_candidate() {
        let board = Board::from_pieces([
            (pos(4, 3), Piece::BOT_MAN),
            (pos(5, 4), Piece::PLAYER_MAN),
            (pos(9, 0), Piece::PLAYER_MAN),
        ])
        .expect("valid");
        let result = search(&board, Side::Bot, 2, &mut SearchCache::default());
        let best = result.best_move.expect("bot has a move");
        assert_eq!(best.from, pos(4, 3));
        assert_eq!(best.final_square(), pos(6, 5));
        assert!(best.must_capture);
    }

    #[test]
    fn deeper_search_stops_hanging_a_man() {
        // Stepping to (5,4) looks best statically but walks into (6,5) x (5,4).
        let board = Board::from_pieces([
            (pos(0, 9), Piece::BOT_MAN),
            (pos(4, 3), Piece::BOT_MAN),
            (pos(6, 5), Piece::PLAYER_MAN),
            (pos(9, 0), Piece::PLAYER_MAN),
        ])
        .expect("valid");

        let greedy = search(&board, Side::Bot, 1, &mut SearchCache::default());
        assert_eq!(greedy.score, 3.5);
        assert_eq!(greedy.best_move.expect("move").to(), pos(5, 4));

        let careful = search(&board, Side::Bot, 2, &mut SearchCache::default());
        assert_eq!(careful.score, 1.0);
        assert_ne!(careful.best_move.expect("move").to(), pos(5, 4));
    }

    #[test]
    fn repeated_search_is_deterministic_and_hits_the_cache() {
        let board = Board::new_game();
        let mut cache = SearchCache::default();
        let first = search(&board, Side::Bot, 3, &mut cache);
        let second = search(&board, Side::Bot, 3, &mut cache);

        assert_eq!(first.score, second.score);
        assert!(first.best_move.is_some());
        assert!(second.cache_hits > 0);
        assert!(second.nodes < first.nodes);
    }

    #[test]
    fn reported_cache_hits_match_the_cache_stats() {
        let board = Board::new_game();
        let mut cache = SearchCache::default();
        let first = search(&board, Side::Bot, 3, &mut cache);
        let second = search(&board, Side::Player, 3, &mut cache);
        let third = search(&board, Side::Bot, 3, &mut cache);

        assert!(third.cache_hits > 0);
        assert_eq!(
            first.cache_hits + second.cache_hits + third.cache_hits,
            cache.stats().hits
        );
    }

    #[test]
    fn fresh_cache_gives_the_same_score() {
        let board = Board::new_game();
        let cached = {
            let mut cache = SearchCache::default();
            search(&board, Side::Bot, 2, &mut cache);
            search(&board, Side::Bot, 3, &mut cache).score
        };
        let fresh = search(&board, Side::Bot, 3, &mut SearchCache::default()).score;
        assert_eq!(cached, fresh);
    }

    #[test]
    fn player_rooted_search_minimizes() {
        // The player man on (6,5) can take (5,4); the bot man on (0,9) is safe.
        let board = Board::from_pieces([
            (pos(0, 9), Piece::BOT_MAN),
            (pos(5, 4), Piece::BOT_MAN),
            (pos(6, 5), Piece::PLAYER_MAN),
            (pos(9, 0), Piece::PLAYER_MAN),
        ])
        .expect("valid");
        let result = search(&board, Side::Player, 1, &mut SearchCache::default());
        let best = result.best_move.expect("player has a move");
        assert_eq!(best.from, pos(6, 5));
        assert!(best.is_capture());
        assert!(result.score < 0.0);
    }
}
