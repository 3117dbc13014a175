use crate::errors::DraughtsResult;
use crate::game_state::draughts_types::*;
use crate::move_generation::legal_move_apply::apply_planned_move;
use crate::move_generation::move_generator::{MoveGenerator, PlannedMove};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
    }
}

/// Count the leaf turns `depth` plies below `board`, sides alternating from
/// `side`. A capture chain is one turn; `captures` counts leaf turns that capture.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    side: Side,
    depth: u8,
) -> DraughtsResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for planned in generator.legal_moves(board, side) {
        perft_recurse(generator, board, side, &planned, depth, 1, &mut total)?;
    }
    Ok(total)
}

/// Per-root-move breakdown, in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    side: Side,
    depth: u8,
) -> DraughtsResult<Vec<(PlannedMove, PerftCounts)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    generator
        .legal_moves(board, side)
        .into_iter()
        .map(|planned| {
            let mut counts = PerftCounts::default();
            perft_recurse(generator, board, side, &planned, depth, 1, &mut counts)?;
            Ok((planned, counts))
        })
        .collect()
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    side: Side,
    planned: &PlannedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> DraughtsResult<()> {
    if current_depth == search_depth {
        counts.nodes += 1;
        if planned.is_capture() {
            counts.captures += 1;
        }
        return Ok(());
    }

    let child = apply_planned_move(board, planned)?;
    let next_side = side.opposite();
    let mut local = PerftCounts::default();
    for reply in generator.legal_moves(&child, next_side) {
        perft_recurse(generator, &child, next_side, &reply, search_depth, current_depth + 1, &mut local)?;
    }
    counts.merge(local);
    Ok(())
}
