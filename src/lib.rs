//! Crate root module declarations for the corgi draughts engine.
//!
//! Exposes the rules engine (board, move generation, capture priority,
//! execution and status), the minimax search with its transposition cache,
//! the engines built on it, the turn-by-turn game session and the text
//! utilities used by tests, benches and the self-play binary.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod draughts_rules;
    pub mod draughts_types;
    pub mod game_mode;
    pub mod game_session;
    pub mod game_status;
}

pub mod move_generation {
    pub mod capture_priority;
    pub mod capture_resolver;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_man;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod transposition_table;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod board_notation;
    pub mod match_harness;
    pub mod render_board;
}
