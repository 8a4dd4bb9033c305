//! Crate root module declarations for the Damson checkers engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines, the terminal front end, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod candidate_moves;
    pub mod generate_all_boards;
    pub mod move_apply;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod cli {
    pub mod game_loop;
}

pub mod utils {
    pub mod board_layout;
    pub mod pdn;
    pub mod render_board;
}
