//! Random-choice engine.
//!
//! Selects uniformly from the legal successor boards and is primarily used
//! for diagnostics, integration testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;
use crate::move_generation::generate_all_boards::generate_all_boards;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Damson Random"
    }

    fn choose_board(
        &mut self,
        board: &Board,
        side: Side,
        _params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let candidates = generate_all_boards(board, side);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine successors {}",
            candidates.len()
        ));

        if candidates.is_empty() {
            out.best_board = None;
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = candidates
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random board")?;

        out.best_board = Some(picked.clone());
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picked_board_is_one_of_the_legal_successors() {
        let board = Board::new_game();
        let successors = generate_all_boards(&board, Side::Dark);
        let mut engine = RandomEngine::new();

        let out = engine
            .choose_board(&board, Side::Dark, &GoParams::default())
            .expect("choosing from the opening should succeed");

        let picked = out.best_board.expect("the opening has successors");
        assert!(successors.contains(&picked));
    }

    #[test]
    fn a_stuck_side_gets_no_board() {
        use crate::game_state::checkers_types::Piece;

        let mut board = Board::empty();
        board.place(Piece::new(7, 0, Side::Dark));
        board.place(Piece::new(6, 1, Side::Light));
        board.place(Piece::new(5, 2, Side::Light));
        let mut engine = RandomEngine::new();

        let out = engine
            .choose_board(&board, Side::Dark, &GoParams::default())
            .expect("a stuck side still answers");

        assert!(out.best_board.is_none());
        assert!(out.info_lines[0].ends_with("successors 0"));
    }
}
