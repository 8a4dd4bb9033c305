//! Whole-board successor enumeration for the search.
//!
//! The search branches on complete board values rather than move records:
//! each candidate move of each piece is applied to an independent clone of
//! the input position. Enumeration order is fixed (row-major pieces, ordered
//! destinations), which the first-best tie-break in the search relies on.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;
use crate::move_generation::candidate_moves::valid_moves;
use crate::move_generation::move_apply::apply_move_to_board;

/// Every position reachable by one move of `side` from `board`.
///
/// Each returned board is a deep, independent value; mutating one never
/// affects the input or a sibling.
pub fn generate_all_boards(board: &Board, side: Side) -> Vec<Board> {
    let mut boards = Vec::new();

    for piece in board.all_pieces(side) {
        for (destination, captured) in valid_moves(board, piece) {
            let mut next = board.clone();
            apply_move_to_board(&mut next, piece, destination, &captured);
            boards.push(next);
        }
    }

    boards
}
