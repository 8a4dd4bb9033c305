use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Piece, Square};

/// Apply one candidate move to `board`: relocate `piece` to `destination` and
/// take the captured pieces off the board.
///
/// The single board-mutation path shared by interactive play and successor
/// enumeration. `captured` is the destination's entry from the candidate
/// mapping; an empty slice is a plain step.
pub fn apply_move_to_board(
    board: &mut Board,
    piece: Piece,
    destination: Square,
    captured: &[Piece],
) {
    let (row, col) = destination;
    board.move_piece(piece, row, col);
    if !captured.is_empty() {
        board.remove(captured);
    }
}
