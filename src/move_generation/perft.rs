use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;
use crate::move_generation::generate_all_boards::generate_all_boards;

/// Count the positions reachable from `board` in exactly `depth` plies of
/// alternating play, starting with `side`.
///
/// Decided positions and positions where the side to move is stuck count as
/// leaves. Used by tests and benchmarks as a move-generation checksum.
pub fn count_positions(board: &Board, side: Side, depth: u8) -> u64 {
    if depth == 0 || board.winner().is_some() {
        return 1;
    }

    let successors = generate_all_boards(board, side);
    if successors.is_empty() {
        return 1;
    }

    successors
        .iter()
        .map(|next| count_positions(next, side.opposite(), depth - 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::Piece;

    #[test]
    fn depth_zero_counts_the_position_itself() {
        let board = Board::new_game();
        assert_eq!(count_positions(&board, Side::Dark, 0), 1);
    }

    #[test]
    fn opening_counts_match_known_values() {
        let board = Board::new_game();

        assert_eq!(count_positions(&board, Side::Dark, 1), 7);
        assert_eq!(count_positions(&board, Side::Light, 1), 7);
        assert_eq!(count_positions(&board, Side::Dark, 2), 49);
        assert_eq!(count_positions(&board, Side::Light, 2), 49);
    }

    #[test]
    fn decided_positions_are_leaves_at_any_depth() {
        let mut board = Board::empty();
        board.place(Piece::new(5, 0, Side::Dark));

        assert_eq!(count_positions(&board, Side::Dark, 4), 1);
    }

    #[test]
    fn stuck_side_counts_as_a_leaf() {
        let mut board = Board::empty();
        board.place(Piece::new(7, 0, Side::Dark));
        board.place(Piece::new(6, 1, Side::Light));
        board.place(Piece::new(5, 2, Side::Light));

        assert_eq!(count_positions(&board, Side::Dark, 3), 1);
    }
}
