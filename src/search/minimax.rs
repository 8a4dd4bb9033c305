//! Fixed-depth minimax over whole successor boards.
//!
//! The search enumerates complete positions rather than move records and
//! returns the chosen successor board alongside its score, so callers adopt
//! a result by substituting the board wholesale. There is no pruning, move
//! ordering, or memoization; the value of this search is that its output is
//! exactly reproducible.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;
use crate::move_generation::generate_all_boards::generate_all_boards;
use crate::search::board_scoring::{generate_losing_score, BoardScorer, Score};

/// Evaluate `position` to `depth` plies and return the best score together
/// with the successor board that achieves it.
///
/// Light maximizes and Dark minimizes. At depth zero or in a decided
/// position the position itself is returned with its static score. Among
/// children with equal scores the first one enumerated wins; comparisons are
/// strict, so later ties never displace an earlier choice. A side to move
/// with no successors scores as its canonical loss, again returning the
/// position itself.
pub fn minimax(
    position: &Board,
    depth: u8,
    maximizing: bool,
    scorer: &dyn BoardScorer,
) -> (Score, Board) {
    if depth == 0 || position.winner().is_some() {
        return (scorer.score(position), position.clone());
    }

    let side = if maximizing { Side::Light } else { Side::Dark };
    let mut successors = generate_all_boards(position, side).into_iter();

    // Evaluate the first successor to initialize the running best.
    let Some(first) = successors.next() else {
        return (generate_losing_score(side), position.clone());
    };
    let (mut best_score, _) = minimax(&first, depth - 1, !maximizing, scorer);
    let mut best_board = first;

    for candidate in successors {
        let (score, _) = minimax(&candidate, depth - 1, !maximizing, scorer);
        let better = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if better {
            best_score = score;
            best_board = candidate;
        }
    }

    (best_score, best_board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::Piece;
    use crate::search::board_scoring::{MaterialScorer, MAX_SCORE, MIN_SCORE};

    fn scorer() -> MaterialScorer {
        MaterialScorer::default()
    }

    #[test]
    fn depth_zero_returns_the_position_with_its_static_score() {
        let board = Board::new_game();

        let (score, best) = minimax(&board, 0, true, &scorer());

        assert_eq!(score, 0.0);
        assert_eq!(best, board);
    }

    #[test]
    fn opening_depth_one_keeps_the_first_enumerated_child() {
        let board = Board::new_game();

        let (score, best) = minimax(&board, 1, true, &scorer());

        // Every opening reply scores zero, so the tie-break keeps the first
        // child: the light man on (2, 1) stepping to (3, 0).
        assert_eq!(score, 0.0);
        assert_eq!(best.piece_at(2, 1), None);
        assert!(best.piece_at(3, 0).is_some());
    }

    #[test]
    fn search_prefers_a_winning_capture() {
        let mut board = Board::empty();
        board.place(Piece::new(4, 3, Side::Light));
        board.place(Piece::new(5, 4, Side::Dark));

        let (score, best) = minimax(&board, 1, true, &scorer());

        assert_eq!(score, 1.0);
        assert_eq!(best.remaining(Side::Dark), 0);
        assert!(best.piece_at(6, 5).is_some());
    }

    #[test]
    fn search_avoids_a_losing_reply() {
        // Stepping to (5, 2) lets the dark man on (6, 3) jump back onto the
        // vacated (4, 1); stepping to (5, 0) is safe.
        let mut board = Board::empty();
        board.place(Piece::new(4, 1, Side::Light));
        board.place(Piece::new(6, 3, Side::Dark));

        let (score, best) = minimax(&board, 2, true, &scorer());

        assert_eq!(score, 0.0);
        assert!(best.piece_at(5, 0).is_some());
        assert_eq!(best.piece_at(5, 2), None);
    }

    #[test]
    fn stuck_maximizer_scores_as_a_loss() {
        let mut board = Board::empty();
        board.place(Piece::new(0, 7, Side::Light));
        board.place(Piece::new(1, 6, Side::Dark));
        board.place(Piece::new(2, 5, Side::Dark));

        let (score, best) = minimax(&board, 3, true, &scorer());

        assert_eq!(score, MIN_SCORE);
        assert_eq!(best, board);
    }

    #[test]
    fn stuck_minimizer_scores_as_a_light_win() {
        let mut board = Board::empty();
        board.place(Piece::new(7, 0, Side::Dark));
        board.place(Piece::new(6, 1, Side::Light));
        board.place(Piece::new(5, 2, Side::Light));

        let (score, best) = minimax(&board, 3, false, &scorer());

        assert_eq!(score, MAX_SCORE);
        assert_eq!(best, board);
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let board = Board::new_game();

        let first = minimax(&board, 3, false, &scorer());
        let second = minimax(&board, 3, false, &scorer());

        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
    }
}
