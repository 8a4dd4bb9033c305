//! Pluggable board evaluation interfaces and the baseline material scorer.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.
//! Scores are modeled as floating point values so fractional weights (the king
//! bonus) and large sentinel values coexist in one scale.
//!
//! Conventions:
//! - Positive scores favor Light; negative scores favor Dark. The minimax
//!   alternates explicit max/min levels, so scores are absolute rather than
//!   side-to-move relative.
//! - generate_winning_score / generate_losing_score return extreme sentinel
//!   values used to mark decided positions in the search.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;

/// Numeric representation of an evaluation score.
pub type Score = f32;

/// A very low sentinel score representing a decisive loss for Light.
pub const MIN_SCORE: Score = -1E9;
/// A very high sentinel score representing a decisive win for Light.
pub const MAX_SCORE: Score = 1E9;

/// Relative worth of a crowned piece on top of its base material value.
pub const DEFAULT_KING_WEIGHT: Score = 0.5;

/// Canonical winning score for the given side (`MAX_SCORE` for Light,
/// `MIN_SCORE` for Dark).
pub const fn generate_winning_score(side: Side) -> Score {
    match side {
        Side::Light => MAX_SCORE,
        Side::Dark => MIN_SCORE,
    }
}

/// Canonical losing score for the given side: the opposite extreme of its
/// winning score.
pub const fn generate_losing_score(side: Side) -> Score {
    generate_winning_score(side.opposite())
}

pub trait BoardScorer: Send + Sync {
    /// Score the position, positive favoring Light.
    fn score(&self, board: &Board) -> Score;
}

/// Material balance with a configurable bonus for crowned pieces.
#[derive(Debug, Clone, Copy)]
pub struct MaterialScorer {
    pub king_weight: Score,
}

impl MaterialScorer {
    #[inline]
    pub const fn new(king_weight: Score) -> Self {
        Self { king_weight }
    }
}

impl Default for MaterialScorer {
    fn default() -> Self {
        Self::new(DEFAULT_KING_WEIGHT)
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> Score {
        let men =
            Score::from(board.remaining(Side::Light)) - Score::from(board.remaining(Side::Dark));
        let kings = Score::from(board.kings(Side::Light)) - Score::from(board.kings(Side::Dark));
        men + self.king_weight * kings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::Piece;

    fn crowned(row: i8, col: i8, side: Side) -> Piece {
        Piece {
            row,
            col,
            side,
            king: true,
        }
    }

    #[test]
    fn starting_position_is_balanced() {
        let board = Board::new_game();
        let scorer = MaterialScorer::default();
        assert_eq!(scorer.score(&board), 0.0);
    }

    #[test]
    fn material_difference_counts_one_point_per_man() {
        let mut board = Board::empty();
        board.place(Piece::new(0, 1, Side::Light));
        board.place(Piece::new(1, 2, Side::Light));
        board.place(Piece::new(7, 0, Side::Dark));

        let scorer = MaterialScorer::default();
        assert_eq!(scorer.score(&board), 1.0);
    }

    #[test]
    fn kings_earn_the_configured_bonus() {
        let mut board = Board::empty();
        board.place(crowned(4, 3, Side::Light));
        board.place(Piece::new(7, 0, Side::Dark));

        assert_eq!(MaterialScorer::default().score(&board), 0.5);
        assert_eq!(MaterialScorer::new(2.0).score(&board), 2.0);
    }

    #[test]
    fn winning_and_losing_scores_are_opposite_extremes() {
        assert_eq!(generate_winning_score(Side::Light), MAX_SCORE);
        assert_eq!(generate_winning_score(Side::Dark), MIN_SCORE);
        assert_eq!(generate_losing_score(Side::Light), MIN_SCORE);
        assert_eq!(generate_losing_score(Side::Dark), MAX_SCORE);
    }
}
