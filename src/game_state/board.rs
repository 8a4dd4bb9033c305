//! Grid board representation with per-side material bookkeeping.
//!
//! `Board` is the central model for the engine. It stores the 8x8 piece grid
//! together with remaining-piece and king counters, and offers the primitive
//! mutations (relocate, crown, capture removal) that move application and
//! search branching build on. Boards clone cheaply and independently, which is
//! what lets the search hand whole successor positions around by value.

use crate::game_state::checkers_rules::{
    in_bounds, is_playable_square, BOARD_COLS, BOARD_ROWS, SETUP_ROWS_PER_SIDE,
};
use crate::game_state::checkers_types::{Piece, Side};

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_COLS as usize]; BOARD_ROWS as usize],
    light_left: u8,
    dark_left: u8,
    light_kings: u8,
    dark_kings: u8,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces and zeroed counters.
    pub fn empty() -> Self {
        Self {
            grid: [[None; BOARD_COLS as usize]; BOARD_ROWS as usize],
            light_left: 0,
            dark_left: 0,
            light_kings: 0,
            dark_kings: 0,
        }
    }

    /// The standard starting position: twelve men per side on the playable
    /// squares of the three rows nearest each player's edge, Light on top.
    pub fn new_game() -> Self {
        let mut board = Self::empty();

        for row in 0..SETUP_ROWS_PER_SIDE {
            for col in 0..BOARD_COLS {
                if is_playable_square(row, col) {
                    board.place(Piece::new(row, col, Side::Light));
                }
            }
        }
        for row in (BOARD_ROWS - SETUP_ROWS_PER_SIDE)..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                if is_playable_square(row, col) {
                    board.place(Piece::new(row, col, Side::Dark));
                }
            }
        }

        board
    }

    /// Put a piece on its own square and credit the owner's counters.
    ///
    /// The setup and layout-parsing entry point; the slot is assumed free.
    pub fn place(&mut self, piece: Piece) {
        self.grid[piece.row as usize][piece.col as usize] = Some(piece);
        match piece.side {
            Side::Light => {
                self.light_left += 1;
                if piece.king {
                    self.light_kings += 1;
                }
            }
            Side::Dark => {
                self.dark_left += 1;
                if piece.king {
                    self.dark_kings += 1;
                }
            }
        }
    }

    /// Piece on `(row, col)`, or `None` for empty or out-of-bounds squares.
    #[inline]
    pub fn piece_at(&self, row: i8, col: i8) -> Option<Piece> {
        if !in_bounds(row, col) {
            return None;
        }
        self.grid[row as usize][col as usize]
    }

    /// Relocate `piece` to `(row, col)`, crowning it when it reaches its
    /// side's far row.
    ///
    /// Crowning applies to men only, so a king re-entering the far row never
    /// bumps the king counter a second time. Coordinates are trusted to come
    /// from generated moves; the destination square must be empty.
    pub fn move_piece(&mut self, piece: Piece, row: i8, col: i8) {
        self.grid[piece.row as usize][piece.col as usize] = None;

        let mut moved = piece;
        moved.row = row;
        moved.col = col;
        if !moved.king && row == moved.side.promotion_row() {
            moved.king = true;
            match moved.side {
                Side::Light => self.light_kings += 1,
                Side::Dark => self.dark_kings += 1,
            }
        }

        self.grid[row as usize][col as usize] = Some(moved);
    }

    /// Clear every captured square and debit the owners' remaining counts.
    ///
    /// Only squares that actually held a piece are debited, so duplicate or
    /// stale entries cannot drive a counter out of sync with the grid.
    pub fn remove(&mut self, captured: &[Piece]) {
        for piece in captured {
            let slot = &mut self.grid[piece.row as usize][piece.col as usize];
            if let Some(taken) = slot.take() {
                match taken.side {
                    Side::Light => self.light_left = self.light_left.saturating_sub(1),
                    Side::Dark => self.dark_left = self.dark_left.saturating_sub(1),
                }
            }
        }
    }

    /// The side that has captured all opposing pieces, if either has.
    pub fn winner(&self) -> Option<Side> {
        if self.dark_left == 0 {
            Some(Side::Light)
        } else if self.light_left == 0 {
            Some(Side::Dark)
        } else {
            None
        }
    }

    /// All pieces of `side` in row-major scan order.
    ///
    /// This ordering is what makes successor enumeration, and therefore the
    /// search's first-best tie-break, reproducible.
    pub fn all_pieces(&self, side: Side) -> Vec<Piece> {
        let mut pieces = Vec::new();
        for row in &self.grid {
            for slot in row {
                if let Some(piece) = slot {
                    if piece.side == side {
                        pieces.push(*piece);
                    }
                }
            }
        }
        pieces
    }

    /// Remaining piece count for `side`.
    #[inline]
    pub fn remaining(&self, side: Side) -> u8 {
        match side {
            Side::Light => self.light_left,
            Side::Dark => self.dark_left,
        }
    }

    /// Crowned piece count for `side`.
    #[inline]
    pub fn kings(&self, side: Side) -> u8 {
        match side {
            Side::Light => self.light_kings,
            Side::Dark => self.dark_kings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_rules::PIECES_PER_SIDE;

    #[test]
    fn new_game_places_twelve_men_per_side() {
        let board = Board::new_game();

        assert_eq!(board.remaining(Side::Light), PIECES_PER_SIDE);
        assert_eq!(board.remaining(Side::Dark), PIECES_PER_SIDE);
        assert_eq!(board.kings(Side::Light), 0);
        assert_eq!(board.kings(Side::Dark), 0);
        assert_eq!(board.winner(), None);

        let light = board.piece_at(0, 1).expect("light man on (0, 1)");
        assert_eq!(light.side, Side::Light);
        let dark = board.piece_at(5, 0).expect("dark man on (5, 0)");
        assert_eq!(dark.side, Side::Dark);
        assert_eq!(board.piece_at(3, 2), None);
        assert_eq!(board.piece_at(4, 5), None);
    }

    #[test]
    fn new_game_pieces_sit_on_playable_squares_only() {
        let board = Board::new_game();
        let mut occupied = 0;
        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                if let Some(piece) = board.piece_at(row, col) {
                    assert!(is_playable_square(row, col));
                    assert_eq!(piece.location(), (row, col));
                    occupied += 1;
                }
            }
        }
        assert_eq!(
            occupied,
            u32::from(board.remaining(Side::Light)) + u32::from(board.remaining(Side::Dark))
        );
    }

    #[test]
    fn piece_at_is_total_over_out_of_bounds_coordinates() {
        let board = Board::new_game();
        assert_eq!(board.piece_at(-1, 1), None);
        assert_eq!(board.piece_at(8, 0), None);
        assert_eq!(board.piece_at(0, -3), None);
        assert_eq!(board.piece_at(3, 8), None);
    }

    #[test]
    fn move_piece_relocates_and_updates_coordinates() {
        let mut board = Board::new_game();
        let piece = board.piece_at(5, 0).expect("dark man on (5, 0)");

        board.move_piece(piece, 4, 1);

        assert_eq!(board.piece_at(5, 0), None);
        let moved = board.piece_at(4, 1).expect("man moved to (4, 1)");
        assert_eq!(moved.location(), (4, 1));
        assert!(!moved.king);
        assert_eq!(board.remaining(Side::Dark), PIECES_PER_SIDE);
    }

    #[test]
    fn moving_a_man_onto_the_far_row_crowns_it_once() {
        let mut board = Board::empty();
        board.place(Piece::new(6, 1, Side::Light));

        let man = board.piece_at(6, 1).expect("light man placed");
        board.move_piece(man, 7, 0);
        let king = board.piece_at(7, 0).expect("crowned king");
        assert!(king.king);
        assert_eq!(board.kings(Side::Light), 1);

        // Re-entering the far row as a king must not crown again.
        board.move_piece(king, 6, 1);
        let king = board.piece_at(6, 1).expect("king moved off the far row");
        board.move_piece(king, 7, 2);
        assert!(board.piece_at(7, 2).expect("king back on far row").king);
        assert_eq!(board.kings(Side::Light), 1);
    }

    #[test]
    fn dark_men_crown_on_row_zero() {
        let mut board = Board::empty();
        board.place(Piece::new(1, 2, Side::Dark));

        let man = board.piece_at(1, 2).expect("dark man placed");
        board.move_piece(man, 0, 1);

        assert!(board.piece_at(0, 1).expect("crowned dark king").king);
        assert_eq!(board.kings(Side::Dark), 1);
    }

    #[test]
    fn remove_debits_only_occupied_squares() {
        let mut board = Board::new_game();
        let victim = board.piece_at(5, 0).expect("dark man on (5, 0)");

        board.remove(&[victim]);
        assert_eq!(board.remaining(Side::Dark), PIECES_PER_SIDE - 1);
        assert_eq!(board.piece_at(5, 0), None);

        // A stale duplicate points at an already-empty square.
        board.remove(&[victim]);
        assert_eq!(board.remaining(Side::Dark), PIECES_PER_SIDE - 1);
    }

    #[test]
    fn winner_requires_total_elimination() {
        let mut board = Board::empty();
        board.place(Piece::new(0, 1, Side::Light));
        board.place(Piece::new(7, 0, Side::Dark));
        assert_eq!(board.winner(), None);

        let dark = board.piece_at(7, 0).expect("dark man placed");
        board.remove(&[dark]);
        assert_eq!(board.winner(), Some(Side::Light));

        let mut board = Board::empty();
        board.place(Piece::new(7, 0, Side::Dark));
        assert_eq!(board.winner(), Some(Side::Dark));
    }

    #[test]
    fn all_pieces_scans_in_row_major_order() {
        let board = Board::new_game();

        let light = board.all_pieces(Side::Light);
        assert_eq!(light.len(), usize::from(PIECES_PER_SIDE));
        assert_eq!(light[0].location(), (0, 1));
        assert_eq!(light[1].location(), (0, 3));
        assert_eq!(light[11].location(), (2, 7));

        let dark = board.all_pieces(Side::Dark);
        assert_eq!(dark[0].location(), (5, 0));
        assert_eq!(dark[11].location(), (7, 6));
    }
}
