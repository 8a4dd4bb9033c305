//! Core value types shared across the engine: sides, pieces, and squares.

use crate::game_state::checkers_rules::BOARD_ROWS;

/// Board coordinate as a `(row, col)` pair.
///
/// Signed so scan arithmetic can step off the board and be bounds-checked
/// instead of wrapping.
pub type Square = (i8, i8);

/// One of the two players.
///
/// Light sets up on the low rows and advances toward higher row indices; Dark
/// sets up on the high rows and advances toward lower ones. Dark moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Light => 0,
            Side::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Row step a man of this side advances by.
    #[inline]
    pub const fn forward_step(self) -> i8 {
        match self {
            Side::Light => 1,
            Side::Dark => -1,
        }
    }

    /// Far row where a man of this side is crowned.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Side::Light => BOARD_ROWS - 1,
            Side::Dark => 0,
        }
    }
}

/// A single piece, identified by its location, owner, and crowned state.
///
/// Pieces are plain values; the board grid owns the authoritative copies and
/// lookups hand out copies by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub row: i8,
    pub col: i8,
    pub side: Side,
    pub king: bool,
}

impl Piece {
    #[inline]
    pub const fn new(row: i8, col: i8, side: Side) -> Self {
        Self {
            row,
            col,
            side,
            king: false,
        }
    }

    #[inline]
    pub const fn location(self) -> Square {
        (self.row, self.col)
    }
}
