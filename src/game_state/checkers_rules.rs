//! Canonical checkers-rule constants.
//!
//! This module stores the static rule-related literals (board geometry and the
//! standard setup) used to initialize and validate game state, plus the small
//! coordinate predicates shared by board setup, move generation, and parsing.

/// Number of rows on the board.
pub const BOARD_ROWS: i8 = 8;

/// Number of columns on the board.
pub const BOARD_COLS: i8 = 8;

/// Rows filled with pieces per side in the standard setup.
pub const SETUP_ROWS_PER_SIDE: i8 = 3;

/// Pieces each side starts with (twelve men, no kings).
pub const PIECES_PER_SIDE: u8 = 12;

/// True when `(row, col)` lies on the board.
#[inline]
pub const fn in_bounds(row: i8, col: i8) -> bool {
    0 <= row && row < BOARD_ROWS && 0 <= col && col < BOARD_COLS
}

/// True when `(row, col)` is one of the 32 dark squares pieces live on.
///
/// Playable squares alternate by row: odd columns on row 0, even columns on
/// row 1, and so on.
#[inline]
pub const fn is_playable_square(row: i8, col: i8) -> bool {
    col % 2 == (row + 1) % 2
}
