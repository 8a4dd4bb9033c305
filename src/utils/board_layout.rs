//! Text layout parsing and generation for board positions.
//!
//! A layout is eight whitespace-separated rows of eight symbols, row 0
//! first: `.` for an empty square, `l`/`L` for a light man/king, `d`/`D`
//! for a dark man/king. Layouts are the interchange format for test
//! fixtures and for saving mid-game positions.

use std::error::Error;
use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::{is_playable_square, BOARD_COLS, BOARD_ROWS};
use crate::game_state::checkers_types::{Piece, Side};

pub type LayoutResult<T> = Result<T, LayoutError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    WrongRowCount(usize),
    WrongColumnCount { row: usize, count: usize },
    InvalidSymbol { row: usize, col: usize, symbol: char },
    UnplayableSquare { row: usize, col: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRowCount(count) => {
                write!(f, "expected {BOARD_ROWS} rows, got {count}")
            }
            LayoutError::WrongColumnCount { row, count } => {
                write!(f, "row {row} should have {BOARD_COLS} squares, got {count}")
            }
            LayoutError::InvalidSymbol { row, col, symbol } => {
                write!(f, "unknown square symbol '{symbol}' at ({row}, {col})")
            }
            LayoutError::UnplayableSquare { row, col } => {
                write!(f, "piece on unplayable square ({row}, {col})")
            }
        }
    }
}

impl Error for LayoutError {}

/// Parse a layout into a board. Piece and king counts are rebuilt from the
/// symbols, so a parsed board is internally consistent.
pub fn parse_layout(text: &str) -> LayoutResult<Board> {
    let rows = text.split_whitespace().collect::<Vec<_>>();
    if rows.len() != BOARD_ROWS as usize {
        return Err(LayoutError::WrongRowCount(rows.len()));
    }

    let mut board = Board::empty();
    for (row, symbols) in rows.iter().enumerate() {
        let count = symbols.chars().count();
        if count != BOARD_COLS as usize {
            return Err(LayoutError::WrongColumnCount { row, count });
        }
        for (col, symbol) in symbols.chars().enumerate() {
            let (side, king) = match symbol {
                '.' => continue,
                'l' => (Side::Light, false),
                'L' => (Side::Light, true),
                'd' => (Side::Dark, false),
                'D' => (Side::Dark, true),
                symbol => return Err(LayoutError::InvalidSymbol { row, col, symbol }),
            };
            if !is_playable_square(row as i8, col as i8) {
                return Err(LayoutError::UnplayableSquare { row, col });
            }
            board.place(Piece {
                row: row as i8,
                col: col as i8,
                side,
                king,
            });
        }
    }

    Ok(board)
}

/// Render a board back into layout text, row 0 first.
pub fn write_layout(board: &Board) -> String {
    let mut rows = Vec::with_capacity(BOARD_ROWS as usize);
    for row in 0..BOARD_ROWS {
        let mut symbols = String::with_capacity(BOARD_COLS as usize);
        for col in 0..BOARD_COLS {
            let symbol = match board.piece_at(row, col) {
                None => '.',
                Some(piece) => match (piece.side, piece.king) {
                    (Side::Light, false) => 'l',
                    (Side::Light, true) => 'L',
                    (Side::Dark, false) => 'd',
                    (Side::Dark, true) => 'D',
                },
            };
            symbols.push(symbol);
        }
        rows.push(symbols);
    }
    rows.join("\n")
}
