//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the interactive session, tests,
//! and diagnostics in text environments.

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::{BOARD_COLS, BOARD_ROWS};
use crate::game_state::checkers_types::{Piece, Side};

/// Render the board to a Unicode string for terminal output.
///
/// Row 0 is printed at the top so square coordinates read straight off the
/// rails: light pieces start on the upper rows and dark pieces on the lower.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for row in 0..BOARD_ROWS {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for col in 0..BOARD_COLS {
            match board.piece_at(row, col) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < BOARD_COLS - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row as u8));
        out.push('\n');
    }

    out.push_str("  0 1 2 3 4 5 6 7");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.side, piece.king) {
        (Side::Light, false) => '⛀',
        (Side::Light, true) => '⛁',
        (Side::Dark, false) => '⛂',
        (Side::Dark, true) => '⛃',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_render_shows_both_armies_between_the_rails() {
        let rendered = render_board(&Board::new_game());

        assert!(rendered.starts_with("  0 1 2 3 4 5 6 7\n"));
        assert!(rendered.ends_with("  0 1 2 3 4 5 6 7"));
        assert_eq!(rendered.chars().filter(|&c| c == '⛀').count(), 12);
        assert_eq!(rendered.chars().filter(|&c| c == '⛂').count(), 12);
        assert_eq!(rendered.lines().count(), 10);
    }

    #[test]
    fn rows_carry_their_index_on_both_rails() {
        let rendered = render_board(&Board::new_game());
        let rows = rendered.lines().collect::<Vec<_>>();

        // The first board row sits right under the header.
        assert!(rows[1].starts_with("0 "));
        assert!(rows[1].ends_with(" 0"));
        assert!(rows[8].starts_with("7 "));
        assert!(rows[8].ends_with(" 7"));
    }

    #[test]
    fn kings_render_with_their_own_glyphs() {
        let mut board = Board::empty();
        let mut king = Piece::new(3, 4, Side::Dark);
        king.king = true;
        board.place(king);

        let rendered = render_board(&board);

        assert_eq!(rendered.chars().filter(|&c| c == '⛃').count(), 1);
        assert_eq!(rendered.chars().filter(|&c| c == '⛂').count(), 0);
    }
}
