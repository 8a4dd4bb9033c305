//! Candidate move enumeration for a single piece.
//!
//! A piece's moves are found by scanning its diagonals over a short sliding
//! window: at most two rows ahead per direction, which is exactly enough to
//! see a plain step or one jump. Jump landings recurse with a narrowed window
//! to pick up multi-jump chains, carrying the full set of pieces captured en
//! route. The returned mapping is keyed by destination square; deterministic
//! iteration order is part of the contract, since the search's tie-break
//! depends on enumerating candidates the same way every time.

use std::cmp::{max, min};
use std::collections::BTreeMap;

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::{BOARD_COLS, BOARD_ROWS};
use crate::game_state::checkers_types::{Piece, Side, Square};

/// Destination square mapped to the pieces captured on the way there.
///
/// An empty capture list marks a plain step. Ordered so iteration is a pure
/// function of contents.
pub type CandidateMoves = BTreeMap<Square, Vec<Piece>>;

/// Every move `piece` can make on `board`: plain steps and capture chains.
///
/// Men scan only their forward row direction; kings scan both. Captures are
/// not filtered to be mandatory, so plain steps stay available even when a
/// jump exists.
pub fn valid_moves(board: &Board, piece: Piece) -> CandidateMoves {
    let mut moves = CandidateMoves::new();
    let row = piece.row;
    let left = piece.col - 1;
    let right = piece.col + 1;

    if piece.side == Side::Dark || piece.king {
        let stop = max(row - 3, -1);
        scan_line(board, row - 1, stop, -1, piece.side, left, -1, &[], &mut moves);
        scan_line(board, row - 1, stop, -1, piece.side, right, 1, &[], &mut moves);
    }
    if piece.side == Side::Light || piece.king {
        let stop = min(row + 3, BOARD_ROWS);
        scan_line(board, row + 1, stop, 1, piece.side, left, -1, &[], &mut moves);
        scan_line(board, row + 1, stop, 1, piece.side, right, 1, &[], &mut moves);
    }

    moves
}

/// Walk one diagonal from `(start_row, start_col)` toward the exclusive
/// `stop_row`, recording reachable landings into `moves`.
///
/// `captured` carries the pieces already jumped earlier in the chain; inside
/// such a chain scan only further jumps may land, so an empty cell with no
/// fresh jump ends the line. A first opposing piece becomes a pending jump, a
/// second one blocks the line, and a same-side piece always blocks. After a
/// landing that completes a jump, both diagonals are rescanned from the
/// landing square with the chain stop bounds (`max(row - 3, 0)` upward,
/// `min(row + 3, 8)` downward; the upward bound is deliberately clamped a row
/// short, so chains never land on row 0).
#[allow(clippy::too_many_arguments)]
fn scan_line(
    board: &Board,
    start_row: i8,
    stop_row: i8,
    row_step: i8,
    side: Side,
    start_col: i8,
    col_step: i8,
    captured: &[Piece],
    moves: &mut CandidateMoves,
) {
    let mut pending: Option<Piece> = None;
    let mut row = start_row;
    let mut col = start_col;

    while (row_step < 0 && row > stop_row) || (row_step > 0 && row < stop_row) {
        if col < 0 || col >= BOARD_COLS {
            break;
        }

        match board.piece_at(row, col) {
            None => {
                if !captured.is_empty() && pending.is_none() {
                    break;
                }

                let mut path = captured.to_vec();
                if let Some(jumped) = pending {
                    path.push(jumped);
                }
                let completed_jump = pending.is_some();
                moves.insert((row, col), path.clone());

                if completed_jump {
                    let chain_stop = if row_step < 0 {
                        max(row - 3, 0)
                    } else {
                        min(row + 3, BOARD_ROWS)
                    };
                    let next_row = row + row_step;
                    scan_line(
                        board, next_row, chain_stop, row_step, side, col - 1, -1, &path, moves,
                    );
                    scan_line(
                        board, next_row, chain_stop, row_step, side, col + 1, 1, &path, moves,
                    );
                }
                break;
            }
            Some(occupant) if occupant.side == side => break,
            Some(occupant) => {
                if pending.is_some() {
                    break;
                }
                pending = Some(occupant);
            }
        }

        row += row_step;
        col += col_step;
    }
}
