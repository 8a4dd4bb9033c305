//! Turn-taking state wrapped around a board.
//!
//! `GameState` owns the current board, tracks whose turn it is, and mediates
//! the two-step select/apply flow an interface drives: a side first selects
//! one of its pieces, which computes the piece's candidate moves, then names
//! a destination to commit one of them. Engine results arrive as whole
//! boards and are adopted through `substitute_board`.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Side, Square};
use crate::move_generation::candidate_moves::{valid_moves, CandidateMoves};
use crate::move_generation::move_apply::apply_move_to_board;

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Side,
    selected: Option<Square>,
    valid_moves: CandidateMoves,
}

impl GameState {
    /// Start a fresh game. Dark moves first.
    pub fn new() -> Self {
        GameState {
            board: Board::new_game(),
            turn: Side::Dark,
            selected: None,
            valid_moves: CandidateMoves::new(),
        }
    }

    /// Discard all progress and return to the starting position.
    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Candidate moves of the currently selected piece. Empty when nothing
    /// is selected.
    pub fn candidate_moves(&self) -> &CandidateMoves {
        &self.valid_moves
    }

    pub fn winner(&self) -> Option<Side> {
        self.board.winner()
    }

    /// Handle a square named by the side to move.
    ///
    /// With a piece already selected the square is first tried as a move
    /// destination. When that fails the selection falls through: the square
    /// is reinterpreted as a fresh selection attempt. Returns true when the
    /// square selected a piece of the side to move, false otherwise, in
    /// particular after a completed move since the turn has already passed
    /// to the opponent.
    pub fn select(&mut self, row: i8, col: i8) -> bool {
        if self.selected.is_some() && !self.apply_move(row, col) {
            self.selected = None;
            self.valid_moves.clear();
        }
        match self.board.piece_at(row, col) {
            Some(piece) if piece.side == self.turn => {
                self.selected = Some((row, col));
                self.valid_moves = valid_moves(&self.board, piece);
                true
            }
            _ => false,
        }
    }

    /// Commit the selected piece to `(row, col)` if that square is one of
    /// its candidate destinations. On success the move is applied, the
    /// selection is dropped, and the turn changes.
    pub fn apply_move(&mut self, row: i8, col: i8) -> bool {
        let Some(origin) = self.selected else {
            return false;
        };
        let Some(piece) = self.board.piece_at(origin.0, origin.1) else {
            return false;
        };
        if self.board.piece_at(row, col).is_some() {
            return false;
        }
        let Some(captured) = self.valid_moves.get(&(row, col)).cloned() else {
            return false;
        };
        apply_move_to_board(&mut self.board, piece, (row, col), &captured);
        self.selected = None;
        self.change_turn();
        true
    }

    /// Pass the move to the other side, dropping any stale candidates.
    pub fn change_turn(&mut self) {
        self.valid_moves.clear();
        self.turn = self.turn.opposite();
    }

    /// Replace the whole board with one produced elsewhere, typically an
    /// engine's chosen successor, and pass the turn.
    pub fn substitute_board(&mut self, board: Board) {
        self.board = board;
        self.selected = None;
        self.change_turn();
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
