//! Interactive command loop for a human versus engine game.
//!
//! Reads commands from stdin, maintains the current game, routes the
//! engine's replies, and prints the board after every move. The human plays
//! Dark and moves first; the engine answers for Light. Moves are entered as
//! two coordinates, first selecting a piece and then naming a destination,
//! mirroring the select/apply flow of `GameState`.

use std::io::{self, BufRead, Write};

use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::checkers_types::Side;
use crate::game_state::game_state::GameState;
use crate::utils::pdn::{diff_boards, write_pdn, MoveRecord};
use crate::utils::render_board::render_board;

const HUMAN_SIDE: Side = Side::Dark;
const ENGINE_SIDE: Side = Side::Light;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = CliSession::new();

    session.greet(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct CliSession {
    game: GameState,
    engine: Box<dyn Engine>,
    records: Vec<MoveRecord>,
}

impl CliSession {
    fn new() -> Self {
        Self::with_engine(Box::new(MinimaxEngine::default()))
    }

    fn with_engine(engine: Box<dyn Engine>) -> Self {
        Self {
            game: GameState::new(),
            engine,
            records: Vec::new(),
        }
    }

    fn greet(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "Damson checkers, you play Dark against {}.",
            self.engine.name()
        )?;
        writeln!(out, "Enter ROW COL to select a piece, 'help' lists commands.")?;
        writeln!(out, "{}", render_board(self.game.board()))
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "quit" | "exit" => {
                return Ok(true);
            }
            "new" => {
                self.game.reset();
                self.records.clear();
                self.engine.new_game();
                writeln!(out, "{}", render_board(self.game.board()))?;
            }
            "show" => {
                writeln!(out, "{}", render_board(self.game.board()))?;
            }
            "moves" => {
                self.show_moves(out)?;
            }
            "depth" => {
                let value = parts.next().unwrap_or_default();
                if let Err(err) = self.engine.set_option("Depth", value) {
                    writeln!(out, "info string depth error: {err}")?;
                }
            }
            "pdn" => {
                writeln!(out, "{}", write_pdn(&self.records, self.result_token()))?;
            }
            "help" => {
                writeln!(out, "ROW COL   select one of your pieces, then a destination")?;
                writeln!(out, "moves     list destinations of the selected piece")?;
                writeln!(out, "show      print the board")?;
                writeln!(out, "depth N   set the engine search depth")?;
                writeln!(out, "new       start over")?;
                writeln!(out, "pdn       print the game transcript")?;
                writeln!(out, "quit      leave")?;
            }
            _ => {
                self.handle_square_input(trimmed, out)?;
            }
        }

        Ok(false)
    }

    fn handle_square_input(&mut self, input: &str, out: &mut impl Write) -> io::Result<()> {
        if self.game.winner().is_some() {
            writeln!(out, "info string the game is over, start again with 'new'")?;
            return Ok(());
        }

        let mut tokens = input.split_whitespace();
        let (Some(row), Some(col)) = (tokens.next(), tokens.next()) else {
            writeln!(out, "info string unknown command: {input}")?;
            return Ok(());
        };
        let (Ok(row), Ok(col)) = (row.parse::<i8>(), col.parse::<i8>()) else {
            writeln!(out, "info string unknown command: {input}")?;
            return Ok(());
        };

        let before = self.game.board().clone();
        let selected = self.game.select(row, col);

        if self.game.turn() == ENGINE_SIDE {
            // The square completed a move; record it and let the engine answer.
            if let Some(record) = diff_boards(&before, self.game.board(), HUMAN_SIDE) {
                self.records.push(record);
            }
            writeln!(out, "{}", render_board(self.game.board()))?;
            if let Some(winner) = self.game.winner() {
                writeln!(out, "info string {} wins", side_name(winner))?;
                return Ok(());
            }
            self.engine_reply(out)?;
        } else if selected {
            writeln!(out, "info string selected ({row}, {col})")?;
            self.show_moves(out)?;
        } else {
            writeln!(out, "info string nothing to do at ({row}, {col})")?;
        }

        Ok(())
    }

    fn engine_reply(&mut self, out: &mut impl Write) -> io::Result<()> {
        let result = self
            .engine
            .choose_board(self.game.board(), ENGINE_SIDE, &GoParams::default());
        let output = match result {
            Ok(output) => output,
            Err(err) => {
                writeln!(out, "info string engine error: {err}")?;
                return Ok(());
            }
        };

        for info in &output.info_lines {
            writeln!(out, "{info}")?;
        }

        match output.best_board {
            Some(next) => {
                if let Some(record) = diff_boards(self.game.board(), &next, ENGINE_SIDE) {
                    self.records.push(record);
                }
                self.game.substitute_board(next);
                writeln!(out, "{}", render_board(self.game.board()))?;
                if let Some(winner) = self.game.winner() {
                    writeln!(out, "info string {} wins", side_name(winner))?;
                }
            }
            None => {
                writeln!(out, "info string the engine has no legal reply, Dark wins")?;
            }
        }

        Ok(())
    }

    fn show_moves(&self, out: &mut impl Write) -> io::Result<()> {
        let Some(origin) = self.game.selected() else {
            writeln!(out, "info string select one of your pieces first")?;
            return Ok(());
        };
        for (destination, captured) in self.game.candidate_moves() {
            if captured.is_empty() {
                writeln!(
                    out,
                    "({}, {}) -> ({}, {})",
                    origin.0, origin.1, destination.0, destination.1
                )?;
            } else {
                writeln!(
                    out,
                    "({}, {}) -> ({}, {}) capturing {}",
                    origin.0,
                    origin.1,
                    destination.0,
                    destination.1,
                    captured.len()
                )?;
            }
        }
        Ok(())
    }

    fn result_token(&self) -> &'static str {
        match self.game.winner() {
            Some(Side::Light) => "1-0",
            Some(Side::Dark) => "0-1",
            None => "*",
        }
    }
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Light => "Light",
        Side::Dark => "Dark",
    }
}
