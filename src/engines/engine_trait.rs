//! Engine abstraction layer used by the command-line session.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.
//! Engines answer with whole successor boards rather than move records; the
//! caller adopts the chosen board wholesale.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// The successor position the engine wants to play, or `None` when the
    /// side to move has no legal reply.
    pub best_board: Option<Board>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}
    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    fn choose_board(
        &mut self,
        board: &Board,
        side: Side,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
