//! Fixed-depth minimax engine.
//!
//! Wraps the plain minimax search behind the `Engine` trait. Depth and the
//! king weight of the material scorer are runtime options; everything else
//! is deterministic, so two engines at the same settings always agree.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;
use crate::move_generation::generate_all_boards::generate_all_boards;
use crate::search::board_scoring::MaterialScorer;
use crate::search::minimax::minimax;

pub const DEFAULT_SEARCH_DEPTH: u8 = 3;
const MAX_SEARCH_DEPTH: u8 = 8;

pub struct MinimaxEngine {
    depth: u8,
    scorer: MaterialScorer,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            depth: depth.clamp(1, MAX_SEARCH_DEPTH),
            scorer: MaterialScorer::default(),
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Damson Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("Depth") {
            let parsed = value
                .trim()
                .parse::<u8>()
                .map_err(|_| format!("invalid Depth value '{value}'"))?;
            if parsed == 0 || parsed > MAX_SEARCH_DEPTH {
                return Err(format!(
                    "Depth must be between 1 and {MAX_SEARCH_DEPTH}, got {parsed}"
                ));
            }
            self.depth = parsed;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("KingWeight") {
            let parsed = value
                .trim()
                .parse::<f32>()
                .map_err(|_| format!("invalid KingWeight value '{value}'"))?;
            if !parsed.is_finite() {
                return Err(format!("KingWeight must be finite, got {parsed}"));
            }
            self.scorer.king_weight = parsed;
            return Ok(());
        }
        Err(format!("unknown option: {name}"))
    }

    fn choose_board(
        &mut self,
        board: &Board,
        side: Side,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let depth = params.depth.unwrap_or(self.depth).max(1);
        let maximizing = side == Side::Light;

        let mut out = EngineOutput::default();
        if generate_all_boards(board, side).is_empty() {
            out.info_lines
                .push("info string minimax_engine no legal successors".to_owned());
            out.best_board = None;
            return Ok(out);
        }

        let (score, best) = minimax(board, depth, maximizing, &self.scorer);
        out.info_lines.push(format!(
            "info string minimax_engine depth {depth} score {score:.2}"
        ));
        out.best_board = Some(best);
        Ok(out)
    }
}
