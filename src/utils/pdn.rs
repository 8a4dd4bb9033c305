//! PDN-style game transcript writing.
//!
//! Moves are reconstructed by diffing consecutive boards, since both human
//! moves and engine replies ultimately arrive as whole positions. The writer
//! emits tag-pair headers followed by numbered movetext in the 1..32
//! playable-square numbering, with `-` for steps and `x` for jumps.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::{BOARD_COLS, BOARD_ROWS};
use crate::game_state::checkers_types::{Side, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub side: Side,
    pub from: Square,
    pub to: Square,
    pub captures: Vec<Square>,
    pub promoted: bool,
}

/// Reconstruct the move `side` played between two consecutive boards.
///
/// Returns `None` when the boards do not differ by a move of that side,
/// for example when they are identical.
pub fn diff_boards(before: &Board, after: &Board, side: Side) -> Option<MoveRecord> {
    let mut origin = None;
    let mut landing = None;
    let mut captures = Vec::new();

    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLS {
            match (before.piece_at(row, col), after.piece_at(row, col)) {
                (Some(old), None) => {
                    if old.side == side {
                        origin = Some(((row, col), old));
                    } else {
                        captures.push((row, col));
                    }
                }
                (None, Some(new)) if new.side == side => {
                    landing = Some(((row, col), new));
                }
                _ => {}
            }
        }
    }

    let (from, old) = origin?;
    let (to, new) = landing?;
    Some(MoveRecord {
        side,
        from,
        to,
        captures,
        promoted: !old.king && new.king,
    })
}

/// Number of a playable square in PDN notation, counting 1..32 row by row
/// from square (0, 1).
pub fn square_number(square: Square) -> u8 {
    (square.0 * 4 + square.1 / 2 + 1) as u8
}

pub fn write_pdn(records: &[MoveRecord], result: &str) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Damson Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "Light".to_owned());
    headers.insert("Black".to_owned(), "Dark".to_owned());
    headers.insert("GameType".to_owned(), "21".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    write_pdn_with_headers(records, &headers)
}

pub fn write_pdn_with_headers(
    records: &[MoveRecord],
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pdn_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(records.len() + 1);
    for (ply, record) in records.iter().enumerate() {
        let token = movetext_token(record);
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, token));
        } else {
            movetext_parts.push(token);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

fn movetext_token(record: &MoveRecord) -> String {
    let separator = if record.captures.is_empty() { '-' } else { 'x' };
    format!(
        "{}{}{}",
        square_number(record.from),
        separator,
        square_number(record.to)
    )
}

pub fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

pub fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_pdn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
