#![cfg(feature = "std")]

//! Text rendering and coordinate parsing for terminal front ends.
//! Boards are rendered to `String`s; printing is left to the binaries.

use std::fmt::Write;
use std::string::String;

use crate::{
    board::{Board, Cell},
    common::{AttackResult, Coord},
    config::BOARD_SIZE,
    game::{Match, Side, TurnReport},
};

const GRID: usize = BOARD_SIZE as usize;

/// Format a coordinate as column letter plus 1-based row, e.g. `B7`.
pub fn coord_to_string(coord: Coord) -> String {
    let col = (b'A' + coord.col as u8) as char;
    format!("{}{}", col, coord.row + 1)
}

/// Parse `B7`-style input. Coordinates beyond the board are returned as-is
/// so the board can report them as invalid.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(Coord::new(row - 1, col))
}

/// Render a board. `reveal` shows unhit ship segments as `S`; otherwise
/// only attacked cells are visible (`X` hit, `O` miss).
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::from("   ");
    for c in 0..GRID {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for (r, row) in board.cells().iter().enumerate() {
        let _ = write!(out, "{:2} ", r + 1);
        for (c, cell) in row.iter().enumerate() {
            let attacked = board.attacked_cells().contains(Coord::new(r, c));
            let ch = match (cell, attacked) {
                (Cell::OccupiedBy(_), true) => 'X',
                (Cell::Empty, true) => 'O',
                (Cell::OccupiedBy(_), false) if reveal => 'S',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Opponent board on top, own board below.
pub fn render_match<R>(game: &Match<R>, reveal_opponent: bool) -> String
where
    R: rand::Rng,
{
    format!(
        "Opponent board:\n{}\nYour board:\n{}",
        render_board(game.opponent().board(), reveal_opponent),
        render_board(game.human().board(), true)
    )
}

/// One-line description of a resolved turn.
pub fn describe_turn(report: &TurnReport) -> String {
    let who = match report.side {
        Side::Human => "You",
        Side::Opponent => "Computer",
    };
    let at = coord_to_string(report.coord);
    match (report.result, report.sunk_ship) {
        (AttackResult::Sunk, Some(name)) => format!("{} fired at {}: SUNK the {}!", who, at, name),
        (result, _) => format!(
            "{} fired at {}: {}",
            who,
            at,
            result.to_string().to_uppercase()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_text_roundtrip() {
        assert_eq!(parse_coord("b7"), Some(Coord::new(6, 1)));
        assert_eq!(coord_to_string(Coord::new(9, 9)), "J10");
        assert_eq!(parse_coord(" J10 "), Some(Coord::new(9, 9)));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_coord(""), None);
        assert_eq!(parse_coord("A"), None);
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("7B"), None);
        assert_eq!(parse_coord("AA"), None);
    }

    #[test]
    fn out_of_board_input_is_passed_through() {
        assert_eq!(parse_coord("K1"), Some(Coord::new(0, 10)));
        assert_eq!(parse_coord("A11"), Some(Coord::new(10, 0)));
    }
}
