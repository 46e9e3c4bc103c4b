//! Line-potential scoring
//!
//! Counts the directions through a cell along which `player` could still build
//! four in a row. Only opponent stones disqualify a direction; own stones and
//! empty cells are both treated as reachable, so half-built lines still count.

use crate::board::{Board, CellView, Column, Coord, Player, BOARD_SIZE};
use crate::rules::{open_reach, reversed, DIRECTIONS, WIN_LENGTH};

/// Number of the 13 directions through `pos` still open for `player`.
///
/// The stone at `pos` does not need to be placed yet; the cell itself is
/// counted as part of every line.
#[must_use]
pub fn potential_lines<V: CellView>(view: &V, pos: Coord, player: Player) -> u8 {
    DIRECTIONS
        .iter()
        .filter(|&&dir| {
            let fwd = open_reach(view, pos, dir, player);
            let back = open_reach(view, pos, reversed(dir), player);
            (fwd + back + 1) as usize >= WIN_LENGTH
        })
        .count() as u8
}

/// Potential score of every column's landing cell, indexed `[y][x]`.
/// Full columns are `None`.
#[must_use]
pub fn potential_map(board: &Board, player: Player) -> [[Option<u8>; BOARD_SIZE]; BOARD_SIZE] {
    let mut map = [[None; BOARD_SIZE]; BOARD_SIZE];
    for column in Column::all() {
        if let Some(pos) = board.landing(column) {
            map[column.y as usize][column.x as usize] = Some(potential_lines(board, pos, player));
        }
    }
    map
}
