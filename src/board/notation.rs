//! Text notation for boards
//!
//! Four layers, bottom (z = 0) first. Each layer is four rows (y = 0..3) of four
//! cells (x = 0..3): `.` empty, `X` black, `O` white. `0`/`1`/`2` are accepted
//! as well. Blank lines, `#` comments and `z=` layer headers are skipped.
//!
//! ```text
//! z=0
//! X X X .
//! . . . .
//! . . . .
//! . . . .
//! ```

use std::fmt;
use std::str::FromStr;

use super::board::Board;
use super::{Coord, Player, BOARD_SIZE};
use crate::error::BoardError;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for z in 0..BOARD_SIZE as u8 {
            if z > 0 {
                writeln!(f)?;
            }
            writeln!(f, "z={}", z)?;
            for y in 0..BOARD_SIZE as u8 {
                let mut sep = "";
                for x in 0..BOARD_SIZE as u8 {
                    let ch = self.get(Coord::new(x, y, z)).map_or('.', Player::symbol);
                    write!(f, "{}{}", sep, ch)?;
                    sep = " ";
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

fn parse_symbol(symbol: char) -> Option<Option<Player>> {
    match symbol {
        '.' | '0' => Some(None),
        'X' | 'x' | '1' => Some(Some(Player::Black)),
        'O' | 'o' | '2' => Some(Some(Player::White)),
        _ => None,
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#') && !l.starts_with("z="))
            .collect();

        let expected = BOARD_SIZE * BOARD_SIZE;
        if rows.len() != expected {
            return Err(BoardError::RowCount { expected, found: rows.len() });
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE {
                return Err(BoardError::RowWidth { row, expected: BOARD_SIZE, found: cells.len() });
            }
            let z = (row / BOARD_SIZE) as u8;
            let y = (row % BOARD_SIZE) as u8;
            for (x, &symbol) in cells.iter().enumerate() {
                let cell = parse_symbol(symbol).ok_or(BoardError::UnknownSymbol { row, symbol })?;
                if let Some(player) = cell {
                    board.place_stone(Coord::new(x as u8, y, z), player);
                }
            }
        }

        board.check_gravity()?;
        Ok(board)
    }
}
