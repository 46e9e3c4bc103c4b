//! The 13 line directions of a cube
//!
//! Each entry stands for a full line: callers walk it both ways from the origin
//! cell, so 13 vectors cover all 26 neighbouring rays.

use crate::board::{CellView, Coord, Player, BOARD_SIZE};

/// Direction vectors (dx, dy, dz)
pub const DIRECTIONS: [(i8, i8, i8); 13] = [
    (1, 0, 0),   // x axis
    (0, 1, 0),   // y axis
    (0, 0, 1),   // z axis
    (1, 1, 0),   // xy diagonal
    (1, 0, 1),   // xz diagonal
    (0, 1, 1),   // yz diagonal
    (1, 1, 1),   // space diagonal
    (1, -1, 0),  // xy anti-diagonal
    (1, 0, -1),  // xz anti-diagonal
    (0, 1, -1),  // yz anti-diagonal
    (1, -1, -1), // space diagonal
    (1, 1, -1),  // space diagonal
    (1, -1, 1),  // space diagonal
];

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 4;

/// Reverse of a direction
#[inline]
pub const fn reversed(dir: (i8, i8, i8)) -> (i8, i8, i8) {
    (-dir.0, -dir.1, -dir.2)
}

/// Count consecutive `player` stones starting one step from `pos` along `dir`.
/// The origin cell itself is not counted.
#[inline]
pub fn run_length<V: CellView>(view: &V, pos: Coord, dir: (i8, i8, i8), player: Player) -> usize {
    (1..BOARD_SIZE as i8)
        .map_while(|k| pos.offset(dir, k))
        .take_while(|&next| view.cell(next) == Some(player))
        .count()
}

/// Furthest offset (0..=3) reachable from `pos` along `dir` before the edge
/// of the grid or a stone of `player`'s opponent.
#[inline]
pub fn open_reach<V: CellView>(view: &V, pos: Coord, dir: (i8, i8, i8), player: Player) -> u8 {
    let opponent = player.opponent();
    (1..WIN_LENGTH as i8)
        .map_while(|k| pos.offset(dir, k))
        .take_while(|&next| view.cell(next) != Some(opponent))
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use std::collections::HashSet;

    #[test]
    fn test_thirteen_unique_axes() {
        let mut seen = HashSet::new();
        for &d in &DIRECTIONS {
            assert_ne!(d, (0, 0, 0));
            assert!(seen.insert(d), "duplicate direction {:?}", d);
            assert!(!seen.contains(&reversed(d)), "reverse of {:?} also listed", d);
        }
        assert_eq!(seen.len(), 13);
        // Together with reverses they are every neighbour of a cell
        let all: HashSet<_> = DIRECTIONS.iter().flat_map(|&d| [d, reversed(d)]).collect();
        assert_eq!(all.len(), 26);
    }

    #[test]
    fn test_run_length_stops_at_gap() {
        let mut board = Board::new();
        board.place_stone(Coord::new(1, 0, 0), Player::Black);
        board.place_stone(Coord::new(3, 0, 0), Player::Black);
        let origin = Coord::new(0, 0, 0);
        assert_eq!(run_length(&board, origin, (1, 0, 0), Player::Black), 1);
        assert_eq!(run_length(&board, origin, (-1, 0, 0), Player::Black), 0);
        assert_eq!(run_length(&board, origin, (1, 0, 0), Player::White), 0);
    }

    #[test]
    fn test_open_reach() {
        let mut board = Board::new();
        let origin = Coord::new(0, 0, 0);
        assert_eq!(open_reach(&board, origin, (1, 0, 0), Player::Black), 3);
        assert_eq!(open_reach(&board, origin, (-1, 0, 0), Player::Black), 0);

        // Own stones do not block, opponent stones do
        board.place_stone(Coord::new(1, 0, 0), Player::Black);
        board.place_stone(Coord::new(2, 0, 0), Player::White);
        assert_eq!(open_reach(&board, origin, (1, 0, 0), Player::Black), 1);
        assert_eq!(open_reach(&board, origin, (1, 0, 0), Player::White), 0);
    }
}
