//! Fixed center-preference ordering
//!
//! A cheap alternative to potential scoring: take the first open column from a
//! hand-picked list, central footprints first.

use crate::board::{Board, Column};

/// Preferred columns as (x, y), most preferred first
pub const CENTER_ORDER: [(u8, u8); 8] = [
    (1, 1),
    (1, 2),
    (2, 1),
    (2, 2),
    (0, 1),
    (1, 0),
    (2, 3),
    (3, 2),
];

/// First open column in `CENTER_ORDER`, if any.
#[must_use]
pub fn center_move(board: &Board) -> Option<Column> {
    CENTER_ORDER
        .iter()
        .map(|&(x, y)| Column::new(x, y))
        .find(|&c| board.is_column_open(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    #[test]
    fn test_center_first() {
        assert_eq!(center_move(&Board::new()), Some(Column::new(1, 1)));
    }

    #[test]
    fn test_skips_full_columns() {
        let mut board = Board::new();
        for col in [Column::new(1, 1), Column::new(1, 2)] {
            for _ in 0..4 {
                board.drop_stone(col, Player::Black);
            }
        }
        assert_eq!(center_move(&board), Some(Column::new(2, 1)));
    }

    #[test]
    fn test_none_when_listed_columns_full() {
        let mut board = Board::new();
        for &(x, y) in &CENTER_ORDER {
            for _ in 0..4 {
                board.drop_stone(Column::new(x, y), Player::White);
            }
        }
        assert_eq!(center_move(&board), None);
        assert!(!board.is_full());
    }
}
