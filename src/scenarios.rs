//! Board generators for exercising the engine
//!
//! Every generator respects gravity: stones are only ever dropped.

use rand::Rng;

use crate::board::{Board, Column, Coord, Player, BOARD_SIZE};

/// Upper bound on drops made by `random_board`
pub const MAX_RANDOM_STONES: u32 = 20;

/// Drop 0..=20 stones into random columns with random owners.
///
/// Drops into a full column are skipped, so the stone count can be lower than
/// the number of attempts.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut board = Board::new();
    let attempts = rng.random_range(0..=MAX_RANDOM_STONES);
    for _ in 0..attempts {
        let column = Column::new(
            rng.random_range(0..BOARD_SIZE as u8),
            rng.random_range(0..BOARD_SIZE as u8),
        );
        let player = if rng.random_bool(0.5) { Player::Black } else { Player::White };
        board.drop_stone(column, player);
    }
    board
}

fn from_drops(drops: &[(u8, u8, Player)]) -> Board {
    let mut board = Board::new();
    for &(x, y, player) in drops {
        board.drop_stone(Column::new(x, y), player);
    }
    board
}

/// Stones clustered on the central columns.
pub fn center_cluster() -> Board {
    from_drops(&[
        (1, 1, Player::Black),
        (1, 1, Player::White),
        (1, 2, Player::Black),
        (2, 1, Player::White),
        (2, 2, Player::Black),
        (2, 2, Player::White),
        (1, 0, Player::Black),
        (0, 1, Player::White),
    ])
}

/// Stones stacked in the corner columns.
pub fn corner_cluster() -> Board {
    from_drops(&[
        (0, 0, Player::Black),
        (0, 0, Player::White),
        (0, 3, Player::Black),
        (3, 0, Player::White),
        (3, 3, Player::Black),
        (3, 3, Player::White),
        (0, 0, Player::Black),
        (3, 3, Player::White),
    ])
}

/// Every column filled to height 3 with random owners; only the top layer is open.
pub fn nearly_full<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut board = Board::new();
    for column in Column::all() {
        for z in 0..BOARD_SIZE as u8 - 1 {
            let player = if rng.random_bool(0.5) { Player::Black } else { Player::White };
            board.place_stone(Coord::new(column.x, column.y, z), player);
        }
    }
    board
}
