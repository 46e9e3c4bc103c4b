//! Board structure with gravity-aware accessors

use super::overlay::Overlay;
use super::{Cell, Column, Coord, Player, BOARD_SIZE};
use crate::error::BoardError;

/// Game board, cells indexed `[z][y][x]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[[Cell; BOARD_SIZE]; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import a framework board of player ids (0 empty, 1 black, 2 white),
    /// indexed `[z][y][x]`. The gravity invariant is checked.
    pub fn from_ids(ids: &[[[u8; BOARD_SIZE]; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, BoardError> {
        let mut board = Board::new();
        for (z, layer) in ids.iter().enumerate() {
            for (y, row) in layer.iter().enumerate() {
                for (x, &id) in row.iter().enumerate() {
                    let pos = Coord::new(x as u8, y as u8, z as u8);
                    match id {
                        0 => {}
                        _ => {
                            let player = Player::from_id(id)
                                .ok_or(BoardError::InvalidCellId { pos, value: id })?;
                            board.place_stone(pos, player);
                        }
                    }
                }
            }
        }
        board.check_gravity()?;
        Ok(board)
    }

    /// Export as framework ids, indexed `[z][y][x]`
    pub fn to_ids(&self) -> [[[u8; BOARD_SIZE]; BOARD_SIZE]; BOARD_SIZE] {
        let mut ids = [[[0u8; BOARD_SIZE]; BOARD_SIZE]; BOARD_SIZE];
        for (z, layer) in self.cells.iter().enumerate() {
            for (y, row) in layer.iter().enumerate() {
                for (x, cell) in row.iter().enumerate() {
                    ids[z][y][x] = cell.map_or(0, Player::id);
                }
            }
        }
        ids
    }

    /// Get cell contents at position
    #[inline]
    pub fn get(&self, pos: Coord) -> Cell {
        self.cells[pos.z as usize][pos.y as usize][pos.x as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Coord) -> bool {
        self.get(pos).is_none()
    }

    /// Place a stone directly, without gravity.
    /// Use `drop_stone` for game moves.
    #[inline]
    pub fn place_stone(&mut self, pos: Coord, player: Player) {
        self.cells[pos.z as usize][pos.y as usize][pos.x as usize] = Some(player);
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Coord) {
        self.cells[pos.z as usize][pos.y as usize][pos.x as usize] = None;
    }

    /// A column accepts another stone iff its top cell is empty.
    #[inline]
    pub fn is_column_open(&self, column: Column) -> bool {
        self.is_empty(column.at(BOARD_SIZE as u8 - 1))
    }

    /// Lowest empty height in the column, or `BOARD_SIZE` when full.
    #[inline]
    pub fn drop_height(&self, column: Column) -> u8 {
        (0..BOARD_SIZE as u8)
            .find(|&z| self.is_empty(column.at(z)))
            .unwrap_or(BOARD_SIZE as u8)
    }

    /// Where a stone dropped into `column` would land, if anywhere
    #[inline]
    pub fn landing(&self, column: Column) -> Option<Coord> {
        let z = self.drop_height(column);
        ((z as usize) < BOARD_SIZE).then(|| column.at(z))
    }

    /// Drop a stone under gravity. Returns the landing cell, or `None` if full.
    pub fn drop_stone(&mut self, column: Column, player: Player) -> Option<Coord> {
        let pos = self.landing(column)?;
        self.place_stone(pos, player);
        Some(pos)
    }

    /// View of this board with one hypothetical stone added.
    #[inline]
    pub fn with_stone(&self, pos: Coord, player: Player) -> Overlay<'_> {
        Overlay::new(self, pos, player)
    }

    /// Open columns in scan order (x outer, y inner)
    pub fn open_columns(&self) -> impl Iterator<Item = Column> + '_ {
        Column::all().filter(|&c| self.is_column_open(c))
    }

    /// Check if no column accepts a stone
    #[inline]
    pub fn is_full(&self) -> bool {
        self.open_columns().next().is_none()
    }

    /// Total stones on board
    pub fn stone_count(&self) -> u32 {
        self.cells.iter().flatten().flatten().filter(|c| c.is_some()).count() as u32
    }

    /// Stones owned by `player`
    pub fn count(&self, player: Player) -> u32 {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .filter(|&&c| c == Some(player))
            .count() as u32
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stone_count() == 0
    }

    /// Verify that no stone floats above an empty cell.
    pub fn check_gravity(&self) -> Result<(), BoardError> {
        for column in Column::all() {
            let height = self.drop_height(column);
            if let Some(z) = (height..BOARD_SIZE as u8).find(|&z| !self.is_empty(column.at(z))) {
                return Err(BoardError::GravityViolation { pos: column.at(z) });
            }
        }
        Ok(())
    }
}
