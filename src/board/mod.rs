//! Board representation for the 4x4x4 gravity game

pub mod board;
pub mod notation;
pub mod overlay;


// Re-exports
pub use board::Board;
pub use overlay::{CellView, Overlay};

/// Board edge length (4x4x4)
pub const BOARD_SIZE: usize = 4;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE * BOARD_SIZE; // 64
pub const TOTAL_COLUMNS: usize = BOARD_SIZE * BOARD_SIZE; // 16

/// The two players. `Black` moves first (framework id 1), `White` second (id 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Framework identifier (1 or 2)
    #[inline]
    pub fn id(self) -> u8 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }

    /// Parse a framework identifier; anything other than 1 or 2 is rejected
    #[inline]
    pub fn from_id(id: u8) -> Option<Player> {
        match id {
            1 => Some(Player::Black),
            2 => Some(Player::White),
            _ => None,
        }
    }

    /// Symbol used by the text notation
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'X',
            Player::White => 'O',
        }
    }
}

/// Contents of a single cell: `None` is empty.
pub type Cell = Option<Player>;

/// A cell coordinate. `z` is the height, 0 being the bottom layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl Coord {
    #[inline]
    pub fn new(x: u8, y: u8, z: u8) -> Self {
        debug_assert!(Self::is_valid(x as i8, y as i8, z as i8));
        Self { x, y, z }
    }

    #[inline]
    pub fn is_valid(x: i8, y: i8, z: i8) -> bool {
        let n = BOARD_SIZE as i8;
        (0..n).contains(&x) && (0..n).contains(&y) && (0..n).contains(&z)
    }

    /// Step `k` times along `dir`, returning `None` once the walk leaves the grid.
    #[inline]
    pub fn offset(self, dir: (i8, i8, i8), k: i8) -> Option<Coord> {
        let x = self.x as i8 + dir.0 * k;
        let y = self.y as i8 + dir.1 * k;
        let z = self.z as i8 + dir.2 * k;
        if Self::is_valid(x, y, z) {
            Some(Coord::new(x as u8, y as u8, z as u8))
        } else {
            None
        }
    }

    /// The column this cell belongs to
    #[inline]
    pub fn column(self) -> Column {
        Column::new(self.x, self.y)
    }
}

/// A vertical column, addressed by its (x, y) footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Column {
    pub x: u8,
    pub y: u8,
}

impl Column {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!((x as usize) < BOARD_SIZE && (y as usize) < BOARD_SIZE);
        Self { x, y }
    }

    /// Every column in scan order: x outer, y inner.
    pub fn all() -> impl Iterator<Item = Column> {
        (0..BOARD_SIZE as u8).flat_map(|x| (0..BOARD_SIZE as u8).map(move |y| Column::new(x, y)))
    }

    /// The cell at height `z` in this column
    #[inline]
    pub fn at(self, z: u8) -> Coord {
        Coord::new(self.x, self.y, z)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
