//! Read-only cell views, including "board plus one hypothetical stone"

use super::board::Board;
use super::{Cell, Coord, Player};

/// Anything cells can be read from.
pub trait CellView {
    fn cell(&self, pos: Coord) -> Cell;
}

impl CellView for Board {
    #[inline]
    fn cell(&self, pos: Coord) -> Cell {
        self.get(pos)
    }
}

/// A board with one extra stone laid over it. The overlay cell is checked
/// first, everything else falls through to the borrowed board.
#[derive(Debug, Clone, Copy)]
pub struct Overlay<'a> {
    base: &'a Board,
    pos: Coord,
    player: Player,
}

impl<'a> Overlay<'a> {
    #[inline]
    pub fn new(base: &'a Board, pos: Coord, player: Player) -> Self {
        Self { base, pos, player }
    }

    #[inline]
    pub fn pos(&self) -> Coord {
        self.pos
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }
}

impl CellView for Overlay<'_> {
    #[inline]
    fn cell(&self, pos: Coord) -> Cell {
        if pos == self.pos {
            Some(self.player)
        } else {
            self.base.get(pos)
        }
    }
}
