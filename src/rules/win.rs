//! Win condition checking: four in a row along any of the 13 directions

use crate::board::{Board, CellView, Coord, Player, BOARD_SIZE};

use super::directions::{reversed, run_length, DIRECTIONS, WIN_LENGTH};

/// Would `player` dropping a stone at `pos` complete four in a row?
///
/// The stone is laid over `board` as a view; `board` itself is untouched.
#[inline]
pub fn would_win(board: &Board, pos: Coord, player: Player) -> bool {
    has_four_at(&board.with_stone(pos, player), pos, player)
}

/// Fast four-in-a-row check through a specific position.
///
/// The cell at `pos` is assumed to hold `player`'s stone; only the cells on
/// either side of it are read. No allocation.
#[inline]
pub fn has_four_at<V: CellView>(view: &V, pos: Coord, player: Player) -> bool {
    DIRECTIONS.iter().any(|&dir| {
        let count = 1 + run_length(view, pos, dir, player) + run_length(view, pos, reversed(dir), player);
        count >= WIN_LENGTH
    })
}

/// Cells of the first winning run through `pos`, ordered along the line.
///
/// Returns `None` if no direction through `pos` holds four of `player`'s stones.
pub fn winning_line<V: CellView>(view: &V, pos: Coord, player: Player) -> Option<Vec<Coord>> {
    if view.cell(pos) != Some(player) {
        return None;
    }

    for &dir in &DIRECTIONS {
        let back = run_length(view, pos, reversed(dir), player) as i8;
        let fwd = run_length(view, pos, dir, player) as i8;
        if (back + fwd + 1) as usize >= WIN_LENGTH {
            let line = (-back..=fwd).filter_map(|k| pos.offset(dir, k)).collect();
            return Some(line);
        }
    }
    None
}

/// Find any completed line on the board and its owner.
pub fn find_winning_line(board: &Board) -> Option<(Player, Vec<Coord>)> {
    for z in 0..BOARD_SIZE as u8 {
        for y in 0..BOARD_SIZE as u8 {
            for x in 0..BOARD_SIZE as u8 {
                let pos = Coord::new(x, y, z);
                if let Some(player) = board.get(pos) {
                    if let Some(line) = winning_line(board, pos, player) {
                        return Some((player, line));
                    }
                }
            }
        }
    }
    None
}

/// Check for a winner
///
/// Returns `Some(Player)` if either side owns a completed line.
pub fn check_winner(board: &Board) -> Option<Player> {
    find_winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Column;
    use std::collections::BTreeSet;

    fn key(line: &[Coord]) -> BTreeSet<(u8, u8, u8)> {
        line.iter().map(|c| (c.x, c.y, c.z)).collect()
    }

    #[test]
    fn test_x_axis_win() {
        let mut board = Board::new();
        for x in 0..3 {
            board.place_stone(Coord::new(x, 0, 0), Player::Black);
        }
        assert!(would_win(&board, Coord::new(3, 0, 0), Player::Black));
        assert!(!would_win(&board, Coord::new(3, 0, 0), Player::White));
        assert!(!would_win(&board, Coord::new(3, 1, 0), Player::Black));
        // Caller's board is left alone
        assert!(board.is_empty(Coord::new(3, 0, 0)));
    }

    #[test]
    fn test_gap_fill_win() {
        let mut board = Board::new();
        board.place_stone(Coord::new(0, 2, 0), Player::White);
        board.place_stone(Coord::new(0, 2, 1), Player::White);
        board.place_stone(Coord::new(0, 2, 3), Player::White);
        // Filling the middle completes the vertical line
        assert!(would_win(&board, Coord::new(0, 2, 2), Player::White));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        let col = Column::new(1, 2);
        for _ in 0..3 {
            board.drop_stone(col, Player::White);
        }
        let top = board.landing(col).unwrap();
        assert_eq!(top.z, 3);
        assert!(would_win(&board, top, Player::White));
    }

    #[test]
    fn test_space_diagonal_win() {
        let mut board = Board::new();
        // (1,-1,1) family: (0,3,0) (1,2,1) (2,1,2) (3,0,3)
        board.place_stone(Coord::new(0, 3, 0), Player::Black);
        board.place_stone(Coord::new(1, 2, 1), Player::Black);
        board.place_stone(Coord::new(3, 0, 3), Player::Black);
        assert!(would_win(&board, Coord::new(2, 1, 2), Player::Black));
    }

    #[test]
    fn test_face_diagonal_win() {
        let mut board = Board::new();
        // xz anti-diagonal (1,0,-1): (0,1,3) (1,1,2) (2,1,1) (3,1,0)
        board.place_stone(Coord::new(0, 1, 3), Player::White);
        board.place_stone(Coord::new(1, 1, 2), Player::White);
        board.place_stone(Coord::new(3, 1, 0), Player::White);
        assert!(would_win(&board, Coord::new(2, 1, 1), Player::White));
    }

    #[test]
    fn test_three_not_win() {
        let mut board = Board::new();
        board.place_stone(Coord::new(0, 0, 0), Player::Black);
        board.place_stone(Coord::new(1, 1, 0), Player::Black);
        assert!(!would_win(&board, Coord::new(2, 2, 0), Player::Black));
    }

    #[test]
    fn test_opponent_stone_breaks_line() {
        let mut board = Board::new();
        board.place_stone(Coord::new(0, 0, 0), Player::Black);
        board.place_stone(Coord::new(1, 0, 0), Player::White);
        board.place_stone(Coord::new(2, 0, 0), Player::Black);
        assert!(!would_win(&board, Coord::new(3, 0, 0), Player::Black));
    }

    #[test]
    fn test_line_agrees_from_every_member() {
        let mut board = Board::new();
        let cells = [
            Coord::new(0, 0, 0),
            Coord::new(1, 1, 1),
            Coord::new(2, 2, 2),
            Coord::new(3, 3, 3),
        ];
        for &c in &cells {
            board.place_stone(c, Player::Black);
        }
        let expected = key(&cells);
        for &c in &cells {
            let line = winning_line(&board, c, Player::Black).unwrap();
            assert_eq!(key(&line), expected, "from {}", c);
            assert!(has_four_at(&board, c, Player::Black));
        }
    }

    #[test]
    fn test_winning_line_through_overlay() {
        let mut board = Board::new();
        for y in 1..4 {
            board.place_stone(Coord::new(2, y, 0), Player::White);
        }
        let pos = Coord::new(2, 0, 0);
        let view = board.with_stone(pos, Player::White);
        let line = winning_line(&view, pos, Player::White).unwrap();
        assert_eq!(line.len(), 4);
        assert_eq!(line[0], pos);
        assert_eq!(line[3], Coord::new(2, 3, 0));
    }

    #[test]
    fn test_check_winner() {
        let mut board = Board::new();
        assert_eq!(check_winner(&board), None);
        for z in 0..4 {
            board.place_stone(Coord::new(3, 3, z), Player::White);
        }
        assert_eq!(check_winner(&board), Some(Player::White));
        let (player, line) = find_winning_line(&board).unwrap();
        assert_eq!(player, Player::White);
        assert_eq!(line.len(), 4);
    }
}
