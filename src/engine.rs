//! Move selection integrating the rule and evaluation components
//!
//! The engine is a stateless priority cascade. It returns at the first rule
//! that produces a column:
//!
//! 1. **Immediate win**: a column where the mover completes four in a row
//! 2. **Block**: a column where the opponent would complete four in a row
//! 3. **Fallback policy**: best line-potential score, or the center-preference
//!    list, depending on [`FallbackPolicy`]
//! 4. **First available**: the first open column in scan order
//!
//! Every scan runs x outer, y inner; the first match in that order wins ties.
//! A full board yields the `(0, 0)` sentinel with [`MoveRule::NoLegalMove`].
//!
//! # Example
//!
//! ```
//! use cube4::{AIEngine, Board, Column, Coord, MoveRule, Player};
//!
//! let mut board = Board::new();
//! for x in 0..3 {
//!     board.place_stone(Coord::new(x, 0, 0), Player::Black);
//! }
//!
//! let engine = AIEngine::new();
//! let result = engine.get_move_with_stats(&board, Player::Black);
//! assert_eq!(result.column, Column::new(3, 0));
//! assert_eq!(result.rule, MoveRule::ImmediateWin);
//! ```

use crate::board::{Board, Column, Coord, Player};
use crate::config::{EngineConfig, FallbackPolicy};
use crate::eval::{center_move, potential_lines};
use crate::rules::would_win;

/// Rule of the cascade that produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRule {
    /// The move completes four in a row for the mover
    ImmediateWin,
    /// The move occupies the opponent's winning cell
    Block,
    /// Highest line-potential score
    BestPotential,
    /// First open column of the center-preference list
    CenterPreference,
    /// First open column in scan order
    FirstAvailable,
    /// Board is full; the column is the `(0, 0)` sentinel
    NoLegalMove,
}

/// Result of a move decision.
///
/// Carries the intermediate values observers need to explain the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Column to drop into (`(0, 0)` when no legal move exists)
    pub column: Column,
    /// Rule that fired
    pub rule: MoveRule,
    /// Cell the stone lands on, `None` for the sentinel
    pub landing: Option<Coord>,
    /// Line-potential score of the landing cell for the mover
    pub score: Option<u8>,
}

impl MoveResult {
    #[inline]
    fn at(board: &Board, column: Column, rule: MoveRule, score: Option<u8>) -> Self {
        Self {
            column,
            rule,
            landing: board.landing(column),
            score,
        }
    }

    /// Create a result for an immediate win
    #[inline]
    fn immediate_win(board: &Board, column: Column) -> Self {
        Self::at(board, column, MoveRule::ImmediateWin, None)
    }

    /// Create a result for a blocking move
    #[inline]
    fn block(board: &Board, column: Column) -> Self {
        Self::at(board, column, MoveRule::Block, None)
    }

    /// Create a result from potential scoring
    #[inline]
    fn best_potential(board: &Board, column: Column, score: u8) -> Self {
        Self::at(board, column, MoveRule::BestPotential, Some(score))
    }

    #[inline]
    fn center_preference(board: &Board, column: Column) -> Self {
        Self::at(board, column, MoveRule::CenterPreference, None)
    }

    #[inline]
    fn first_available(board: &Board, column: Column) -> Self {
        Self::at(board, column, MoveRule::FirstAvailable, None)
    }

    /// Create the sentinel result for a full board
    #[inline]
    fn no_move() -> Self {
        Self {
            column: Column::default(),
            rule: MoveRule::NoLegalMove,
            landing: None,
            score: None,
        }
    }

    /// `false` only for the full-board sentinel
    #[inline]
    pub fn is_legal(&self) -> bool {
        self.rule != MoveRule::NoLegalMove
    }
}

/// Move-selection engine.
///
/// Holds configuration only; every call works from the board it is given and
/// keeps nothing afterwards, so one engine can serve any number of games.
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    /// Create an engine with the default (potential-lines) policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn with_policy(fallback: FallbackPolicy) -> Self {
        Self::with_config(EngineConfig { fallback })
    }

    #[must_use]
    pub fn policy(&self) -> FallbackPolicy {
        self.config.fallback
    }

    pub fn set_policy(&mut self, fallback: FallbackPolicy) {
        self.config.fallback = fallback;
    }

    /// Host entry point: board, acting player and the last move played.
    ///
    /// `last_move` is accepted for interface compatibility and not used.
    /// Returns `(0, 0)` when the board is full; check `Board::is_full` or use
    /// `get_move_with_stats` to tell that apart from a real move.
    #[must_use]
    pub fn get_move(&self, board: &Board, player: Player, _last_move: Option<Coord>) -> Column {
        self.get_move_with_stats(board, player).column
    }

    /// Run the cascade and report which rule fired.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board, player: Player) -> MoveResult {
        let result = self.decide(board, player);
        log::debug!(
            "{:?} to move: {:?} at column {} (score {:?})",
            player,
            result.rule,
            result.column,
            result.score
        );
        result
    }

    fn decide(&self, board: &Board, player: Player) -> MoveResult {
        // 1. Win now
        if let Some(column) = find_winning_move(board, player) {
            return MoveResult::immediate_win(board, column);
        }

        // 2. Block the opponent's win
        if let Some(column) = find_winning_move(board, player.opponent()) {
            return MoveResult::block(board, column);
        }

        // 3. Fallback policy
        match self.config.fallback {
            FallbackPolicy::PotentialLines => {
                if let Some((column, score)) = find_best_potential(board, player) {
                    return MoveResult::best_potential(board, column, score);
                }
            }
            FallbackPolicy::CenterPreference => {
                if let Some(column) = center_move(board) {
                    return MoveResult::center_preference(board, column);
                }
            }
        }

        // 4. Anything open
        match find_first_available(board) {
            Some(column) => MoveResult::first_available(board, column),
            None => MoveResult::no_move(),
        }
    }
}

/// First open column, in scan order, where `player` dropping a stone wins.
#[must_use]
pub fn find_winning_move(board: &Board, player: Player) -> Option<Column> {
    board.open_columns().find(|&column| {
        let z = board.drop_height(column);
        would_win(board, column.at(z), player)
    })
}

/// Open column with the highest potential score for `player`.
///
/// Ties keep the earliest column in scan order.
#[must_use]
pub fn find_best_potential(board: &Board, player: Player) -> Option<(Column, u8)> {
    let mut best: Option<(Column, u8)> = None;
    for column in board.open_columns() {
        let z = board.drop_height(column);
        let score = potential_lines(board, column.at(z), player);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((column, score));
        }
    }
    best
}

/// First open column in scan order
#[must_use]
pub fn find_first_available(board: &Board) -> Option<Column> {
    board.open_columns().next()
}

/// Pick a column for `player` with the default policy.
#[must_use]
pub fn select_move(board: &Board, player: Player) -> Column {
    AIEngine::new().get_move_with_stats(board, player).column
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn three_in_a_row() -> Board {
        let mut board = Board::new();
        for x in 0..3 {
            board.place_stone(Coord::new(x, 0, 0), Player::Black);
        }
        board
    }

    /// Drawn end position: 32 stones each, no four anywhere.
    const DRAWN_BOARD: &str = "
        z=0
        O X O X
        X O X O
        O X X X
        O X X O
        z=1
        O X X O
        X O O X
        X O X O
        X O O X
        z=2
        X O O X
        O O X O
        X O X O
        O X X X
        z=3
        O O O X
        X X X O
        O X O X
        O O X O
    ";

    /// Every `CENTER_ORDER` column full, the rest empty, and no drop that
    /// completes four for either side.
    const CENTER_FILLED: &str = "
        z=0
        . O . .
        O X O .
        . X X O
        . . X .
        z=1
        . X . .
        X O X .
        . O X X
        . . X .
        z=2
        . O . .
        X X X .
        . O O X
        . . O .
        z=3
        . O . .
        O O O .
        . O X X
        . . O .
    ";

    fn full_board() -> Board {
        DRAWN_BOARD.parse().unwrap()
    }

    #[test]
    fn test_engine_default_policy() {
        let engine = AIEngine::default();
        assert_eq!(engine.policy(), FallbackPolicy::PotentialLines);
    }

    #[test]
    fn test_engine_set_policy() {
        let mut engine = AIEngine::new();
        engine.set_policy(FallbackPolicy::CenterPreference);
        assert_eq!(engine.policy(), FallbackPolicy::CenterPreference);
    }

    #[test]
    fn test_empty_board_takes_best_potential() {
        let board = Board::new();
        let result = AIEngine::new().get_move_with_stats(&board, Player::Black);

        // Brute-force scan for the first maximal column
        let mut expected = None;
        let mut top = 0;
        for column in Column::all() {
            let score = potential_lines(&board, column.at(0), Player::Black);
            if expected.is_none() || score > top {
                expected = Some(column);
                top = score;
            }
        }

        assert_eq!(result.rule, MoveRule::BestPotential);
        assert_eq!(Some(result.column), expected);
        assert_eq!(result.column, Column::new(0, 0));
        assert_eq!(result.score, Some(7));
        assert_eq!(result.landing, Some(Coord::new(0, 0, 0)));
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let board = three_in_a_row();
        let result = AIEngine::new().get_move_with_stats(&board, Player::Black);
        assert_eq!(result.column, Column::new(3, 0));
        assert_eq!(result.rule, MoveRule::ImmediateWin);
        assert_eq!(result.landing, Some(Coord::new(3, 0, 0)));
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let board = three_in_a_row();
        let result = AIEngine::new().get_move_with_stats(&board, Player::White);
        assert_eq!(result.column, Column::new(3, 0));
        assert_eq!(result.rule, MoveRule::Block);
    }

    #[test]
    fn test_win_beats_block() {
        let mut board = three_in_a_row();
        for x in 0..3 {
            board.place_stone(Coord::new(x, 3, 0), Player::White);
        }
        let engine = AIEngine::new();
        assert_eq!(engine.get_move(&board, Player::Black, None), Column::new(3, 0));
        assert_eq!(engine.get_move(&board, Player::White, None), Column::new(3, 3));
        assert_eq!(
            engine.get_move_with_stats(&board, Player::White).rule,
            MoveRule::ImmediateWin
        );
    }

    #[test]
    fn test_vertical_win_needs_landing_height() {
        let mut board = Board::new();
        let col = Column::new(2, 2);
        for _ in 0..3 {
            board.drop_stone(col, Player::White);
        }
        assert_eq!(find_winning_move(&board, Player::White), Some(col));
        assert_eq!(select_move(&board, Player::Black), col);
    }

    #[test]
    fn test_full_board_returns_sentinel() {
        let board = full_board();
        assert!(board.is_full());
        for player in [Player::Black, Player::White] {
            let result = AIEngine::new().get_move_with_stats(&board, player);
            assert_eq!(result.column, Column::new(0, 0));
            assert_eq!(result.rule, MoveRule::NoLegalMove);
            assert_eq!(result.landing, None);
            assert!(!result.is_legal());
        }
        let center = AIEngine::with_policy(FallbackPolicy::CenterPreference);
        assert_eq!(center.get_move(&board, Player::Black, None), Column::new(0, 0));
    }

    #[test]
    fn test_single_open_column() {
        let open = Column::new(2, 3);
        let mut board = full_board();
        for z in (1..4).rev() {
            board.remove_stone(open.at(z));
        }
        assert_eq!(board.open_columns().collect::<Vec<_>>(), vec![open]);
        for player in [Player::Black, Player::White] {
            assert_eq!(select_move(&board, player), open);
            let center = AIEngine::with_policy(FallbackPolicy::CenterPreference);
            assert_eq!(center.get_move(&board, player, None), open);
        }
    }

    #[test]
    fn test_center_policy() {
        let engine = AIEngine::with_policy(FallbackPolicy::CenterPreference);
        let result = engine.get_move_with_stats(&Board::new(), Player::Black);
        assert_eq!(result.column, Column::new(1, 1));
        assert_eq!(result.rule, MoveRule::CenterPreference);
        assert_eq!(result.score, None);

        // Win still comes first
        let result = engine.get_move_with_stats(&three_in_a_row(), Player::Black);
        assert_eq!(result.rule, MoveRule::ImmediateWin);
    }

    #[test]
    fn test_full_board_fixture_is_drawn() {
        let board = full_board();
        assert!(board.is_full());
        assert_eq!(board.count(Player::Black), 32);
        assert_eq!(crate::rules::check_winner(&board), None);
    }

    #[test]
    fn test_center_policy_falls_through_to_first_available() {
        let board: Board = CENTER_FILLED.parse().unwrap();
        for &(x, y) in &crate::eval::CENTER_ORDER {
            assert!(!board.is_column_open(Column::new(x, y)));
        }
        assert_eq!(crate::rules::check_winner(&board), None);

        let engine = AIEngine::with_policy(FallbackPolicy::CenterPreference);
        for player in [Player::Black, Player::White] {
            let result = engine.get_move_with_stats(&board, player);
            assert_eq!(result.rule, MoveRule::FirstAvailable);
            assert_eq!(result.column, Column::new(0, 0));
            assert_eq!(result.landing, Some(Coord::new(0, 0, 0)));
        }
    }

    #[test]
    fn test_best_potential_ties_keep_first() {
        let board = Board::new();
        let (column, score) = find_best_potential(&board, Player::White).unwrap();
        assert_eq!(column, Column::new(0, 0));
        assert_eq!(score, 7);
        assert_eq!(find_best_potential(&full_board(), Player::White), None);
    }

    #[test]
    fn test_random_boards_properties() {
        let mut rng = StdRng::seed_from_u64(42);
        let engine = AIEngine::new();
        for _ in 0..300 {
            let board = scenarios::random_board(&mut rng);
            for player in [Player::Black, Player::White] {
                let result = engine.get_move_with_stats(&board, player);

                // Deterministic, no hidden state
                assert_eq!(engine.get_move_with_stats(&board, player), result);

                if board.is_full() {
                    assert_eq!(result.rule, MoveRule::NoLegalMove);
                    continue;
                }
                assert!(board.is_column_open(result.column));

                let win = find_winning_move(&board, player);
                let block = find_winning_move(&board, player.opponent());
                match (win, block) {
                    (Some(w), _) => {
                        assert_eq!(result.column, w);
                        let pos = board.landing(w).unwrap();
                        assert!(would_win(&board, pos, player));
                    }
                    (None, Some(b)) => assert_eq!(result.column, b),
                    (None, None) => assert_eq!(result.rule, MoveRule::BestPotential),
                }
            }
        }
    }

    #[test]
    fn test_engine_leaves_board_untouched() {
        let board = scenarios::center_cluster();
        let before = board;
        let _ = select_move(&board, Player::Black);
        let _ = select_move(&board, Player::White);
        assert_eq!(board, before);
    }
}
