//! Game state management for the GUI

use crate::diagnostics::player_name;
use crate::rules::winning_line;
use crate::{AIEngine, Board, Column, Coord, FallbackPolicy, MoveResult, Player};
use std::time::{Duration, Instant};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE {
        human: Player,
    },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::Black }
    }
}

/// Game result. `winner` is `None` for a draw on a full board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Option<Player>,
    pub winning_line: Vec<Coord>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Player,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Coord>,
    pub move_history: Vec<(Coord, Player)>,
    pub last_ai_result: Option<(MoveResult, Player)>,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Column>,
    pub message: Option<String>,
    engine: AIEngine,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self::with_engine(mode, AIEngine::new())
    }

    pub fn with_engine(mode: GameMode, engine: AIEngine) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_turn: Player::Black,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            engine,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::with_engine(self.mode, self.engine.clone());
    }

    /// Start a new game in another mode, keeping the engine settings
    pub fn restart(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    pub fn policy(&self) -> FallbackPolicy {
        self.engine.policy()
    }

    pub fn set_policy(&mut self, policy: FallbackPolicy) {
        log::info!("fallback policy set to {}", policy.name());
        self.engine.set_policy(policy);
        self.suggested_move = None;
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Attempt to drop a stone into the given column
    pub fn try_drop(&mut self, column: Column) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if !self.board.is_column_open(column) {
            return Err(format!("Column {} is full", column));
        }

        self.execute_move(column);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, column: Column) {
        let player = self.current_turn;
        let Some(pos) = self.board.drop_stone(column, player) else {
            self.message = Some(format!("Column {} is full", column));
            return;
        };

        log::info!("{} drops into {} -> {}", player_name(player), column, pos);

        self.move_history.push((pos, player));
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;

        if let Some(line) = winning_line(&self.board, pos, player) {
            log::info!("{} wins", player_name(player));
            self.game_over = Some(GameResult {
                winner: Some(player),
                winning_line: line,
            });
            return;
        }

        if self.board.is_full() {
            log::info!("board full, draw");
            self.game_over = Some(GameResult {
                winner: None,
                winning_line: Vec::new(),
            });
            return;
        }

        self.current_turn = player.opponent();
        self.move_timer.start();
    }

    /// Let the engine play for the side to move
    pub fn play_ai_move(&mut self) {
        if !self.is_ai_turn() || self.game_over.is_some() {
            return;
        }

        let player = self.current_turn;
        let start = Instant::now();
        let result = self.engine.get_move_with_stats(&self.board, player);
        self.move_timer.set_ai_time(start.elapsed());
        self.last_ai_result = Some((result, player));

        if result.is_legal() {
            self.execute_move(result.column);
        } else {
            self.message = Some("AI could not find a move".to_string());
        }
    }

    /// Request move suggestion for the side to move
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() {
            return;
        }

        let player = self.current_turn;
        let result = self.engine.get_move_with_stats(&self.board, player);
        self.suggested_move = result.is_legal().then_some(result.column);
        self.last_ai_result = Some((result, player));
    }

    /// Undo last move
    pub fn undo(&mut self) {
        if self.move_history.is_empty() {
            return;
        }

        // For PvE, take back the AI reply together with the human move
        let undo_count = match self.mode {
            GameMode::PvE { human } => {
                let last_mover = self.move_history.last().map(|&(_, p)| p);
                if last_mover != Some(human) && self.move_history.len() >= 2 {
                    2
                } else {
                    1
                }
            }
            GameMode::PvP => 1,
        };

        for _ in 0..undo_count {
            if let Some((pos, player)) = self.move_history.pop() {
                self.board.remove_stone(pos);
                self.current_turn = player;
            }
        }

        self.last_move = self.move_history.last().map(|&(pos, _)| pos);
        self.game_over = None;
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MoveRule;

    #[test]
    fn test_pvp_drop_and_turns() {
        let mut state = GameState::new(GameMode::PvP);
        state.try_drop(Column::new(1, 2)).unwrap();
        assert_eq!(state.current_turn, Player::White);
        assert_eq!(state.last_move, Some(Coord::new(1, 2, 0)));
        state.try_drop(Column::new(1, 2)).unwrap();
        assert_eq!(state.last_move, Some(Coord::new(1, 2, 1)));
        assert_eq!(state.current_turn, Player::Black);
    }

    #[test]
    fn test_full_column_rejected() {
        let mut state = GameState::new(GameMode::PvP);
        for _ in 0..4 {
            state.try_drop(Column::new(0, 0)).unwrap();
        }
        assert!(state.try_drop(Column::new(0, 0)).is_err());
    }

    #[test]
    fn test_pve_ai_replies_and_undo() {
        let mut state = GameState::new(GameMode::PvE { human: Player::Black });
        state.try_drop(Column::new(2, 2)).unwrap();
        assert!(state.is_ai_turn());
        state.play_ai_move();
        assert_eq!(state.move_history.len(), 2);
        assert_eq!(state.current_turn, Player::Black);
        let (result, player) = state.last_ai_result.unwrap();
        assert_eq!(player, Player::White);
        assert_eq!(result.rule, MoveRule::BestPotential);

        state.undo();
        assert!(state.move_history.is_empty());
        assert!(state.board.is_board_empty());
        assert_eq!(state.current_turn, Player::Black);
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = GameState::new(GameMode::PvP);
        // Black builds along x on the floor, White stacks on the far row
        for x in 0..3 {
            state.try_drop(Column::new(x, 0)).unwrap();
            state.try_drop(Column::new(x, 3)).unwrap();
        }
        state.try_drop(Column::new(3, 0)).unwrap();
        let result = state.game_over.clone().unwrap();
        assert_eq!(result.winner, Some(Player::Black));
        assert_eq!(result.winning_line.len(), 4);
        assert!(state.try_drop(Column::new(1, 1)).is_err());

        state.undo();
        assert!(state.game_over.is_none());
        assert_eq!(state.current_turn, Player::Black);
    }

    #[test]
    fn test_suggestion_prefers_win() {
        let mut state = GameState::new(GameMode::PvP);
        for x in 0..3 {
            state.try_drop(Column::new(x, 1)).unwrap();
            state.try_drop(Column::new(3 - x, 3)).unwrap();
        }
        // Black to move with its own win available at (3, 1)
        state.request_suggestion();
        assert_eq!(state.suggested_move, Some(Column::new(3, 1)));
    }
}
