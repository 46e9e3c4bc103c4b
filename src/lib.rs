//! Move engine for 4x4x4 gravity connect-four
//!
//! Stones drop along the vertical axis into the lowest empty cell of a column;
//! four in a row along any of the 13 lines through a cell wins:
//! - 3 axes
//! - 6 face diagonals
//! - 4 space diagonals
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, gravity queries and overlay views
//! - [`rules`]: Line geometry and win detection
//! - [`eval`]: Line-potential scoring and the center-preference list
//! - [`engine`]: Move selection cascade
//! - [`diagnostics`]: Text observers (move reasons, score maps)
//! - [`scenarios`]: Board generators for harnesses and tests
//!
//! # Quick Start
//!
//! ```
//! use cube4::{AIEngine, Board, Column, Player};
//!
//! let mut board = Board::new();
//! board.drop_stone(Column::new(1, 1), Player::Black);
//!
//! // Engine responds as White
//! let engine = AIEngine::new();
//! let column = engine.get_move(&board, Player::White, None);
//! if let Some(pos) = board.drop_stone(column, Player::White) {
//!     println!("AI plays at {}", pos);
//! }
//! ```
//!
//! # Decision Priority
//!
//! 1. Immediate winning move
//! 2. Block the opponent's immediate win
//! 3. Fallback policy (line potential by default, or center preference)
//! 4. First open column

pub mod board;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod scenarios;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, CellView, Column, Coord, Player, BOARD_SIZE};
pub use config::{EngineConfig, FallbackPolicy};
pub use engine::{select_move, AIEngine, MoveResult, MoveRule};
pub use error::{BoardError, ConfigError};
