//! GUI module for the 4x4x4 board
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::Cube4App;
pub use game_state::{GameMode, GameResult, GameState};
