//! Game rules for the 4x4x4 gravity game
//!
//! - Line geometry (13 directions through a cell)
//! - Win condition (four in a row along any direction)

pub mod directions;
pub mod win;

// Re-exports for convenient access
pub use directions::{open_reach, reversed, run_length, DIRECTIONS, WIN_LENGTH};
pub use win::{check_winner, find_winning_line, has_four_at, winning_line, would_win};
