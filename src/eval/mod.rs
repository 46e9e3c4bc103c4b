//! Evaluation of candidate placements
//!
//! - Line potential: how many directions through a cell remain open
//! - Center preference: fixed column ordering

pub mod center;
pub mod potential;

pub use center::{center_move, CENTER_ORDER};
pub use potential::{potential_lines, potential_map};
