//! Human-readable observers for engine decisions
//!
//! Nothing here feeds back into move selection; these only format values the
//! engine and evaluators already produce.

use crate::board::{Player, BOARD_SIZE};
use crate::engine::{MoveResult, MoveRule};

/// Human-readable name of a player
pub fn player_name(player: Player) -> &'static str {
    match player {
        Player::Black => "Black",
        Player::White => "White",
    }
}

/// One-line reason for a decision made on behalf of `player`.
pub fn explain(result: &MoveResult, player: Player) -> String {
    let column = result.column;
    match result.rule {
        MoveRule::ImmediateWin => {
            format!("{} wins by dropping into column {}", player_name(player), column)
        }
        MoveRule::Block => format!(
            "{} blocks column {}, where {} would complete four",
            player_name(player),
            column,
            player_name(player.opponent())
        ),
        MoveRule::BestPotential => format!(
            "no immediate threats; column {} keeps {} line(s) open, the most available",
            column,
            result.score.unwrap_or(0)
        ),
        MoveRule::CenterPreference => {
            format!("no immediate threats; column {} is the first open central column", column)
        }
        MoveRule::FirstAvailable => format!("column {} is the first open column", column),
        MoveRule::NoLegalMove => "board is full, no legal move".to_string(),
    }
}

/// Render a per-column score map (indexed `[y][x]`) as a small grid.
/// Full columns print as `-`.
pub fn render_potential_map(map: &[[Option<u8>; BOARD_SIZE]; BOARD_SIZE]) -> String {
    let mut out = String::from("    x0 x1 x2 x3\n");
    for (y, row) in map.iter().enumerate() {
        out.push_str(&format!("y{} ", y));
        for cell in row {
            match cell {
                Some(score) => out.push_str(&format!("{:3}", score)),
                None => out.push_str("  -"),
            }
        }
        out.push('\n');
    }
    out
}
