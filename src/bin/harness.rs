//! Cube 4 engine harness
//!
//! Runs the move engine over a fixed suite of positions, or over a single
//! board read from a text file, and prints each decision with its reason.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cube4::diagnostics::{explain, player_name, render_potential_map};
use cube4::eval::potential_map;
use cube4::scenarios::{center_cluster, corner_cluster, nearly_full, random_board};
use cube4::{AIEngine, Board, Column, EngineConfig, FallbackPolicy, MoveRule, Player};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "cube4-harness", about = "Exercise the 4x4x4 move engine")]
struct Cli {
    /// Engine configuration file (TOML)
    #[arg(long, default_value = "cube4.toml")]
    config: PathBuf,

    /// Override the fallback policy from the configuration
    #[arg(long, value_enum)]
    policy: Option<FallbackPolicy>,

    /// Evaluate a single board in text notation instead of the suite
    #[arg(long)]
    board: Option<PathBuf>,

    /// Side to move for --board (1 = Black, 2 = White)
    #[arg(long, default_value_t = 1)]
    player: u8,

    /// Seed for the random positions
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let cli = Cli::parse();

    let mut config = EngineConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(policy) = cli.policy {
        config.fallback = policy;
    }
    let engine = AIEngine::with_config(config);

    println!("===========================================");
    println!("       Cube 4 Engine ({})", engine.policy().name());
    println!("===========================================\n");

    if let Some(path) = &cli.board {
        let Some(player) = Player::from_id(cli.player) else {
            bail!("--player must be 1 or 2, got {}", cli.player);
        };
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let board: Board = text.parse().with_context(|| format!("parsing {}", path.display()))?;
        run_case(&engine, "board file", &board, player);
        return Ok(());
    }

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut cases: Vec<(String, Board, Player)> = vec![
        ("empty board".into(), Board::new(), Player::Black),
        ("immediate win".into(), floor_row(Player::Black, Player::White), Player::Black),
        ("forced block".into(), floor_row(Player::White, Player::Black), Player::Black),
        ("center cluster".into(), center_cluster(), Player::Black),
        ("corner cluster".into(), corner_cluster(), Player::White),
        ("nearly full".into(), nearly_full(&mut rng), Player::Black),
    ];
    for i in 0..3 {
        cases.push((format!("random #{}", i + 1), random_board(&mut rng), Player::Black));
    }
    cases.push(("random, White to move".into(), random_board(&mut rng), Player::White));

    let mut tally = [0usize; 6];
    let start = Instant::now();
    for (name, board, player) in &cases {
        let rule = run_case(&engine, name, board, *player);
        tally[rule_index(rule)] += 1;
    }

    println!("===========================================");
    println!("  {} positions in {:?}", cases.len(), start.elapsed());
    for rule in [
        MoveRule::ImmediateWin,
        MoveRule::Block,
        MoveRule::BestPotential,
        MoveRule::CenterPreference,
        MoveRule::FirstAvailable,
        MoveRule::NoLegalMove,
    ] {
        let n = tally[rule_index(rule)];
        if n > 0 {
            println!("  {:<16} {}", format!("{:?}", rule), n);
        }
    }
    println!("===========================================");
    Ok(())
}

/// Three stones of `mover` along x on the floor at y = 0, with `other`
/// answering in scattered columns that build no threat of their own.
fn floor_row(mover: Player, other: Player) -> Board {
    const REPLIES: [(u8, u8); 3] = [(0, 3), (3, 3), (1, 2)];
    let mut board = Board::new();
    for (x, (rx, ry)) in (0..3).zip(REPLIES) {
        board.drop_stone(Column::new(x, 0), mover);
        board.drop_stone(Column::new(rx, ry), other);
    }
    board
}

fn rule_index(rule: MoveRule) -> usize {
    match rule {
        MoveRule::ImmediateWin => 0,
        MoveRule::Block => 1,
        MoveRule::BestPotential => 2,
        MoveRule::CenterPreference => 3,
        MoveRule::FirstAvailable => 4,
        MoveRule::NoLegalMove => 5,
    }
}

fn run_case(engine: &AIEngine, name: &str, board: &Board, player: Player) -> MoveRule {
    println!("--- {} ({} to move, {} stones) ---", name, player_name(player), board.stone_count());
    println!("{}", board);

    let start = Instant::now();
    let result = engine.get_move_with_stats(board, player);
    let elapsed = start.elapsed();

    println!("  Column: {}", result.column);
    println!("  Rule:   {:?}", result.rule);
    println!("  {}", explain(&result, player));
    println!("  Time:   {:?}", elapsed);
    println!("  Potential for {}:", player_name(player));
    println!("{}", render_potential_map(&potential_map(board, player)));
    result.rule
}
