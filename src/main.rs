//! Cube 4 GUI
//!
//! Play 4x4x4 gravity connect-four against the engine or another player.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cube4::ui::Cube4App;
use cube4::{EngineConfig, FallbackPolicy};

#[derive(Parser, Debug)]
#[command(name = "cube4", about = "4x4x4 gravity connect-four")]
struct Cli {
    /// Engine configuration file (TOML)
    #[arg(long, default_value = "cube4.toml")]
    config: PathBuf,

    /// Override the fallback policy from the configuration
    #[arg(long, value_enum)]
    policy: Option<FallbackPolicy>,
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();
    let mut config = EngineConfig::load_or_default(&cli.config)?;
    if let Some(policy) = cli.policy {
        config.fallback = policy;
    }
    log::info!("starting GUI with {} fallback", config.fallback.name());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 560.0])
            .with_min_inner_size([900.0, 420.0])
            .with_title("Cube 4"),
        ..Default::default()
    };

    eframe::run_native(
        "Cube 4",
        options,
        Box::new(move |cc| Ok(Box::new(Cube4App::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}
