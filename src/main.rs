//! Macro snapshot CLI
//!
//! Prints fair value, cycle progress, risk score and market phase for one
//! asset at a given price as JSON on stdout.
//!
//! Usage:
//!   wealth-navigator BTC 64250
//!   wealth-navigator ETH 3100 --config calibration.json
//!
//! Environment:
//!   MACRO_CONFIG_PATH - JSON calibration file (same as --config)
//!   RUST_LOG, LOKI_ENABLED, LOKI_URL - logging, see logging.rs

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::info;

use wealth_navigator::logging::{init_logging, LoggingConfig};
use wealth_navigator::utils::parse_price;
use wealth_navigator::{AssetId, MacroConfig, MacroEngine};

#[derive(Parser, Debug)]
#[command(name = "wealth-navigator")]
#[command(about = "Macro risk score, cycle progress and market phase for an asset")]
struct Args {
    /// Asset ticker (BTC, ETH; anything else uses the default fair value)
    asset: String,

    /// Current market price in USD
    #[arg(value_parser = parse_price)]
    price: f64,

    /// JSON calibration file overriding the built-in constants
    #[arg(long, env = "MACRO_CONFIG_PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env())
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    let config = match &args.config {
        Some(path) => MacroConfig::from_file(path)
            .with_context(|| format!("failed to load calibration from {}", path.display()))?,
        None => MacroConfig::default(),
    };
    let engine = MacroEngine::new(config).context("invalid macro calibration")?;

    let snapshot = engine.snapshot(AssetId::from_string(&args.asset), args.price);
    info!(
        "📊 {} at {:.2}: risk {} ({}), cycle {}% complete",
        snapshot.asset,
        snapshot.current_price,
        snapshot.risk_score,
        snapshot.phase,
        snapshot.cycle.percent_complete
    );

    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
