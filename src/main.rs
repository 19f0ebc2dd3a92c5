//! Demo binary: run one random scan against two simulated axes.
//!
//! Builds a pair of `MockAxis` stages, runs the full generate/optimize/move
//! pipeline, and prints the scan summary as JSON. Useful for exercising the
//! controller without hardware:
//!
//! ```text
//! rust_scan --points 6 --x-max 10 --y-max 10 --seed 42
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rust_scan::config::ScanSettings;
use rust_scan::hardware::MockAxis;
use rust_scan::scan::{ScanController, ScanState};

#[derive(Parser, Debug)]
#[command(name = "rust_scan", about = "Two-axis random scan controller demo")]
struct Cli {
    /// Optional TOML settings file; when given, the point/bound flags are ignored.
    #[arg(long)]
    config: Option<String>,

    /// Number of random scan points.
    #[arg(long, default_value_t = 5)]
    points: u32,

    /// Minimum X limit (inclusive).
    #[arg(long, default_value_t = 0.0)]
    x_min: f64,

    /// Maximum X limit (inclusive).
    #[arg(long, default_value_t = 1.0)]
    x_max: f64,

    /// Minimum Y limit (inclusive).
    #[arg(long, default_value_t = 0.0)]
    y_min: f64,

    /// Maximum Y limit (inclusive).
    #[arg(long, default_value_t = 1.0)]
    y_max: f64,

    /// Seed for the random source; omit for entropy seeding.
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated per-move settling time in milliseconds.
    #[arg(long, default_value_t = 10)]
    move_delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = match &cli.config {
        Some(path) => ScanSettings::from_file(path)?,
        None => {
            let settings = ScanSettings {
                motor_x_id: "mock_x".to_string(),
                motor_y_id: "mock_y".to_string(),
                num_points: cli.points,
                x_min: cli.x_min,
                x_max: cli.x_max,
                y_min: cli.y_min,
                y_max: cli.y_max,
            };
            settings.validate()?;
            settings
        }
    };

    let delay = Duration::from_millis(cli.move_delay_ms);
    let x_axis = Arc::new(MockAxis::with_move_delay(&settings.motor_x_id, delay));
    let y_axis = Arc::new(MockAxis::with_move_delay(&settings.motor_y_id, delay));

    let mut controller = match cli.seed {
        Some(seed) => ScanController::with_rng(
            settings,
            x_axis,
            y_axis,
            Box::new(StdRng::seed_from_u64(seed)),
        ),
        None => ScanController::new(settings, x_axis, y_axis),
    };

    controller.start().await;

    match controller.state() {
        ScanState::Ready => {
            if let Some(summary) = controller.last_summary() {
                println!("{}", serde_json::to_string_pretty(summary)?);
            }
            Ok(())
        }
        state => {
            anyhow::bail!("scan finished in state {}: {}", state, controller.status())
        }
    }
}
