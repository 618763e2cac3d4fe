//! Viewmaster probe - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use viewmaster::config::{CliOverrides, OutputFormat};
use viewmaster::error::AppError;
use viewmaster::scene::Scene;

/// Viewmaster probe - evaluate viewport geometry queries for a recorded scene
#[derive(Parser, Debug)]
#[command(name = "viewmaster")]
#[command(version)]
#[command(about = "Evaluate viewport geometry queries against a recorded scene file")]
pub struct Args {
    /// Path to a JSON scene file
    pub scene: PathBuf,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Buffer for "is element top in view"
    #[arg(long, allow_negative_numbers = true)]
    pub top_buffer: Option<f64>,

    /// Buffer for "is element bottom in view"
    #[arg(long, allow_negative_numbers = true)]
    pub bottom_buffer: Option<f64>,

    /// Buffer for "is element in viewport"
    #[arg(long, allow_negative_numbers = true)]
    pub viewport_buffer: Option<f64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = viewmaster::config::load_config_with_precedence(args.config.clone())?;
        let merged = viewmaster::config::merge_config(config_file);
        let with_env = viewmaster::config::apply_env_overrides(merged);

        let overrides = CliOverrides {
            format: args.format,
            top_buffer: args.top_buffer,
            bottom_buffer: args.bottom_buffer,
            viewport_buffer: args.viewport_buffer,
        };
        viewmaster::config::apply_cli_overrides(with_env, overrides)
    };

    viewmaster::logging::init(&config.log_file_path)?;

    info!(config = ?config, scene = ?args.scene, "viewmaster probe starting");

    let scene = Scene::load(&args.scene)?;
    let report = scene.evaluate(config.buffers)?;

    match config.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    info!(elements = report.elements.len(), "report written");
    Ok(())
}
