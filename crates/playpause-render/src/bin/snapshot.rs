//! Write one SVG per button state, at rest and pressed.
//!
//! ```bash
//! playpause-snapshot [CONFIG.json] [OUT_DIR] [--size 120]
//! ```

use clap::Parser;
use playpause_core::ButtonConfig;
use playpause_render::{RenderResult, write_snapshots};
use std::path::PathBuf;
use std::process::ExitCode;

/// Render snapshot frames of the play button
#[derive(Parser, Debug)]
#[command(name = "playpause-snapshot")]
struct Args {
    /// JSON configuration; missing fields take the defaults
    config: Option<PathBuf>,

    /// Output directory
    #[arg(default_value = "snapshots")]
    out_dir: PathBuf,

    /// Button edge length
    #[arg(long, default_value_t = 120.0)]
    size: f64,
}

fn run(args: &Args) -> RenderResult<usize> {
    let config = match &args.config {
        Some(path) => ButtonConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => ButtonConfig::default(),
    };
    Ok(write_snapshots(&config, args.size, &args.out_dir)?.len())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(count) => {
            log::info!("{count} snapshots in {}", args.out_dir.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Snapshot failed: {e}");
            eprintln!("playpause-snapshot: {e}");
            ExitCode::FAILURE
        }
    }
}
