//! raster-demo - render the circle and glyph scenes to PNG.
//!
//! Writes `circleBresenham.png`, `circleMidpoint.png`, `bresenham.png` and
//! `dda.png` into the working directory. Set `RUST_LOG=debug` for per-scene
//! detail.

use std::process::ExitCode;

use pixel_raster::demo::{self, DemoConfig};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match demo::run(&DemoConfig::default()) {
        Ok(paths) => {
            tracing::info!(count = paths.len(), "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to write images");
            ExitCode::FAILURE
        }
    }
}
