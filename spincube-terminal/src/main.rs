//! SpinCube - rotating shaded cube for the terminal
//!
//! Renders a continuously spinning, ASCII-shaded cube to stdout.
//! Runs until interrupted. Set RUST_LOG=debug for frame-rate logging.

use anyhow::Context;
use log::info;
use spincube_core::RenderOptions;
use spincube_terminal::CubeApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = RenderOptions::default();
    info!(
        "starting cube demo: {}x{} grid, sample step {}, camera distance {}",
        options.width, options.height, options.sample_step, options.camera_distance
    );

    let mut app = CubeApp::new(&options).context("invalid render options")?;
    app.run().context("terminal presentation failed")
}
