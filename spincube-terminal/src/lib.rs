//! Terminal driver for the rotating cube demo

use log::debug;
use spincube_core::{CubeRenderer, OptionsError, Orientation, RenderOptions};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod presenter;

/// Degrees added to the spin accumulator before each frame.
const SPIN_STEP_DEG: f32 = 0.5;
/// Target delay between presented frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Loop-owned state for the continuously spinning cube.
///
/// One frame is a pure function of the spin accumulator and the render
/// options.
pub struct CubeApp {
    renderer: CubeRenderer,
    angle: f32,
}

impl CubeApp {
    pub fn new(options: &RenderOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            renderer: CubeRenderer::new(options),
            angle: 0.0,
        })
    }

    /// Advance the spin and write one frame to `out`.
    ///
    /// The cube spins twice as fast around X as around Y, with no roll.
    pub fn step<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.angle += SPIN_STEP_DEG;
        let orientation = Orientation::new(self.angle, self.angle / 2.0, 0.0);
        let grid = self.renderer.render(&orientation);
        presenter::present(grid, out)
    }

    /// Present frames forever at a fixed pace.
    ///
    /// There is no exit path; the process runs until externally killed. An
    /// error writing to stdout aborts the loop.
    pub fn run(&mut self) -> io::Result<()> {
        let mut out = stdout();
        presenter::prepare(&mut out)?;

        let mut frames = 0u32;
        let mut window_start = Instant::now();
        loop {
            let frame_start = Instant::now();
            self.step(&mut out)?;

            frames += 1;
            let window = window_start.elapsed();
            if window >= Duration::from_secs(1) {
                debug!(
                    "frame rate: {:.1} fps",
                    f64::from(frames) / window.as_secs_f64()
                );
                frames = 0;
                window_start = Instant::now();
            }

            let elapsed = frame_start.elapsed();
            if elapsed < FRAME_INTERVAL {
                std::thread::sleep(FRAME_INTERVAL - elapsed);
            }
        }
    }
}
