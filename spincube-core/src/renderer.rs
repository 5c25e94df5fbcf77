//! Per-frame rendering pipeline

use crate::buffer::CharGrid;
use crate::options::RenderOptions;
use crate::projection::Camera;
use crate::rotation::Orientation;
use crate::shading::{self, Glyph};
use crate::surface;

/// Renders the cube surface into a reusable character grid.
pub struct CubeRenderer {
    camera: Camera,
    sample_step: f32,
    grid: CharGrid,
}

impl CubeRenderer {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            camera: Camera::new(options.camera_distance),
            sample_step: options.sample_step,
            grid: CharGrid::new(options.width, options.height),
        }
    }

    /// Render one frame at the given orientation.
    ///
    /// Clears the grid, then rotates every shell sample and its face normal
    /// by the same matrix, projects, shades, and priority-blends. The same
    /// orientation always produces an identical grid.
    pub fn render(&mut self, orientation: &Orientation) -> &CharGrid {
        self.grid.clear();
        let rotation = orientation.matrix();
        let width = self.grid.width();
        let height = self.grid.height();

        for sample in surface::shell_samples(self.sample_step) {
            let rotated = rotation * sample.position;
            if let Some((x, y)) = self.camera.project(&rotated, width, height) {
                let normal = rotation * sample.face.normal();
                let glyph = Glyph::from_brightness(shading::brightness(&normal));
                self.grid.blend(x, y, glyph);
            }
        }
        &self.grid
    }

    /// The grid produced by the last render.
    pub fn grid(&self) -> &CharGrid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_options() -> RenderOptions {
        RenderOptions {
            width: 40,
            height: 20,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_frame_uses_known_glyphs_only() {
        let mut renderer = CubeRenderer::new(&small_options());
        let grid = renderer.render(&Orientation::new(33.0, 16.5, 0.0));
        for line in grid.lines() {
            for ch in line.chars() {
                assert!(
                    matches!(ch, ' ' | '.' | '-' | '+' | '#'),
                    "unexpected glyph {ch:?}"
                );
            }
        }
    }

    #[test]
    fn test_frame_is_not_empty() {
        let mut renderer = CubeRenderer::new(&small_options());
        let grid = renderer.render(&Orientation::new(33.0, 16.5, 0.0));
        let drawn: usize = grid
            .lines()
            .map(|line| line.chars().filter(|c| *c != ' ').count())
            .sum();
        assert!(drawn > 0);
    }

    #[test]
    fn test_frame_is_deterministic() {
        let orientation = Orientation::new(77.0, 38.5, 0.0);
        let mut first = CubeRenderer::new(&small_options());
        let mut second = CubeRenderer::new(&small_options());
        let a: Vec<String> = first.render(&orientation).lines().collect();
        let b: Vec<String> = second.render(&orientation).lines().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_front_face_fills_center_at_rest() {
        // With no rotation the -Z face looks straight at the viewer.
        let mut renderer = CubeRenderer::new(&small_options());
        let grid = renderer.render(&Orientation::zero());
        assert_eq!(grid.glyph_at(20, 10), Glyph::Dense);
    }

    #[test]
    fn test_render_clears_previous_frame() {
        let mut renderer = CubeRenderer::new(&small_options());
        renderer.render(&Orientation::zero());
        let after: Vec<String> = renderer
            .render(&Orientation::new(45.0, 22.5, 0.0))
            .lines()
            .collect();
        let mut fresh = CubeRenderer::new(&small_options());
        let expected: Vec<String> = fresh
            .render(&Orientation::new(45.0, 22.5, 0.0))
            .lines()
            .collect();
        assert_eq!(after, expected);
    }
}
