//! Perspective projection from rotated space to screen space

use nalgebra::Vector3;

/// Depth values this close to the camera plane (or behind it) are rejected.
const MIN_DEPTH: f32 = 1e-6;

/// Fixed-offset perspective camera.
///
/// The viewer sits at the origin looking down +Z; the rotated cube is pushed
/// `distance` units away before the perspective divide.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub distance: f32,
}

impl Camera {
    pub fn new(distance: f32) -> Self {
        Self { distance }
    }

    /// Project a rotated point to integer screen coordinates.
    ///
    /// Returns `None` when the point sits at or behind the camera plane, or
    /// when the projected pixel falls outside the `width` x `height` grid.
    pub fn project(
        &self,
        point: &Vector3<f32>,
        width: usize,
        height: usize,
    ) -> Option<(usize, usize)> {
        let depth = point.z + self.distance;
        if depth < MIN_DEPTH {
            return None;
        }

        let half_width = width as f32 / 2.0;
        let half_height = height as f32 / 2.0;
        let screen_x = round_half_up(half_width + point.x * half_width / depth);
        let screen_y = round_half_up(half_height - point.y * half_height / depth);

        if screen_x < 0 || screen_y < 0 || screen_x >= width as i64 || screen_y >= height as i64 {
            return None;
        }
        Some((screen_x as usize, screen_y as usize))
    }
}

/// Round to the nearest integer, halves upward.
fn round_half_up(value: f32) -> i64 {
    (value + 0.5).floor() as i64
}
