//! Render configuration

use thiserror::Error;

/// Invalid render configuration.
#[derive(Error, Debug, PartialEq)]
pub enum OptionsError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("sample step must be positive, got {0}")]
    InvalidSampleStep(f32),

    #[error("camera distance must be positive, got {0}")]
    InvalidCameraDistance(f32),
}

/// Tunable constants for one rendering session.
///
/// Defaults reproduce the classic 130x50 demo.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Grid width in characters.
    pub width: usize,
    /// Grid height in characters.
    pub height: usize,
    /// Spacing between adjacent cube volume samples.
    pub sample_step: f32,
    /// Offset between the rotated cube and the viewer.
    pub camera_distance: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 130,
            height: 50,
            sample_step: 0.05,
            camera_distance: 2.0,
        }
    }
}

impl RenderOptions {
    /// Reject configurations the render pipeline cannot honor.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.width == 0 || self.height == 0 {
            return Err(OptionsError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.sample_step <= 0.0 {
            return Err(OptionsError::InvalidSampleStep(self.sample_step));
        }
        if self.camera_distance <= 0.0 {
            return Err(OptionsError::InvalidCameraDistance(self.camera_distance));
        }
        Ok(())
    }
}
