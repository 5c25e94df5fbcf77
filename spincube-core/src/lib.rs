//! SpinCube core library - cube geometry, shading, and frame composition
//!
//! This library provides the stateless core of the terminal cube demo:
//! rotation composition, cube surface sampling, perspective projection,
//! brightness shading, and priority-merged frame buffering.

pub mod buffer;
pub mod options;
pub mod projection;
pub mod renderer;
pub mod rotation;
pub mod shading;
pub mod surface;

// Re-export commonly used types
pub use buffer::CharGrid;
pub use options::{OptionsError, RenderOptions};
pub use projection::Camera;
pub use renderer::CubeRenderer;
pub use rotation::Orientation;
pub use shading::Glyph;
pub use surface::{Face, Sample};
