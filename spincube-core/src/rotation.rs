//! Rotation matrices and Euler-angle orientation

use nalgebra::Matrix3;

/// Elementary rotation about the X axis (angle in radians).
pub fn rotation_x(angle: f32) -> Matrix3<f32> {
    let (sin, cos) = angle.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, cos, -sin, //
        0.0, sin, cos,
    )
}

/// Elementary rotation about the Y axis (angle in radians).
pub fn rotation_y(angle: f32) -> Matrix3<f32> {
    let (sin, cos) = angle.sin_cos();
    Matrix3::new(
        cos, 0.0, sin, //
        0.0, 1.0, 0.0, //
        -sin, 0.0, cos,
    )
}

/// Elementary rotation about the Z axis (angle in radians).
pub fn rotation_z(angle: f32) -> Matrix3<f32> {
    let (sin, cos) = angle.sin_cos();
    Matrix3::new(
        cos, -sin, 0.0, //
        sin, cos, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Orientation around three axes (in degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Orientation {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Compose the rotation matrix `Rx * Ry * Rz` for this orientation.
    ///
    /// The matrix is applied to column vectors, so sample points and face
    /// normals share one transform per frame.
    pub fn matrix(&self) -> Matrix3<f32> {
        rotation_x(self.x.to_radians())
            * rotation_y(self.y.to_radians())
            * rotation_z(self.z.to_radians())
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::zero()
    }
}
