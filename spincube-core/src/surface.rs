//! Cube surface sampling and face classification

use nalgebra::Vector3;

/// Lower bound of the sampled cube volume on every axis.
pub const VOLUME_MIN: f32 = -0.5;
/// Upper bound (exclusive) of the sampled cube volume on every axis.
pub const VOLUME_MAX: f32 = 0.5;

/// Identifies which cube face a boundary sample belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    NegX,
    PosX,
    NegY,
    PosY,
    NegZ,
    PosZ,
}

impl Face {
    /// Outward unit normal of the face.
    pub fn normal(&self) -> Vector3<f32> {
        match self {
            Face::NegX => Vector3::new(-1.0, 0.0, 0.0),
            Face::PosX => Vector3::new(1.0, 0.0, 0.0),
            Face::NegY => Vector3::new(0.0, -1.0, 0.0),
            Face::PosY => Vector3::new(0.0, 1.0, 0.0),
            Face::NegZ => Vector3::new(0.0, 0.0, -1.0),
            Face::PosZ => Vector3::new(0.0, 0.0, 1.0),
        }
    }
}

/// A point on the cube shell together with the face it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub position: Vector3<f32>,
    pub face: Face,
}

/// Classify a sampled point by proximity to a face boundary.
///
/// A coordinate at the lower volume bound is near the negative face; a
/// coordinate whose next sample would leave the volume is near the positive
/// face. Faces are tested in a fixed order (-X, +X, -Y, +Y, -Z, +Z) and the
/// first match wins, so a point on a cube edge or corner is assigned to
/// exactly one face. Interior points return `None`.
pub fn classify(position: &Vector3<f32>, step: f32) -> Option<Face> {
    let near_min = |c: f32| c <= VOLUME_MIN;
    let near_max = |c: f32| c + step >= VOLUME_MAX;

    if near_min(position.x) {
        Some(Face::NegX)
    } else if near_max(position.x) {
        Some(Face::PosX)
    } else if near_min(position.y) {
        Some(Face::NegY)
    } else if near_max(position.y) {
        Some(Face::PosY)
    } else if near_min(position.z) {
        Some(Face::NegZ)
    } else if near_max(position.z) {
        Some(Face::PosZ)
    } else {
        None
    }
}

/// Scan the discretized cube volume, emitting only boundary samples.
///
/// Positions are derived from integer indices so the lower bound is hit
/// exactly regardless of step size.
pub fn shell_samples(step: f32) -> impl Iterator<Item = Sample> {
    let count = ((VOLUME_MAX - VOLUME_MIN) / step).round() as u32;
    let coord = move |i: u32| VOLUME_MIN + i as f32 * step;

    (0..count).flat_map(move |i| {
        (0..count).flat_map(move |j| {
            (0..count).filter_map(move |k| {
                let position = Vector3::new(coord(i), coord(j), coord(k));
                classify(&position, step).map(|face| Sample { position, face })
            })
        })
    })
}
