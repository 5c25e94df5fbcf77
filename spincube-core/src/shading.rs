//! Directional brightness and glyph selection

use nalgebra::Vector3;

/// Brightness of a face with the given rotated outward normal, in [0, 1].
///
/// Takes the dot product between the reversed view direction and the normal
/// and maps its [-1, 1] range onto [0, 1]. The view direction is fixed: the
/// viewer looks down +Z at the offset cube.
pub fn brightness(normal: &Vector3<f32>) -> f32 {
    let view = Vector3::new(0.0, 0.0, 1.0);
    let facing = (-view).dot(normal);
    ((facing + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// Display glyph, ordered by ascending brightness.
///
/// The derived ordering doubles as the symbol priority used for overdraw
/// resolution in the frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Glyph {
    Blank,
    Sparse,
    Light,
    Medium,
    Dense,
}

impl Glyph {
    /// Select the glyph for a brightness value in [0, 1].
    pub fn from_brightness(value: f32) -> Self {
        if value >= 0.9 {
            Glyph::Dense
        } else if value >= 0.75 {
            Glyph::Medium
        } else if value >= 0.7 {
            Glyph::Light
        } else {
            Glyph::Sparse
        }
    }

    /// The character rendered for this glyph.
    pub fn ch(&self) -> char {
        match self {
            Glyph::Blank => ' ',
            Glyph::Sparse => '.',
            Glyph::Light => '-',
            Glyph::Medium => '+',
            Glyph::Dense => '#',
        }
    }
}
