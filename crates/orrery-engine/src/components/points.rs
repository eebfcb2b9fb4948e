use glam::Vec3;
use crate::api::types::Rgb;

/// Point sprite appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointsMaterial {
    pub color: Rgb,
    pub size: f32,
    /// Shrink points with distance from the camera.
    pub size_attenuation: bool,
    pub opacity: f32,
}

impl Default for PointsMaterial {
    fn default() -> Self {
        Self {
            color: Rgb::WHITE,
            size: 1.0,
            size_attenuation: true,
            opacity: 1.0,
        }
    }
}

/// A static cloud of points (e.g. a starfield).
#[derive(Debug, Clone)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    pub material: PointsMaterial,
}

impl PointCloud {
    pub fn new(positions: Vec<Vec3>, material: PointsMaterial) -> Self {
        Self { positions, material }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
