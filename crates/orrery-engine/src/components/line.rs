use glam::Vec3;
use crate::api::types::Rgb;

/// Unlit line appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMaterial {
    pub color: Rgb,
    pub opacity: f32,
}

/// Fewest segments that still enclose an area.
pub const MIN_CIRCLE_SEGMENTS: usize = 3;

/// An open line strip. Closed curves repeat their first point at the end.
#[derive(Debug, Clone)]
pub struct Polyline {
    pub points: Vec<Vec3>,
    pub material: LineMaterial,
}

impl Polyline {
    pub fn new(points: Vec<Vec3>, material: LineMaterial) -> Self {
        Self { points, material }
    }

    /// Closed circle of `radius` around the origin in the horizontal (XZ) plane,
    /// sampled with `segments` segments (`segments + 1` points), at least
    /// `MIN_CIRCLE_SEGMENTS`.
    pub fn horizontal_circle(radius: f32, segments: usize, material: LineMaterial) -> Self {
        let segments = segments.max(MIN_CIRCLE_SEGMENTS);
        let points = (0..=segments)
            .map(|i| {
                let t = i as f32 / segments as f32 * std::f32::consts::TAU;
                Vec3::new(radius * t.cos(), 0.0, radius * t.sin())
            })
            .collect();
        Self { points, material }
    }

    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) if self.points.len() > 2 => a.distance(*b) < 1e-4,
            _ => false,
        }
    }
}
