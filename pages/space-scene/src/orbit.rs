/// Circular orbits in the horizontal plane, advanced by a fixed angle per frame.

use glam::Vec3;
use orrery_engine::Rgb;
use std::f32::consts::TAU;

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitingBody {
    pub geometry_radius: f32,
    pub color: Rgb,
    pub orbit_radius: f32,
    /// Radians per frame.
    pub angular_speed: f32,
    /// Accumulated angle, radians. Never wrapped.
    pub current_angle: f32,
    pub metalness: f32,
    /// Height above the orbital plane; the orbit never changes it.
    pub height: f32,
}

impl OrbitingBody {
    pub fn new(geometry_radius: f32, color: Rgb, orbit_radius: f32, angular_speed: f32, metalness: f32) -> Self {
        Self {
            geometry_radius,
            color,
            orbit_radius,
            angular_speed,
            current_angle: 0.0,
            metalness,
            height: 0.0,
        }
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.current_angle = angle;
        self
    }

    /// Advance one frame.
    pub fn advance(&mut self) {
        self.current_angle += self.angular_speed;
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.current_angle.cos() * self.orbit_radius,
            self.height,
            self.current_angle.sin() * self.orbit_radius,
        )
    }
}

/// Evenly spaced starting angle for body `index` of `count`.
pub fn start_angle(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    TAU * index as f32 / count as f32
}

/// Orbit radii in first-seen order, each listed once with the color it was first seen with.
pub fn distinct_radii(orbits: impl IntoIterator<Item = (f32, Rgb)>) -> Vec<(f32, Rgb)> {
    let mut out: Vec<(f32, Rgb)> = Vec::new();
    for (radius, color) in orbits {
        if !out.iter().any(|(r, _)| *r == radius) {
            out.push((radius, color));
        }
    }
    out
}
