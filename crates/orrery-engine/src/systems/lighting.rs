/// Scene lighting: one ambient term plus persistent directional lights.
///
/// Lights stay until explicitly removed. The host reads them through
/// `LightState::write_floats` every frame.

use glam::Vec3;
use crate::api::types::Rgb;

/// Floats per directional light on the wire: `[x, y, z, r, g, b, intensity, pad]`.
pub const LIGHT_FLOATS: usize = 8;
/// Floats for the ambient term: `[r, g, b, intensity]`.
pub const AMBIENT_FLOATS: usize = 4;
pub const DEFAULT_MAX_LIGHTS: usize = 4;

/// A light shining from `position` toward the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub color: Rgb,
    pub intensity: f32,
}

impl DirectionalLight {
    pub fn new(position: Vec3, color: Rgb, intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }
}

pub struct LightState {
    ambient: Rgb,
    ambient_intensity: f32,
    lights: Vec<DirectionalLight>,
    max_lights: usize,
}

impl LightState {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_LIGHTS)
    }

    pub fn with_capacity(max_lights: usize) -> Self {
        Self {
            ambient: Rgb::WHITE,
            ambient_intensity: 0.0,
            lights: Vec::with_capacity(max_lights),
            max_lights,
        }
    }

    pub fn set_ambient(&mut self, color: Rgb, intensity: f32) {
        self.ambient = color;
        self.ambient_intensity = intensity;
    }

    /// Add a directional light. Returns false (and drops it) once the capacity is reached.
    pub fn add(&mut self, light: DirectionalLight) -> bool {
        if self.lights.len() >= self.max_lights {
            log::warn!("light capacity {} reached, light dropped", self.max_lights);
            return false;
        }
        self.lights.push(light);
        true
    }

    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn lights(&self) -> &[DirectionalLight] {
        &self.lights
    }

    pub fn ambient(&self) -> (Rgb, f32) {
        (self.ambient, self.ambient_intensity)
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Serialize ambient term then each light into `out` (cleared first).
    pub fn write_floats(&self, out: &mut Vec<f32>) {
        out.clear();
        out.extend_from_slice(&self.ambient.to_array());
        out.push(self.ambient_intensity);
        for light in &self.lights {
            out.extend_from_slice(&light.position.to_array());
            out.extend_from_slice(&light.color.to_array());
            out.push(light.intensity);
            out.push(0.0);
        }
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_enforced() {
        let mut state = LightState::with_capacity(1);
        assert!(state.add(DirectionalLight::new(Vec3::ONE, Rgb::WHITE, 1.0)));
        assert!(!state.add(DirectionalLight::new(Vec3::ONE, Rgb::WHITE, 1.0)));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn wire_layout() {
        let mut state = LightState::new();
        state.set_ambient(Rgb::WHITE, 0.4);
        state.add(DirectionalLight::new(Vec3::new(5.0, 5.0, 5.0), Rgb::WHITE, 1.2));
        let mut out = Vec::new();
        state.write_floats(&mut out);
        assert_eq!(out.len(), AMBIENT_FLOATS + LIGHT_FLOATS);
        assert_eq!(out[3], 0.4);
        assert_eq!(&out[4..7], &[5.0, 5.0, 5.0]);
        assert_eq!(out[10], 1.2);
    }
}
