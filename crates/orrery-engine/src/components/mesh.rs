use crate::api::types::Rgb;

/// UV sphere geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereGeometry {
    pub radius: f32,
    /// Width and height segment count.
    pub segments: u32,
}

impl SphereGeometry {
    pub fn new(radius: f32, segments: u32) -> Self {
        Self { radius, segments }
    }
}

/// Image-based maps for a physically based material, as URLs the host loads.
/// A map that fails to load leaves the surface untextured.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureMaps {
    pub color: String,
    pub normal: String,
    pub roughness: String,
}

/// Metallic/roughness surface description.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardMaterial {
    pub color: Rgb,
    pub roughness: f32,
    pub metalness: f32,
    pub emissive: Rgb,
    pub emissive_intensity: f32,
    /// Strength of the normal-map perturbation (default: 1.0).
    pub normal_scale: f32,
    pub maps: Option<TextureMaps>,
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self {
            color: Rgb::WHITE,
            roughness: 1.0,
            metalness: 0.0,
            emissive: Rgb::BLACK,
            emissive_intensity: 1.0,
            normal_scale: 1.0,
            maps: None,
        }
    }
}

impl StandardMaterial {
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness;
        self
    }

    pub fn with_emissive(mut self, emissive: Rgb, intensity: f32) -> Self {
        self.emissive = emissive;
        self.emissive_intensity = intensity;
        self
    }

    pub fn with_maps(mut self, maps: TextureMaps, normal_scale: f32) -> Self {
        self.maps = Some(maps);
        self.normal_scale = normal_scale;
        self
    }
}

/// Component for lit sphere meshes.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshComponent {
    pub geometry: SphereGeometry,
    pub material: StandardMaterial,
}

impl MeshComponent {
    pub fn sphere(radius: f32, segments: u32, material: StandardMaterial) -> Self {
        Self {
            geometry: SphereGeometry::new(radius, segments),
            material,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_builders() {
        let m = StandardMaterial::new(Rgb::from_hex(0xff6b35))
            .with_roughness(0.3)
            .with_metalness(0.7)
            .with_emissive(Rgb::from_hex(0xff4500), 0.3);
        assert_eq!(m.roughness, 0.3);
        assert_eq!(m.metalness, 0.7);
        assert_eq!(m.emissive_intensity, 0.3);
        assert!(m.maps.is_none());
    }
}
