/// Scene configuration: camera pose, lights, starfield and the body table.
///
/// Every field has a default, so a page can override any subset from JSON
/// through `scene_load_config` before the scene starts.

use serde::{Deserialize, Serialize};

const HARDWOOD_BASE: &str = "https://threejs.org/examples/textures/hardwood2";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    /// Packed `0xRRGGBB`.
    pub background: u32,
    pub lights: LightingConfig,
    pub starfield: StarfieldConfig,
    pub primary: PrimaryBodyConfig,
    pub secondaries: Vec<SecondaryBodyConfig>,
    pub secondary_style: SecondaryStyle,
    pub central: CentralBodyConfig,
    pub guides: GuideConfig,
    pub controls: ControlConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            background: 0x000000,
            lights: LightingConfig::default(),
            starfield: StarfieldConfig::default(),
            primary: PrimaryBodyConfig::default(),
            secondaries: default_secondaries(),
            secondary_style: SecondaryStyle::default(),
            central: CentralBodyConfig::default(),
            guides: GuideConfig::default(),
            controls: ControlConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ── Camera ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Initial eye position; `p` returns here.
    pub position: [f32; 3],
    /// Initial pitch in radians.
    pub pitch: f32,
    /// Initial yaw in radians.
    pub yaw: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            position: [-4.72, 22.20, 24.24],
            pitch: -0.873,
            yaw: 2.509,
        }
    }
}

// ── Lights ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLightConfig {
    pub position: [f32; 3],
    pub color: u32,
    pub intensity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient_color: u32,
    pub ambient_intensity: f32,
    pub directional: Vec<DirectionalLightConfig>,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_color: 0xffffff,
            ambient_intensity: 0.4,
            directional: vec![
                // key light
                DirectionalLightConfig { position: [5.0, 5.0, 5.0], color: 0xffffff, intensity: 1.2 },
                // fill from the opposite side
                DirectionalLightConfig { position: [-5.0, -3.0, -5.0], color: 0xffffff, intensity: 0.5 },
            ],
        }
    }
}

// ── Starfield ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub count: usize,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub color: u32,
    pub size: f32,
    pub size_attenuation: bool,
    pub opacity: f32,
    pub seed: u64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 2000,
            inner_radius: 200.0,
            outer_radius: 500.0,
            color: 0xffffff,
            size: 1.5,
            size_attenuation: true,
            opacity: 0.8,
            seed: 0x5eed_57a2,
        }
    }
}

// ── Bodies ───────────────────────────────────────────────────────────

/// Per-frame Euler increments, radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinRates {
    pub x: f32,
    pub y: f32,
}

/// The textured body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryBodyConfig {
    pub radius: f32,
    pub segments: u32,
    pub orbit_radius: f32,
    pub speed: f32,
    pub spin: SpinRates,
    pub roughness: f32,
    pub metalness: f32,
    pub normal_scale: f32,
    pub color_map: String,
    pub normal_map: String,
    pub roughness_map: String,
    pub guide_color: u32,
}

impl Default for PrimaryBodyConfig {
    fn default() -> Self {
        Self {
            radius: 1.5,
            segments: 64,
            orbit_radius: 8.0,
            speed: 0.011,
            spin: SpinRates { x: 0.002, y: 0.005 },
            roughness: 0.8,
            metalness: 0.0,
            normal_scale: 0.5,
            color_map: format!("{HARDWOOD_BASE}_diffuse.jpg"),
            normal_map: format!("{HARDWOOD_BASE}_bump.jpg"),
            roughness_map: format!("{HARDWOOD_BASE}_roughness.jpg"),
            guide_color: 0xffffff,
        }
    }
}

/// One row of the secondary body table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryBodyConfig {
    pub radius: f32,
    pub color: u32,
    pub orbit_radius: f32,
    pub speed: f32,
    pub metalness: f32,
}

/// Settings shared by every secondary body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondaryStyle {
    pub segments: u32,
    pub roughness: f32,
    pub spin: SpinRates,
}

impl Default for SecondaryStyle {
    fn default() -> Self {
        Self {
            segments: 32,
            roughness: 0.4,
            spin: SpinRates { x: 0.005, y: 0.01 },
        }
    }
}

pub fn default_secondaries() -> Vec<SecondaryBodyConfig> {
    let row = |radius, color, orbit_radius, speed, metalness| SecondaryBodyConfig {
        radius,
        color,
        orbit_radius,
        speed,
        metalness,
    };
    vec![
        row(0.6, 0x3498db, 5.0, 0.020, 0.8),  // blue, close and fast
        row(0.8, 0xe74c3c, 12.0, 0.007, 0.3), // red, far and slow
        row(0.5, 0x2ecc71, 7.0, 0.014, 0.5),  // green
        row(0.7, 0xf39c12, 16.0, 0.004, 0.6), // orange, outermost
        row(0.9, 0x9b59b6, 10.0, 0.009, 0.4), // purple
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CentralBodyConfig {
    pub radius: f32,
    pub segments: u32,
    pub color: u32,
    pub roughness: f32,
    pub metalness: f32,
    pub emissive: u32,
    pub emissive_intensity: f32,
    pub spin: SpinRates,
}

impl Default for CentralBodyConfig {
    fn default() -> Self {
        Self {
            radius: 2.5,
            segments: 64,
            color: 0xff6b35,
            roughness: 0.3,
            metalness: 0.7,
            emissive: 0xff4500,
            emissive_intensity: 0.3,
            spin: SpinRates { x: 0.0, y: 0.002 },
        }
    }
}

// ── Guides and controls ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    pub segments: u32,
    pub opacity: f32,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self { segments: 100, opacity: 0.3 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// World units per frame per held key.
    pub move_step: f32,
    /// Radians per pixel of drag.
    pub mouse_sensitivity: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            move_step: 0.1,
            mouse_sensitivity: 0.003,
        }
    }
}
