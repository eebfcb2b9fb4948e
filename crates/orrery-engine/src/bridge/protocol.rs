/// Host buffer layout.
/// Must stay in sync with the JS render host.
///
/// Per-frame data (all values f32):
/// ```text
/// [Instances: instance_count × 32 floats]
/// [Camera:    36 floats]
/// [Lights:    4 ambient floats + light_count × 8 floats]
/// ```
/// Static data, uploaded once:
/// ```text
/// [Points: point_count × 3 floats]
/// [Lines:  vertex_count × 7 floats]
/// ```

use crate::api::animator::EngineConfig;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::{LineVertex, MeshInstance};
use crate::systems::lighting::{AMBIENT_FLOATS, LIGHT_FLOATS};

/// Protocol version reported to the host.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per mesh instance on the wire.
pub const INSTANCE_FLOATS: usize = MeshInstance::FLOATS;
/// Floats per static point: x, y, z.
pub const POINT_FLOATS: usize = 3;
/// Floats per line vertex: x, y, z, r, g, b, a.
pub const LINE_VERTEX_FLOATS: usize = LineVertex::FLOATS;
/// Floats in the camera block.
pub const CAMERA_FLOATS: usize = CameraUniform::FLOATS;

/// Runtime-computed buffer capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_points: usize,
    pub max_line_vertices: usize,
    pub max_lights: usize,

    pub instance_data_floats: usize,
    pub light_data_floats: usize,
    /// Per-frame floats: instances + camera + lights.
    pub frame_total_floats: usize,
    pub point_data_floats: usize,
    pub line_data_floats: usize,
    /// One-shot floats: points + lines.
    pub static_total_floats: usize,
}

impl ProtocolLayout {
    pub fn new(max_instances: usize, max_points: usize, max_line_vertices: usize, max_lights: usize) -> Self {
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let light_data_floats = AMBIENT_FLOATS + max_lights * LIGHT_FLOATS;
        let point_data_floats = max_points * POINT_FLOATS;
        let line_data_floats = max_line_vertices * LINE_VERTEX_FLOATS;

        Self {
            max_instances,
            max_points,
            max_line_vertices,
            max_lights,
            instance_data_floats,
            light_data_floats,
            frame_total_floats: instance_data_floats + CAMERA_FLOATS + light_data_floats,
            point_data_floats,
            line_data_floats,
            static_total_floats: point_data_floats + line_data_floats,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.max_instances,
            config.max_points,
            config.max_line_vertices,
            config.max_lights,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config() {
        let layout = ProtocolLayout::from_config(&EngineConfig::default());
        assert_eq!(layout.max_instances, 64);
        assert_eq!(layout.instance_data_floats, 64 * 32);
        assert_eq!(layout.light_data_floats, 4 + 4 * 8);
        assert_eq!(layout.frame_total_floats, 64 * 32 + 36 + 36);
        assert_eq!(layout.static_total_floats, 4096 * 3 + 2048 * 7);
    }

    #[test]
    fn custom_capacities() {
        let layout = ProtocolLayout::new(8, 10, 20, 2);
        assert_eq!(layout.point_data_floats, 30);
        assert_eq!(layout.line_data_floats, 140);
        assert_eq!(layout.light_data_floats, 20);
    }
}
