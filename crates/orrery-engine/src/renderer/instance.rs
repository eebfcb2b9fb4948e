use bytemuck::{Pod, Zeroable};

/// Per-mesh render data handed to the host renderer each frame.
/// Wire format: 32 floats = 128 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct MeshInstance {
    /// Column-major local-to-world transform.
    pub model: [[f32; 4]; 4],
    pub color: [f32; 3],
    /// Sphere radius in world units.
    pub radius: f32,
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub roughness: f32,
    pub metalness: f32,
    pub normal_scale: f32,
    /// Index into the static texture-set table, or -1 for untextured.
    pub texture_set: f32,
    /// Sphere width/height segment count.
    pub segments: f32,
    /// Scene object id, so the host can keep one GPU mesh per object.
    pub object_id: f32,
    pub _pad: [f32; 2],
}

impl MeshInstance {
    pub const FLOATS: usize = 32;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
    pub const NO_TEXTURE: f32 = -1.0;
}

impl Default for MeshInstance {
    fn default() -> Self {
        Self {
            texture_set: Self::NO_TEXTURE,
            ..<Self as Zeroable>::zeroed()
        }
    }
}

/// Vertex of an orbit guide or other static line.
/// Wire format: 7 floats (x, y, z, r, g, b, a).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    pub const FLOATS: usize = 7;
}

/// Per-frame mesh instances.
pub struct RenderBuffer {
    pub instances: Vec<MeshInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: MeshInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Flat float view of the instance data.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for reads from wasm memory.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_instance_is_32_floats() {
        assert_eq!(std::mem::size_of::<MeshInstance>(), MeshInstance::STRIDE_BYTES);
        assert_eq!(MeshInstance::default().texture_set, MeshInstance::NO_TEXTURE);
    }

    #[test]
    fn line_vertex_is_7_floats() {
        assert_eq!(std::mem::size_of::<LineVertex>(), LineVertex::FLOATS * 4);
    }

    #[test]
    fn render_buffer_push_and_count() {
        let mut buf = RenderBuffer::new();
        buf.push(MeshInstance::default());
        buf.push(MeshInstance::default());
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.as_floats().len(), 2 * MeshInstance::FLOATS);
    }
}
