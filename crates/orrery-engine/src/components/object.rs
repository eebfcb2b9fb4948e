use glam::{EulerRot, Mat4, Quat, Vec3};
use crate::api::types::ObjectId;
use crate::components::line::Polyline;
use crate::components::mesh::MeshComponent;
use crate::components::points::PointCloud;

/// Fat scene object: a single struct with optional components.
/// An object normally carries exactly one of mesh, points or line.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Unique identifier.
    pub id: ObjectId,
    /// String tag for finding objects by name.
    pub tag: String,
    /// Invisible objects are skipped by the render systems.
    pub visible: bool,
    /// Position in world space.
    pub position: Vec3,
    /// Euler rotation in radians, applied in X, Y, Z order.
    pub rotation: Vec3,
    pub scale: Vec3,
    pub mesh: Option<MeshComponent>,
    pub points: Option<PointCloud>,
    pub line: Option<Polyline>,
}

impl SceneObject {
    /// Create a new object with the given ID at the origin.
    pub fn new(id: ObjectId) -> Self {
        Self {
            id,
            tag: String::new(),
            visible: true,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            mesh: None,
            points: None,
            line: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_points(mut self, points: PointCloud) -> Self {
        self.points = Some(points);
        self
    }

    pub fn with_line(mut self, line: Polyline) -> Self {
        self.line = Some(line);
        self
    }

    /// Accumulate a self-rotation increment.
    pub fn spin(&mut self, delta: Vec3) {
        self.rotation += delta;
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Local-to-world transform (scale, then rotation, then translation).
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.orientation(), self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_accumulates() {
        let mut obj = SceneObject::new(ObjectId(1));
        obj.spin(Vec3::new(0.002, 0.005, 0.0));
        obj.spin(Vec3::new(0.002, 0.005, 0.0));
        assert!((obj.rotation.x - 0.004).abs() < 1e-7);
        assert!((obj.rotation.y - 0.010).abs() < 1e-7);
    }

    #[test]
    fn model_matrix_translates() {
        let obj = SceneObject::new(ObjectId(1)).with_position(Vec3::new(8.0, 0.0, -2.0));
        let p = obj.model_matrix().transform_point3(Vec3::ZERO);
        assert!(p.distance(Vec3::new(8.0, 0.0, -2.0)) < 1e-6);
    }
}
