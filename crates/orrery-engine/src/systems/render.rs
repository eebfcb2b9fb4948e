use crate::components::object::SceneObject;
use crate::renderer::instance::{LineVertex, MeshInstance, RenderBuffer};
use crate::renderer::traits::{LineStrip, PointBatch, StaticGeometry};

/// Collect point clouds, line strips and texture sets from the scene.
/// Run once after scene construction; these never change afterwards.
pub fn build_static_geometry<'a>(objects: impl Iterator<Item = &'a SceneObject>) -> StaticGeometry {
    let mut geometry = StaticGeometry::default();

    for object in objects {
        if !object.visible {
            continue;
        }

        if let Some(cloud) = &object.points {
            let start = geometry.point_count() as u32;
            let model = object.model_matrix();
            for p in &cloud.positions {
                geometry.points.extend_from_slice(&model.transform_point3(*p).to_array());
            }
            geometry.point_batches.push(PointBatch {
                start,
                count: cloud.len() as u32,
                material: cloud.material,
            });
        }

        if let Some(line) = &object.line {
            let start = geometry.lines.len() as u32;
            let model = object.model_matrix();
            let c = line.material.color;
            for p in &line.points {
                geometry.lines.push(LineVertex {
                    position: model.transform_point3(*p).to_array(),
                    color: [c.r, c.g, c.b, line.material.opacity],
                });
            }
            geometry.line_strips.push(LineStrip {
                start,
                count: line.points.len() as u32,
            });
        }

        if let Some(maps) = object.mesh.as_ref().and_then(|m| m.material.maps.as_ref()) {
            if geometry.texture_index(maps).is_none() {
                geometry.texture_sets.push(maps.clone());
            }
        }
    }

    geometry
}

/// Rebuild the per-frame mesh instance buffer.
/// Texture sets are resolved against the static geometry built at start.
pub fn build_render_buffer<'a>(
    objects: impl Iterator<Item = &'a SceneObject>,
    geometry: &StaticGeometry,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    for object in objects {
        if !object.visible {
            continue;
        }

        let mesh = match &object.mesh {
            Some(m) => m,
            None => continue,
        };

        let material = &mesh.material;
        let texture_set = material
            .maps
            .as_ref()
            .and_then(|maps| geometry.texture_index(maps))
            .map_or(MeshInstance::NO_TEXTURE, |i| i as f32);

        buffer.push(MeshInstance {
            model: object.model_matrix().to_cols_array_2d(),
            color: material.color.to_array(),
            radius: mesh.geometry.radius,
            emissive: material.emissive.to_array(),
            emissive_intensity: material.emissive_intensity,
            roughness: material.roughness,
            metalness: material.metalness,
            normal_scale: material.normal_scale,
            texture_set,
            segments: mesh.geometry.segments as f32,
            object_id: object.id.0 as f32,
            _pad: [0.0; 2],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{ObjectId, Rgb};
    use crate::components::line::{LineMaterial, Polyline};
    use crate::components::mesh::{MeshComponent, StandardMaterial, TextureMaps};
    use crate::components::points::{PointCloud, PointsMaterial};
    use glam::Vec3;

    fn maps() -> TextureMaps {
        TextureMaps {
            color: "diffuse.jpg".into(),
            normal: "bump.jpg".into(),
            roughness: "rough.jpg".into(),
        }
    }

    fn sample_objects() -> Vec<SceneObject> {
        vec![
            SceneObject::new(ObjectId(1)).with_points(PointCloud::new(
                vec![Vec3::X, Vec3::Y],
                PointsMaterial::default(),
            )),
            SceneObject::new(ObjectId(2))
                .with_position(Vec3::new(8.0, 0.0, 0.0))
                .with_mesh(MeshComponent::sphere(
                    1.5,
                    64,
                    StandardMaterial::new(Rgb::WHITE).with_maps(maps(), 0.5),
                )),
            SceneObject::new(ObjectId(3))
                .with_mesh(MeshComponent::sphere(0.6, 32, StandardMaterial::new(Rgb::from_hex(0x3498db)))),
            SceneObject::new(ObjectId(4)).with_line(Polyline::horizontal_circle(
                5.0,
                4,
                LineMaterial { color: Rgb::WHITE, opacity: 0.3 },
            )),
        ]
    }

    #[test]
    fn static_geometry_collects_points_lines_textures() {
        let objects = sample_objects();
        let geometry = build_static_geometry(objects.iter());
        assert_eq!(geometry.point_count(), 2);
        assert_eq!(geometry.point_batches.len(), 1);
        assert_eq!(geometry.lines.len(), 5);
        assert_eq!(geometry.line_strips, vec![LineStrip { start: 0, count: 5 }]);
        assert_eq!(geometry.texture_sets.len(), 1);
        assert_eq!(geometry.lines[0].color[3], 0.3);
    }

    #[test]
    fn render_buffer_has_one_instance_per_mesh() {
        let objects = sample_objects();
        let geometry = build_static_geometry(objects.iter());
        let mut buffer = RenderBuffer::new();
        build_render_buffer(objects.iter(), &geometry, &mut buffer);

        assert_eq!(buffer.instance_count(), 2);
        let textured = &buffer.instances[0];
        assert_eq!(textured.texture_set, 0.0);
        assert_eq!(textured.model[3][0], 8.0);
        assert_eq!(textured.object_id, 2.0);
        assert_eq!(buffer.instances[1].texture_set, MeshInstance::NO_TEXTURE);
    }

    #[test]
    fn invisible_objects_are_skipped() {
        let mut objects = sample_objects();
        for o in objects.iter_mut() {
            o.visible = false;
        }
        let geometry = build_static_geometry(objects.iter());
        let mut buffer = RenderBuffer::new();
        build_render_buffer(objects.iter(), &geometry, &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
        assert!(geometry.lines.is_empty());
    }
}
