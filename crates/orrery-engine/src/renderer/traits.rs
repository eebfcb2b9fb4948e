//! Renderer trait: the seam between the headless engine and a drawing backend.
//!
//! The engine never draws. Each frame it produces flat buffers (mesh
//! instances, camera, lights) and, once at start, the static geometry
//! (point clouds, line strips, texture sets). A backend such as the
//! browser `RenderHost` in `orrery-web` turns them into draw calls.

use super::camera::CameraUniform;
use super::instance::{LineVertex, MeshInstance};
use crate::api::types::Rgb;
use crate::components::mesh::TextureMaps;
use crate::components::points::PointsMaterial;

/// A run of points in `StaticGeometry::points` sharing one material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointBatch {
    /// First point (not float) index.
    pub start: u32,
    pub count: u32,
    pub material: PointsMaterial,
}

/// A run of vertices in `StaticGeometry::lines` drawn as one line strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStrip {
    pub start: u32,
    pub count: u32,
}

/// Geometry that never moves after scene construction.
#[derive(Debug, Clone, Default)]
pub struct StaticGeometry {
    /// Point positions, 3 floats each.
    pub points: Vec<f32>,
    pub point_batches: Vec<PointBatch>,
    pub lines: Vec<LineVertex>,
    pub line_strips: Vec<LineStrip>,
    /// Distinct texture sets referenced by `MeshInstance::texture_set`.
    pub texture_sets: Vec<TextureMaps>,
}

impl StaticGeometry {
    pub fn point_count(&self) -> usize {
        self.points.len() / 3
    }

    /// Index of a texture set, if it has been registered.
    pub fn texture_index(&self, maps: &TextureMaps) -> Option<usize> {
        self.texture_sets.iter().position(|t| t == maps)
    }
}

/// Complete per-frame data for rendering.
pub struct FrameData<'a> {
    pub instances: &'a [MeshInstance],
    pub camera: &'a CameraUniform,
    /// Ambient term followed by directional lights (see `systems::lighting`).
    pub lights: &'a [f32],
    pub background: Rgb,
}

/// Renderer trait for drawing backends.
pub trait Renderer {
    /// Backend identifier (e.g. "webgl-host").
    fn backend(&self) -> &'static str;

    /// Receive static geometry. Called once, before the first draw.
    fn upload_static(&mut self, geometry: &StaticGeometry);

    /// Draw one complete frame.
    fn draw(&mut self, frame: &FrameData);

    /// Resize the render surface to the new viewport, in CSS pixels.
    fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32);
}
