//! Browser-side renderer.
//!
//! `RenderHost` is a JS object supplied by the page (typically a small
//! three.js or raw WebGL adapter). Slices are handed over as views into wasm
//! memory, so the host must copy or upload them before returning.

use js_sys::Array;
use orrery_engine::{FrameData, Renderer, StaticGeometry};
use wasm_bindgen::prelude::*;

/// Floats per point batch: start, count, rgb, size, size attenuation, opacity.
pub const POINT_BATCH_FLOATS: usize = 8;

#[wasm_bindgen]
extern "C" {
    pub type RenderHost;

    #[wasm_bindgen(method, js_name = uploadStatic)]
    fn upload_static_js(
        this: &RenderHost,
        points: &[f32],
        point_batches: &[f32],
        lines: &[f32],
        line_strips: &[u32],
        textures: Array,
    );

    #[wasm_bindgen(method, js_name = drawFrame)]
    fn draw_frame_js(this: &RenderHost, instances: &[f32], camera: &[f32], lights: &[f32], background: &[f32]);

    #[wasm_bindgen(method, js_name = setSize)]
    fn set_size_js(this: &RenderHost, width: f32, height: f32, pixel_ratio: f32);
}

fn flatten_point_batches(geometry: &StaticGeometry) -> Vec<f32> {
    let mut out = Vec::with_capacity(geometry.point_batches.len() * POINT_BATCH_FLOATS);
    for batch in &geometry.point_batches {
        let m = &batch.material;
        out.extend_from_slice(&[
            batch.start as f32,
            batch.count as f32,
            m.color.r,
            m.color.g,
            m.color.b,
            m.size,
            if m.size_attenuation { 1.0 } else { 0.0 },
            m.opacity,
        ]);
    }
    out
}

fn flatten_line_strips(geometry: &StaticGeometry) -> Vec<u32> {
    geometry
        .line_strips
        .iter()
        .flat_map(|strip| [strip.start, strip.count])
        .collect()
}

/// `[[color, normal, roughness], ...]` URL triples.
fn texture_array(geometry: &StaticGeometry) -> Array {
    geometry
        .texture_sets
        .iter()
        .map(|maps| {
            Array::of3(
                &JsValue::from_str(&maps.color),
                &JsValue::from_str(&maps.normal),
                &JsValue::from_str(&maps.roughness),
            )
        })
        .collect()
}

impl Renderer for RenderHost {
    fn backend(&self) -> &'static str {
        "js-render-host"
    }

    fn upload_static(&mut self, geometry: &StaticGeometry) {
        self.upload_static_js(
            &geometry.points,
            &flatten_point_batches(geometry),
            bytemuck::cast_slice(&geometry.lines),
            &flatten_line_strips(geometry),
            texture_array(geometry),
        );
    }

    fn draw(&mut self, frame: &FrameData) {
        self.draw_frame_js(
            bytemuck::cast_slice(frame.instances),
            bytemuck::cast_slice(std::slice::from_ref(frame.camera)),
            frame.lights,
            &frame.background.to_array(),
        );
    }

    fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.set_size_js(width, height, pixel_ratio);
    }
}
