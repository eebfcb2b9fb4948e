use std::cell::RefCell;

use orrery_engine::{
    build_render_buffer, build_static_geometry, Animator, CameraUniform, EngineConfig, FrameData,
    InputEvent, InputQueue, ProtocolLayout, RenderBuffer, Renderer, SceneContext, StaticGeometry,
};

/// Generic scene runner that wires the animator to a renderer.
///
/// Each page creates a `thread_local!` SceneRunner (see `export_scene!`)
/// because wasm-bindgen cannot export generic structs directly.
pub struct SceneRunner<A: Animator, R: Renderer> {
    animator: A,
    renderer: R,
    ctx: SceneContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    static_geometry: StaticGeometry,
    light_floats: Vec<f32>,
    camera: CameraUniform,
    config: EngineConfig,
    layout: ProtocolLayout,
    initialized: bool,
    frames: u64,
}

impl<A: Animator, R: Renderer> SceneRunner<A, R> {
    pub fn new(animator: A, renderer: R) -> Self {
        let config = animator.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            ctx: SceneContext::new(&config),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            light_floats: Vec::with_capacity(layout.light_data_floats),
            animator,
            renderer,
            input: InputQueue::new(),
            static_geometry: StaticGeometry::default(),
            camera: CameraUniform::default(),
            layout,
            config,
            initialized: false,
            frames: 0,
        }
    }

    /// Build the scene for a viewport and hand the static geometry to the renderer.
    /// Call once after construction.
    pub fn init(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.config = self.animator.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.ctx = SceneContext::new(&self.config);
        self.ctx.camera.resize(width, height);

        self.animator.init(&mut self.ctx);

        self.static_geometry = build_static_geometry(self.ctx.graph.iter());
        if self.static_geometry.point_count() > self.layout.max_points {
            log::warn!(
                "{} points exceed the configured capacity of {}",
                self.static_geometry.point_count(),
                self.layout.max_points
            );
        }
        if self.static_geometry.lines.len() > self.layout.max_line_vertices {
            log::warn!(
                "{} line vertices exceed the configured capacity of {}",
                self.static_geometry.lines.len(),
                self.layout.max_line_vertices
            );
        }

        self.renderer.resize(width, height, pixel_ratio);
        self.renderer.upload_static(&self.static_geometry);
        self.initialized = true;
        log::info!(
            "scene ready: {} objects, {} points, {} guide vertices ({})",
            self.ctx.graph.len(),
            self.static_geometry.point_count(),
            self.static_geometry.lines.len(),
            self.renderer.backend()
        );
    }

    /// Queue an input event for the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Apply a viewport change right away rather than on the next frame.
    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.ctx.camera.resize(width, height);
        self.renderer.resize(width, height, pixel_ratio);
    }

    /// Run one frame: update the animator, rebuild buffers, draw.
    pub fn frame(&mut self) {
        if !self.initialized {
            return;
        }

        self.animator.update(&mut self.ctx, &self.input);
        self.input.drain();

        build_render_buffer(self.ctx.graph.iter(), &self.static_geometry, &mut self.render_buffer);
        if self.render_buffer.instance_count() as usize > self.layout.max_instances {
            log::warn!("instance buffer over capacity: {}", self.render_buffer.instance_count());
        }

        self.camera = self.ctx.camera.uniform();
        self.light_floats.clear();
        self.ctx.lights.write_floats(&mut self.light_floats);

        self.renderer.draw(&FrameData {
            instances: &self.render_buffer.instances,
            camera: &self.camera,
            lights: &self.light_floats,
            background: self.ctx.background,
        });
        self.frames += 1;
    }

    // ---- Accessors ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn context(&self) -> &SceneContext {
        &self.ctx
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

/// Cell holding a page's runner.
///
/// The host is called while a frame or resize holds the runner, so an accessor
/// invoked from inside `drawFrame` finds the slot busy and gets `None`.
pub struct RunnerSlot<T> {
    cell: RefCell<Option<T>>,
}

impl<T> RunnerSlot<T> {
    pub const fn new() -> Self {
        Self { cell: RefCell::new(None) }
    }

    /// Returns false when the slot is busy and the runner was not stored.
    pub fn install(&self, runner: T) -> bool {
        match self.cell.try_borrow_mut() {
            Ok(mut slot) => {
                *slot = Some(runner);
                true
            }
            Err(_) => false,
        }
    }

    /// A busy slot is in use, so it counts as installed.
    pub fn is_installed(&self) -> bool {
        self.cell.try_borrow().map_or(true, |slot| slot.is_some())
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut slot = self.cell.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    }
}

impl<T> Default for RunnerSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use orrery_engine::{
        Key, LineMaterial, MeshComponent, PointCloud, PointsMaterial, Polyline, Rgb, SceneObject,
        StandardMaterial,
    };

    #[derive(Default)]
    struct RecordingRenderer {
        uploads: Vec<(usize, usize)>,
        draws: Vec<(usize, usize)>,
        sizes: Vec<(f32, f32, f32)>,
    }

    impl Renderer for RecordingRenderer {
        fn backend(&self) -> &'static str {
            "recording"
        }

        fn upload_static(&mut self, geometry: &StaticGeometry) {
            self.uploads.push((geometry.point_count(), geometry.lines.len()));
        }

        fn draw(&mut self, frame: &FrameData) {
            self.draws.push((frame.instances.len(), frame.lights.len()));
        }

        fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
            self.sizes.push((width, height, pixel_ratio));
        }
    }

    /// One sphere that drifts along x; counts the key events it saw.
    #[derive(Default)]
    struct Drifter {
        keys_seen: usize,
    }

    impl Animator for Drifter {
        fn init(&mut self, ctx: &mut SceneContext) {
            let id = ctx.next_id();
            ctx.graph.add(
                SceneObject::new(id)
                    .with_tag("ball")
                    .with_mesh(MeshComponent::sphere(1.0, 16, StandardMaterial::default())),
            );
            let id = ctx.next_id();
            ctx.graph.add(SceneObject::new(id).with_points(PointCloud::new(
                vec![Vec3::X, Vec3::Y],
                PointsMaterial::default(),
            )));
            let id = ctx.next_id();
            ctx.graph.add(SceneObject::new(id).with_line(Polyline::horizontal_circle(
                2.0,
                4,
                LineMaterial { color: Rgb::WHITE, opacity: 0.3 },
            )));
        }

        fn update(&mut self, ctx: &mut SceneContext, input: &InputQueue) {
            self.keys_seen += input
                .iter()
                .filter(|e| matches!(e, InputEvent::KeyDown { .. }))
                .count();
            if let Some(ball) = ctx.graph.find_by_tag_mut("ball") {
                ball.position.x += 1.0;
            }
        }
    }

    #[test]
    fn frame_before_init_does_nothing() {
        let mut runner = SceneRunner::new(Drifter::default(), RecordingRenderer::default());
        runner.frame();
        assert_eq!(runner.frame_count(), 0);
        assert!(runner.renderer().draws.is_empty());
    }

    #[test]
    fn init_uploads_static_geometry_once() {
        let mut runner = SceneRunner::new(Drifter::default(), RecordingRenderer::default());
        runner.init(800.0, 600.0, 2.0);
        assert_eq!(runner.renderer().uploads, vec![(2, 5)]);
        assert_eq!(runner.renderer().sizes, vec![(800.0, 600.0, 2.0)]);
        assert!((runner.context().camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn frame_draws_each_mesh() {
        let mut runner = SceneRunner::new(Drifter::default(), RecordingRenderer::default());
        runner.init(800.0, 600.0, 1.0);
        runner.frame();
        runner.frame();
        assert_eq!(runner.frame_count(), 2);
        assert_eq!(runner.instance_count(), 1);
        assert_eq!(runner.renderer().draws.len(), 2);
        assert_eq!(runner.renderer().draws[0].0, 1);
        let ball = runner.context().graph.find_by_tag("ball").map(|b| b.position.x);
        assert_eq!(ball, Some(2.0));
    }

    #[test]
    fn input_is_seen_by_exactly_one_frame() {
        let mut runner = SceneRunner::new(Drifter::default(), RecordingRenderer::default());
        runner.init(100.0, 100.0, 1.0);
        runner.push_input(InputEvent::KeyDown { key: Key::W });
        runner.push_input(InputEvent::KeyDown { key: Key::P });
        runner.frame();
        runner.frame();
        assert_eq!(runner.animator().keys_seen, 2);
    }

    #[test]
    fn resize_applies_immediately() {
        let mut runner = SceneRunner::new(Drifter::default(), RecordingRenderer::default());
        runner.init(100.0, 100.0, 1.0);
        runner.resize(400.0, 100.0, 1.5);
        assert!((runner.context().camera.aspect - 4.0).abs() < 1e-6);
        assert_eq!(runner.renderer().sizes.last(), Some(&(400.0, 100.0, 1.5)));
        assert!(runner.renderer().draws.is_empty());
    }

    #[test]
    fn empty_slot_runs_nothing() {
        let slot: RunnerSlot<u32> = RunnerSlot::new();
        assert!(!slot.is_installed());
        assert_eq!(slot.with(|v| *v), None);
    }

    #[test]
    fn nested_access_sees_a_busy_slot() {
        let slot = RunnerSlot::new();
        assert!(slot.install(5u32));
        let inner = slot.with(|outer| {
            *outer += 1;
            assert!(slot.is_installed());
            assert!(!slot.install(0));
            slot.with(|v| *v)
        });
        assert_eq!(inner, Some(None));
        assert_eq!(slot.with(|v| *v), Some(6));
    }
}
