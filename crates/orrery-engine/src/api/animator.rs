use crate::api::types::{ObjectId, Rgb};
use crate::core::scene::SceneGraph;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;
use crate::systems::lighting::{LightState, DEFAULT_MAX_LIGHTS};

/// Configuration for the engine, provided by the animator.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Vertical field of view in degrees (default: 75).
    pub fov_y_degrees: f32,
    /// Near clipping plane (default: 0.1).
    pub near: f32,
    /// Far clipping plane (default: 1000).
    pub far: f32,
    /// Clear color behind the scene (default: black).
    pub background: Rgb,
    /// Maximum mesh instances per frame (default: 64).
    pub max_instances: usize,
    /// Maximum static points (default: 4096).
    pub max_points: usize,
    /// Maximum static line vertices (default: 2048).
    pub max_line_vertices: usize,
    /// Maximum directional lights (default: 4).
    pub max_lights: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            background: Rgb::BLACK,
            max_instances: 64,
            max_points: 4096,
            max_line_vertices: 2048,
            max_lights: DEFAULT_MAX_LIGHTS,
        }
    }
}

/// The contract every animated scene fulfills.
pub trait Animator {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> EngineConfig {
        EngineConfig::default()
    }

    /// Build the scene: objects, lights, initial camera pose.
    fn init(&mut self, ctx: &mut SceneContext);

    /// Per-frame update. Called exactly once per display refresh.
    fn update(&mut self, ctx: &mut SceneContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Animator::init and Animator::update.
pub struct SceneContext {
    pub graph: SceneGraph,
    pub camera: PerspectiveCamera,
    pub lights: LightState,
    pub background: Rgb,
    next_id: u32,
}

impl SceneContext {
    /// Create a context with an aspect ratio of 1; the runner resizes it to the viewport.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            graph: SceneGraph::new(),
            camera: PerspectiveCamera::new(config.fov_y_degrees, 1.0, config.near, config.far),
            lights: LightState::with_capacity(config.max_lights),
            background: config.background,
            next_id: 1,
        }
    }

    /// Generate the next unique object ID.
    pub fn next_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for SceneContext {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
