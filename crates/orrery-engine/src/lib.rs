pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::animator::{Animator, EngineConfig, SceneContext};
pub use api::types::{ObjectId, Rgb};
pub use components::line::{LineMaterial, Polyline, MIN_CIRCLE_SEGMENTS};
pub use components::mesh::{MeshComponent, SphereGeometry, StandardMaterial, TextureMaps};
pub use components::object::SceneObject;
pub use components::points::{PointCloud, PointsMaterial};
pub use core::scene::SceneGraph;
pub use core::timer::{IntervalHost, Repeating};
pub use renderer::camera::{CameraUniform, PerspectiveCamera};
pub use renderer::instance::{LineVertex, MeshInstance, RenderBuffer};
pub use renderer::traits::{FrameData, LineStrip, PointBatch, Renderer, StaticGeometry};
pub use input::queue::{InputEvent, InputQueue, Key, PointerButton};
pub use bridge::protocol::ProtocolLayout;
pub use systems::lighting::{DirectionalLight, LightState};
pub use systems::render::{build_render_buffer, build_static_geometry};
pub use systems::rng::Rng;
