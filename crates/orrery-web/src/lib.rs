pub mod dom;
pub mod frame;
pub mod host;
pub mod runner;
pub mod timer;

pub use frame::start_frame_loop;
pub use orrery_engine::bridge::protocol::PROTOCOL_VERSION;
pub use host::RenderHost;
pub use runner::{RunnerSlot, SceneRunner};
pub use timer::{set_timeout, WindowInterval};

/// Install the panic hook and the console logger. Safe to call from every page.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Generate the `#[wasm_bindgen]` exports for a scene page.
///
/// Generates:
/// - `thread_local!` storage for the pending config and the `SceneRunner`
/// - a `with_runner()` helper that yields `None` while the runner is busy
/// - `scene_load_config`, `scene_start` and the buffer accessors
///
/// # Usage
///
/// ```ignore
/// mod scene;
/// use scene::{SceneConfig, SpaceScene};
///
/// orrery_web::export_scene!(SpaceScene, SceneConfig, "space-scene");
/// ```
///
/// `$scene_type` must implement `orrery_engine::Animator` and provide
/// `new(config)`. `$config_type` must be `Default + Clone` and provide
/// `from_json(&str) -> Result<Self, serde_json::Error>`.
#[macro_export]
macro_rules! export_scene {
    ($scene_type:ty, $config_type:ty, $scene_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static CONFIG: RefCell<$config_type> = RefCell::new(<$config_type>::default());
            static RUNNER: $crate::RunnerSlot<$crate::SceneRunner<$scene_type, $crate::RenderHost>> =
                $crate::RunnerSlot::new();
        }

        /// `None` before start, and while a frame or resize is talking to the host.
        fn with_runner<R>(
            f: impl FnOnce(&mut $crate::SceneRunner<$scene_type, $crate::RenderHost>) -> R,
        ) -> Option<R> {
            RUNNER.with(|slot| slot.with(f))
        }

        /// Override scene defaults from JSON. Only takes effect before `scene_start`.
        #[wasm_bindgen::prelude::wasm_bindgen]
        pub fn scene_load_config(json: &str) -> bool {
            $crate::init_logging();
            match <$config_type>::from_json(json) {
                Ok(config) => {
                    CONFIG.with(|cell| *cell.borrow_mut() = config);
                    true
                }
                Err(err) => {
                    log::warn!("{}: ignoring scene config: {}", $scene_name, err);
                    false
                }
            }
        }

        #[wasm_bindgen::prelude::wasm_bindgen]
        pub fn scene_start(host: $crate::RenderHost) -> Result<(), wasm_bindgen::JsValue> {
            $crate::init_logging();
            if RUNNER.with(|slot| slot.is_installed()) {
                log::warn!("{}: already started", $scene_name);
                return Ok(());
            }
            if !$crate::dom::has_element("scene-container") {
                log::warn!("{}: no #scene-container on this page", $scene_name);
            }

            let config = CONFIG.with(|cell| cell.borrow().clone());
            let (width, height) = $crate::dom::viewport_size()?;
            let mut runner = $crate::SceneRunner::new(<$scene_type>::new(config), host);
            runner.init(width, height, $crate::dom::device_pixel_ratio());
            if !RUNNER.with(|slot| slot.install(runner)) {
                log::warn!("{}: runner busy, start ignored", $scene_name);
                return Ok(());
            }

            $crate::dom::attach_input(|event| {
                with_runner(|r| r.push_input(event));
            })?;
            $crate::dom::on_resize(|width, height, pixel_ratio| {
                with_runner(|r| r.resize(width, height, pixel_ratio));
            })?;
            $crate::start_frame_loop(|| {
                with_runner(|r| r.frame());
            })?;

            log::info!("{}: started", $scene_name);
            Ok(())
        }

        // ---- Data accessors ----

        #[wasm_bindgen::prelude::wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen::prelude::wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count()).unwrap_or(0)
        }

        #[wasm_bindgen::prelude::wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.layout().max_instances as u32).unwrap_or(0)
        }

        #[wasm_bindgen::prelude::wasm_bindgen]
        pub fn get_protocol_version() -> f32 {
            $crate::PROTOCOL_VERSION
        }

        #[wasm_bindgen::prelude::wasm_bindgen]
        pub fn get_frame_count() -> f64 {
            with_runner(|r| r.frame_count() as f64).unwrap_or(0.0)
        }
    };
}
