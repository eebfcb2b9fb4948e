use orrery_engine::IntervalHost;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom::window;

/// `window.setInterval` as an engine interval host.
/// Every timer started from this host runs the same callback.
pub struct WindowInterval {
    callback: Closure<dyn FnMut()>,
}

impl WindowInterval {
    pub fn new(callback: impl FnMut() + 'static) -> Self {
        Self {
            callback: Closure::new(callback),
        }
    }
}

impl IntervalHost for WindowInterval {
    type Handle = i32;

    fn start(&mut self, period_ms: u32) -> Option<i32> {
        let started = window().and_then(|w| {
            w.set_interval_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                period_ms as i32,
            )
        });
        match started {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::warn!("setInterval failed: {:?}", err);
                None
            }
        }
    }

    fn cancel(&mut self, handle: i32) {
        if let Ok(w) = window() {
            w.clear_interval_with_handle(handle);
        }
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) -> Result<i32, JsValue> {
    let callback = Closure::once_into_js(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
}
