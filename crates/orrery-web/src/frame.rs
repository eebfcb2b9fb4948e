use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom::window;

type FrameCallback = Closure<dyn FnMut(f64)>;

fn request_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
    window()?.request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Call `on_frame` once per display refresh for the lifetime of the page.
///
/// The callback reschedules itself before running, so the loop keeps going
/// even if one frame's work logs an error.
pub fn start_frame_loop(mut on_frame: impl FnMut() + 'static) -> Result<(), JsValue> {
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();

    *slot.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = request_frame(callback) {
                log::warn!("frame loop stopped: {:?}", err);
            }
        }
        on_frame();
    }));

    let started = match slot.borrow().as_ref() {
        Some(callback) => request_frame(callback).map(|_| ()),
        None => Err(JsValue::from_str("frame callback missing")),
    };
    started
}
