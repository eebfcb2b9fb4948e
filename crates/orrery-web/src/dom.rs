//! Thin helpers over `web_sys` for the page controllers.
//!
//! Listeners registered here live for the whole page: their closures are
//! leaked on purpose since nothing ever removes them.

use orrery_engine::{InputEvent, Key, PointerButton};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent, MouseEvent, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Look up an element by id and cast it. None if absent or of another type.
pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    document()
        .ok()?
        .get_element_by_id(id)?
        .dyn_into::<T>()
        .ok()
}

/// All elements in the document matching `selector`, in document order.
pub fn query_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document()?.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Register a page-lifetime listener. Events that are not an `E` are ignored.
pub fn listen<E>(target: &EventTarget, event: &str, mut handler: impl FnMut(E) + 'static) -> Result<(), JsValue>
where
    E: JsCast + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    });
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> Result<(f32, f32), JsValue> {
    let window = window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width as f32, height as f32))
}

pub fn device_pixel_ratio() -> f32 {
    web_sys::window().map_or(1.0, |w| w.device_pixel_ratio() as f32)
}

/// Translate window keyboard and mouse events into engine input events.
pub fn attach_input(push: impl Fn(InputEvent) + Clone + 'static) -> Result<(), JsValue> {
    let window = window()?;

    let p = push.clone();
    listen(&window, "keydown", move |e: KeyboardEvent| {
        if let Some(key) = Key::from_dom(&e.key()) {
            p(InputEvent::KeyDown { key });
        }
    })?;

    let p = push.clone();
    listen(&window, "keyup", move |e: KeyboardEvent| {
        if let Some(key) = Key::from_dom(&e.key()) {
            p(InputEvent::KeyUp { key });
        }
    })?;

    let p = push.clone();
    listen(&window, "mousedown", move |e: MouseEvent| {
        p(InputEvent::PointerDown {
            x: e.client_x() as f32,
            y: e.client_y() as f32,
            button: PointerButton::from_dom(e.button()),
        });
    })?;

    let p = push.clone();
    listen(&window, "mouseup", move |e: MouseEvent| {
        p(InputEvent::PointerUp {
            x: e.client_x() as f32,
            y: e.client_y() as f32,
            button: PointerButton::from_dom(e.button()),
        });
    })?;

    listen(&window, "mousemove", move |e: MouseEvent| {
        push(InputEvent::PointerMove {
            x: e.client_x() as f32,
            y: e.client_y() as f32,
        });
    })?;

    Ok(())
}

/// Run `on_resize(width, height, pixel_ratio)` inside every window resize event.
pub fn on_resize(on_resize: impl Fn(f32, f32, f32) + 'static) -> Result<(), JsValue> {
    let window = window()?;
    listen(&window, "resize", move |_: Event| match viewport_size() {
        Ok((w, h)) => on_resize(w, h, device_pixel_ratio()),
        Err(err) => log::warn!("resize: viewport unavailable: {:?}", err),
    })
}

pub fn has_element(id: &str) -> bool {
    element_by_id::<Element>(id).is_some()
}
