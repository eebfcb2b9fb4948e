use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

mod controller;
mod deck;

thread_local! {
    static ARROW_KEYS: Rc<Cell<bool>> = Rc::new(Cell::new(true));
}

/// Wire the space-facts slideshow on the current page.
#[wasm_bindgen]
pub fn facts_init() {
    orrery_web::init_logging();
    let arrow_keys = ARROW_KEYS.with(Rc::clone);
    match controller::wire(arrow_keys) {
        Ok(()) => log::info!("space facts: ready"),
        Err(err) => log::warn!("space facts: {:?}", err),
    }
}

/// Let or stop `ArrowLeft`/`ArrowRight` driving the slideshow, e.g. while
/// the arrow keys are needed elsewhere on the page.
#[wasm_bindgen]
pub fn facts_set_arrow_keys(enabled: bool) {
    ARROW_KEYS.with(|flag| flag.set(enabled));
}
