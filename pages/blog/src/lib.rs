use wasm_bindgen::prelude::*;
use web_sys::Event;

mod controller;
mod copy;
mod progress;
mod theme;
mod toc;

/// Wire the blog page. Waits for `DOMContentLoaded` if the document is still loading.
#[wasm_bindgen]
pub fn blog_init() {
    orrery_web::init_logging();

    let document = match orrery_web::dom::document() {
        Ok(document) => document,
        Err(err) => {
            log::warn!("blog: {:?}", err);
            return;
        }
    };

    if document.ready_state() == "loading" {
        let wired = orrery_web::dom::listen(&document, "DOMContentLoaded", |_: Event| controller::wire_page());
        if let Err(err) = wired {
            log::warn!("blog: {:?}", err);
        }
    } else {
        controller::wire_page();
    }
}
