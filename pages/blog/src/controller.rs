//! DOM wiring for the blog page.
//!
//! Each feature is wired independently; one that fails to find its elements
//! is logged and skipped without affecting the others.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use orrery_web::dom::{self, listen};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, MediaQueryListEvent, MouseEvent, ScrollBehavior, ScrollToOptions, Storage,
};

use crate::copy::{self, CopyButtonState};
use crate::progress;
use crate::theme::{self, PreferenceStore, Theme, ThemeController};
use crate::toc::{self, LinkStyle};

/// `localStorage`, or nothing when the browser refuses access.
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme choice will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("could not store {key}: {:?}", err);
            }
        }
    }
}

type SharedTheme = Rc<RefCell<ThemeController<BrowserStore>>>;

pub fn wire_page() {
    let steps: [(&str, fn() -> Result<(), JsValue>); 4] = [
        ("theme", wire_theme),
        ("table of contents", wire_toc),
        ("copy buttons", wire_copy_buttons),
        ("reading progress", wire_progress),
    ];
    for (name, wire) in steps {
        if let Err(err) = wire() {
            log::warn!("blog: {name} disabled: {:?}", err);
        }
    }

    log::info!("🚀 Blog loaded successfully!");
    log::info!("💡 Tip: Press Ctrl/Cmd + Shift + T to toggle theme");
}

// ── Theme ────────────────────────────────────────────────────────────

fn apply_theme(html: &Element, theme: Theme) {
    if let Err(err) = html.set_attribute(theme::THEME_ATTRIBUTE, theme.as_str()) {
        log::warn!("could not set theme: {:?}", err);
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn!("could not set {property}: {:?}", err);
    }
}

fn spin(button: &HtmlElement) {
    set_style(button, "transform", "rotate(360deg)");
    let button = button.clone();
    if let Err(err) = orrery_web::set_timeout(theme::SPIN_MS, move || set_style(&button, "transform", "rotate(0deg)")) {
        log::warn!("could not schedule spin reset: {:?}", err);
    }
}

fn wire_theme() -> Result<(), JsValue> {
    let window = dom::window()?;
    let document = dom::document()?;
    let html = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("document has no root element"))?;

    let scheme = window.match_media(theme::DARK_SCHEME_QUERY)?;
    let prefers_dark = scheme.as_ref().is_some_and(|m| m.matches());
    let controller: SharedTheme = Rc::new(RefCell::new(ThemeController::new(BrowserStore::open(), prefers_dark)));
    apply_theme(&html, controller.borrow().current());

    let button = dom::element_by_id::<HtmlElement>("themeToggle");
    match &button {
        Some(button) => {
            let (controller, html, target) = (controller.clone(), html.clone(), button.clone());
            listen(button, "click", move |_: MouseEvent| {
                let theme = controller.borrow_mut().toggle();
                apply_theme(&html, theme);
                spin(&target);
            })?;
        }
        None => log::warn!("blog: no #themeToggle button"),
    }

    {
        let (controller, html) = (controller.clone(), html.clone());
        listen(&document, "keydown", move |e: KeyboardEvent| {
            if !theme::is_theme_shortcut(e.ctrl_key(), e.meta_key(), e.shift_key(), &e.key()) {
                return;
            }
            e.prevent_default();
            match &button {
                Some(button) => button.click(),
                None => {
                    let theme = controller.borrow_mut().toggle();
                    apply_theme(&html, theme);
                }
            }
        })?;
    }

    if let Some(scheme) = scheme {
        listen(&scheme, "change", move |e: MediaQueryListEvent| {
            if let Some(theme) = controller.borrow_mut().os_changed(e.matches()) {
                apply_theme(&html, theme);
            }
        })?;
    }
    Ok(())
}

// ── Table of contents ────────────────────────────────────────────────

fn style_link(link: &Element, style: LinkStyle) {
    if let Some(link) = link.dyn_ref::<HtmlElement>() {
        set_style(link, "font-weight", style.font_weight);
        set_style(link, "color", style.color);
    }
}

fn scroll_to_section(href: &str) -> Result<(), JsValue> {
    let document = dom::document()?;
    // An href that is not a valid selector has no target either.
    let Some(section) = document.query_selector(href).ok().flatten() else {
        return Ok(());
    };
    let top = section
        .dyn_ref::<HtmlElement>()
        .map_or(0.0, |s| s.offset_top() as f64);

    let window = dom::window()?;
    let options = ScrollToOptions::new();
    options.set_top(toc::scroll_top_for(top));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    window.history()?.push_state_with_url(&JsValue::NULL, "", Some(href))
}

fn wire_toc() -> Result<(), JsValue> {
    let links = dom::query_all(toc::TOC_LINKS)?;
    for link in &links {
        let href = link.get_attribute("href");
        listen(link, "click", move |e: MouseEvent| {
            e.prevent_default();
            if let Some(href) = &href {
                if let Err(err) = scroll_to_section(href) {
                    log::warn!("toc: could not scroll to {href}: {:?}", err);
                }
            }
        })?;
    }

    let on_entries = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, _: IntersectionObserver| {
        let ids: Vec<(bool, String)> = entries
            .iter()
            .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|e| (e.is_intersecting(), e.target().id()))
            .collect();
        let Some(id) = toc::highlighted_section(ids.iter().map(|(hit, id)| (*hit, id.as_str()))) else {
            return;
        };
        for link in &links {
            style_link(link, toc::NORMAL_LINK);
        }
        if let Ok(Some(active)) = dom::document().and_then(|d| d.query_selector(&toc::link_selector(id))) {
            style_link(&active, toc::ACTIVE_LINK);
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_root_margin(toc::ACTIVE_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(0.0));
    let observer = IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options)?;
    on_entries.forget();

    for section in dom::query_all(toc::SECTIONS)? {
        observer.observe(&section);
    }
    Ok(())
}

// ── Copy buttons ─────────────────────────────────────────────────────

fn show_copy_state(button: &HtmlElement, state: CopyButtonState) {
    button.set_inner_html(state.glyph());
    set_style(button, "color", state.color());
}

fn copy_block(block: &Element, button: &HtmlElement) -> Result<(), JsValue> {
    let code = block.query_selector(copy::CODE_SELECTOR)?;
    let Some(text) = copy::clipboard_text(code, |code| code.text_content()) else {
        log::warn!("copy: code block has no <code> element");
        return Ok(());
    };

    let written = JsFuture::from(dom::window()?.navigator().clipboard().write_text(&text));
    let button = button.clone();
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = written.await {
            log::warn!("copy failed: {:?}", err);
            return;
        }
        show_copy_state(&button, CopyButtonState::Copied);
        let restore = button.clone();
        if let Err(err) = orrery_web::set_timeout(copy::CONFIRM_MS, move || {
            show_copy_state(&restore, CopyButtonState::Idle)
        }) {
            log::warn!("could not schedule copy reset: {:?}", err);
        }
    });
    Ok(())
}

fn wire_copy_buttons() -> Result<(), JsValue> {
    let document = dom::document()?;
    for block in dom::query_all(copy::CODE_BLOCKS)? {
        let button: HtmlElement = document.create_element("button")?.dyn_into()?;
        button.set_class_name(copy::BUTTON_CLASS);
        button.set_title(copy::BUTTON_TITLE);
        show_copy_state(&button, CopyButtonState::Idle);

        if let Some(block) = block.dyn_ref::<HtmlElement>() {
            set_style(block, "position", "relative");
        }
        block.append_child(&button)?;

        let target = button.clone();
        listen(&button, "click", move |_: MouseEvent| {
            if let Err(err) = copy_block(&block, &target) {
                log::warn!("copy failed: {:?}", err);
            }
        })?;
    }
    Ok(())
}

// ── Reading progress ─────────────────────────────────────────────────

fn update_progress(bar: &HtmlElement) -> Result<(), JsValue> {
    let window = dom::window()?;
    let scroll_height = dom::document()?
        .document_element()
        .map_or(0.0, |root| root.scroll_height() as f64);
    let viewport_height = window.inner_height()?.as_f64().unwrap_or(0.0);
    let progress = progress::reading_progress(window.scroll_y()?, scroll_height, viewport_height);
    bar.style().set_property("width", &progress::width_css(progress))
}

fn wire_progress() -> Result<(), JsValue> {
    let document = dom::document()?;
    let bar: HtmlElement = document.create_element("div")?.dyn_into()?;
    bar.set_class_name(progress::PROGRESS_CLASS);
    bar.style().set_css_text(progress::PROGRESS_STYLE);
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&bar)?;

    let window = dom::window()?;
    listen(&window, "scroll", move |_: Event| {
        if let Err(err) = update_progress(&bar) {
            log::warn!("progress: {:?}", err);
        }
    })
}
