use std::cell::{Cell, RefCell};
use std::rc::Rc;

use orrery_engine::Repeating;
use orrery_web::dom::{self, listen};
use orrery_web::WindowInterval;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlButtonElement, HtmlElement, KeyboardEvent, MouseEvent};

use crate::deck::{self, Arrow, FactDeck, SlideView};

pub const PANELS: &str = ".speech-bubble";
pub const ACTIVE_CLASS: &str = "active";

/// Deck state plus the elements it draws into.
pub struct Slideshow {
    deck: FactDeck,
    panels: Vec<Element>,
    prev: Option<HtmlButtonElement>,
    next: Option<HtmlButtonElement>,
    counter: Option<HtmlElement>,
    total: Option<HtmlElement>,
}

impl Slideshow {
    fn render(&self, view: &SlideView) {
        for (i, panel) in self.panels.iter().enumerate() {
            if let Err(err) = panel.class_list().toggle_with_force(ACTIVE_CLASS, i == view.active) {
                log::warn!("facts: could not update panel {i}: {:?}", err);
            }
        }
        if let Some(counter) = &self.counter {
            counter.set_text_content(Some(&view.counter));
        }
        if let Some(total) = &self.total {
            total.set_text_content(Some(&view.total));
        }
        if let Some(prev) = &self.prev {
            prev.set_disabled(view.prev_disabled);
        }
        if let Some(next) = &self.next {
            next.set_disabled(view.next_disabled);
        }
    }

    /// Apply a deck transition and draw the result.
    fn step(&mut self, transition: impl FnOnce(&mut FactDeck) -> SlideView) {
        let view = transition(&mut self.deck);
        self.render(&view);
    }
}

type Shared = Rc<RefCell<Slideshow>>;

fn on_click(id: &str, show: &Shared, transition: fn(&mut FactDeck) -> SlideView) -> Result<(), JsValue> {
    let Some(button) = dom::element_by_id::<HtmlElement>(id) else {
        log::warn!("facts: no #{id}");
        return Ok(());
    };
    let show = show.clone();
    listen(&button, "click", move |_: MouseEvent| show.borrow_mut().step(transition))
}

/// Wire the slideshow. `arrow_keys` gates keyboard navigation.
pub fn wire(arrow_keys: Rc<Cell<bool>>) -> Result<(), JsValue> {
    let panels = dom::query_all(PANELS)?;
    let Some(deck) = FactDeck::new(panels.len()) else {
        log::warn!("facts: no {PANELS} panels on this page");
        return Ok(());
    };

    let show: Shared = Rc::new(RefCell::new(Slideshow {
        deck,
        panels,
        prev: dom::element_by_id("prevFact"),
        next: dom::element_by_id("nextFact"),
        counter: dom::element_by_id("currentFact"),
        total: dom::element_by_id("totalFacts"),
    }));

    on_click("startFacts", &show, FactDeck::start)?;
    on_click("prevFact", &show, FactDeck::previous)?;
    on_click("nextFact", &show, FactDeck::next)?;

    {
        let show = show.clone();
        let document = dom::document()?;
        listen(&document, "keydown", move |e: KeyboardEvent| {
            if !arrow_keys.get() {
                return;
            }
            if let Some(arrow) = Arrow::from_dom(&e.key()) {
                show.borrow_mut().step(|deck| deck.arrow(arrow));
            }
        })?;
    }

    let ticker = show.clone();
    let timer = Rc::new(RefCell::new(Repeating::new(
        WindowInterval::new(move || ticker.borrow_mut().step(FactDeck::auto_advance)),
        deck::AUTO_ADVANCE_MS,
    )));

    match dom::element_by_id::<HtmlElement>("space-facts-container") {
        Some(container) => {
            let pause = timer.clone();
            listen(&container, "mouseenter", move |_: Event| pause.borrow_mut().stop())?;
            let resume = timer.clone();
            listen(&container, "mouseleave", move |_: Event| resume.borrow_mut().restart())?;
        }
        None => log::warn!("facts: no #space-facts-container; auto-advance cannot pause"),
    }

    timer.borrow_mut().restart();
    show.borrow_mut().step(|deck| deck.show(0));
    // The interval callback has to outlive this call even when no hover handler holds the timer.
    std::mem::forget(timer);
    Ok(())
}
