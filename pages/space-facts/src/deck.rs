//! Slideshow state: panel 0 is the intro, panels 1.. are facts.

/// Auto-advance period.
pub const AUTO_ADVANCE_MS: u32 = 10_000;

/// What the page should show for the current index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView {
    /// The one panel carrying `active`.
    pub active: usize,
    pub counter: String,
    pub total: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Left,
    Right,
}

impl Arrow {
    pub fn from_dom(key: &str) -> Option<Arrow> {
        match key {
            "ArrowLeft" => Some(Arrow::Left),
            "ArrowRight" => Some(Arrow::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactDeck {
    len: usize,
    index: usize,
}

impl FactDeck {
    /// A deck over `len` panels, showing the intro. None when there are no panels.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, index: 0 })
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    fn last(&self) -> usize {
        self.len - 1
    }

    /// Jump to `index`, clamped into range.
    pub fn show(&mut self, index: usize) -> SlideView {
        self.index = index.min(self.last());
        self.view()
    }

    pub fn start(&mut self) -> SlideView {
        self.show(1)
    }

    /// Forward one panel; from the last fact back to the intro.
    pub fn next(&mut self) -> SlideView {
        if self.index < self.last() {
            self.show(self.index + 1)
        } else {
            self.show(0)
        }
    }

    /// Back one panel; no-op at the intro.
    pub fn previous(&mut self) -> SlideView {
        self.show(self.index.saturating_sub(1))
    }

    /// Arrow keys step within bounds and never wrap.
    pub fn arrow(&mut self, arrow: Arrow) -> SlideView {
        match arrow {
            Arrow::Left => self.previous(),
            Arrow::Right if self.index < self.last() => self.show(self.index + 1),
            Arrow::Right => self.view(),
        }
    }

    /// Timer step: the intro and the last fact both lead to the first fact.
    pub fn auto_advance(&mut self) -> SlideView {
        if self.index != 0 && self.index < self.last() {
            self.show(self.index + 1)
        } else {
            self.show(1)
        }
    }

    pub fn view(&self) -> SlideView {
        SlideView {
            active: self.index,
            counter: if self.index == 0 {
                "Intro".to_string()
            } else {
                self.index.to_string()
            },
            total: self.last().to_string(),
            prev_disabled: self.index == 0,
            next_disabled: self.index == self.last(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(len: usize) -> FactDeck {
        FactDeck::new(len).unwrap()
    }

    #[test]
    fn empty_deck_is_refused() {
        assert!(FactDeck::new(0).is_none());
    }

    #[test]
    fn starts_on_intro() {
        let view = deck(6).view();
        assert_eq!(view.active, 0);
        assert_eq!(view.counter, "Intro");
        assert_eq!(view.total, "5");
        assert!(view.prev_disabled);
        assert!(!view.next_disabled);
    }

    #[test]
    fn next_then_previous_round_trips() {
        let n = 6;
        for k in 0..n - 1 {
            let mut d = deck(n);
            d.show(0);
            for _ in 0..k {
                d.next();
            }
            assert_eq!(d.index(), k);
            for _ in 0..k {
                d.previous();
            }
            assert_eq!(d.index(), 0);
        }
    }

    #[test]
    fn next_at_last_wraps_to_intro() {
        let mut d = deck(6);
        let view = d.show(5);
        assert!(view.next_disabled);
        let view = d.next();
        assert_eq!(view.active, 0);
        assert_eq!(view.counter, "Intro");
    }

    #[test]
    fn previous_at_intro_is_noop() {
        let mut d = deck(4);
        assert_eq!(d.previous().active, 0);
    }

    #[test]
    fn arrows_do_not_wrap() {
        let mut d = deck(3);
        assert_eq!(d.arrow(Arrow::Left).active, 0);
        assert_eq!(d.arrow(Arrow::Right).active, 1);
        assert_eq!(d.arrow(Arrow::Right).active, 2);
        assert_eq!(d.arrow(Arrow::Right).active, 2);
        assert_eq!(d.arrow(Arrow::Left).active, 1);
    }

    #[test]
    fn auto_advance_skips_intro_on_wrap() {
        let mut d = deck(4);
        assert_eq!(d.auto_advance().active, 1);
        assert_eq!(d.auto_advance().active, 2);
        assert_eq!(d.auto_advance().active, 3);
        assert_eq!(d.auto_advance().active, 1);
    }

    #[test]
    fn start_goes_to_first_fact() {
        let mut d = deck(4);
        d.show(3);
        let view = d.start();
        assert_eq!(view.active, 1);
        assert_eq!(view.counter, "1");
        assert!(!view.prev_disabled);
    }

    #[test]
    fn show_clamps() {
        let mut d = deck(4);
        assert_eq!(d.show(99).active, 3);
    }

    #[test]
    fn single_panel_stays_on_intro() {
        let mut d = deck(1);
        assert_eq!(d.start().active, 0);
        assert_eq!(d.auto_advance().active, 0);
        assert_eq!(d.next().active, 0);
        let view = d.view();
        assert_eq!(view.total, "0");
        assert!(view.prev_disabled && view.next_disabled);
    }

    #[test]
    fn arrow_names() {
        assert_eq!(Arrow::from_dom("ArrowLeft"), Some(Arrow::Left));
        assert_eq!(Arrow::from_dom("ArrowRight"), Some(Arrow::Right));
        assert_eq!(Arrow::from_dom("ArrowUp"), None);
    }
}
