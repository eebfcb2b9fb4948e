/// Keys the engine understands. DOM key names are matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Q,
    E,
    P,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value to a Key.
    pub fn from_dom(key: &str) -> Option<Key> {
        match key.to_ascii_lowercase().as_str() {
            "w" => Some(Key::W),
            "a" => Some(Key::A),
            "s" => Some(Key::S),
            "d" => Some(Key::D),
            "q" => Some(Key::Q),
            "e" => Some(Key::E),
            "p" => Some(Key::P),
            _ => None,
        }
    }
}

/// Pointer button, numbered as in `MouseEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    Other(i16),
}

impl PointerButton {
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => PointerButton::Left,
            1 => PointerButton::Middle,
            2 => PointerButton::Right,
            other => PointerButton::Other(other),
        }
    }
}

/// Input event types the engine understands.
/// Positions are in CSS pixels relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32, button: PointerButton },
    PointerUp { x: f32, y: f32, button: PointerButton },
    PointerMove { x: f32, y: f32 },
    KeyDown { key: Key },
    KeyUp { key: Key },
}

/// A queue of input events.
/// DOM handlers push events; the next frame reads and drains them in order.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0, button: PointerButton::Left });
        q.push(InputEvent::KeyDown { key: Key::W });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn keys_are_case_insensitive() {
        assert_eq!(Key::from_dom("W"), Some(Key::W));
        assert_eq!(Key::from_dom("p"), Some(Key::P));
        assert_eq!(Key::from_dom("ArrowLeft"), None);
        assert_eq!(Key::from_dom("x"), None);
    }

    #[test]
    fn buttons_follow_dom_numbering() {
        assert_eq!(PointerButton::from_dom(0), PointerButton::Left);
        assert_eq!(PointerButton::from_dom(2), PointerButton::Right);
        assert_eq!(PointerButton::from_dom(4), PointerButton::Other(4));
    }
}
