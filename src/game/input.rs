use macroquad::prelude::{
    is_key_down, is_key_pressed, is_key_released, mouse_position, vec2, KeyCode, Vec2,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
}

const TRACKED_KEYS: [KeyCode; 5] = [
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
    KeyCode::Space,
];

impl Key {
    /// Case-insensitive lookup of a key name. Unknown keys give `None`.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier.to_lowercase().as_str() {
            "w" => Some(Self::W),
            "a" => Some(Self::A),
            "s" => Some(Self::S),
            "d" => Some(Self::D),
            " " | "space" | "spacebar" => Some(Self::Space),
            _ => None,
        }
    }

    /// Goes through the key code's name, e.g. `KeyCode::Space` is "Space".
    pub fn from_key_code(key_code: KeyCode) -> Option<Self> {
        Self::from_identifier(&format!("{:?}", key_code))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer position in viewport pixels.
    PointerMoved(Vec2),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pub w: bool,
    pub a: bool,
    pub s: bool,
    pub d: bool,
    pub space: bool,
    /// Raw pixel position; unlike everything else it is not in level units.
    pub pointer: Option<Vec2>,
}

impl InputState {
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => self.set_key(key, true),
            InputEvent::KeyUp(key) => self.set_key(key, false),
            InputEvent::PointerMoved(position) => {
                self.pointer = Some(position);
                log::trace!("pointer at {:?}", self.pointer);
            }
        }
    }

    fn set_key(&mut self, key: Key, pressed: bool) {
        let flag = match key {
            Key::W => &mut self.w,
            Key::A => &mut self.a,
            Key::S => &mut self.s,
            Key::D => &mut self.d,
            Key::Space => &mut self.space,
        };
        if *flag != pressed {
            log::debug!("{:?} {}", key, if pressed { "down" } else { "up" });
        }
        *flag = pressed;
    }

    pub fn left(&self) -> bool {
        self.a && !self.d
    }

    pub fn right(&self) -> bool {
        self.d && !self.a
    }

    pub fn jump(&self) -> bool {
        self.space || self.w
    }

    pub fn fast_fall(&self) -> bool {
        self.s
    }
}

fn key_event(key: Key, down: bool) -> InputEvent {
    if down {
        InputEvent::KeyDown(key)
    } else {
        InputEvent::KeyUp(key)
    }
}

/// Turns this frame's key edges and pointer motion into events.
pub fn poll_events(last_pointer: &mut Option<Vec2>) -> Vec<InputEvent> {
    let mut events = Vec::new();
    for &key_code in TRACKED_KEYS.iter() {
        let key = match Key::from_key_code(key_code) {
            Some(key) => key,
            None => continue,
        };
        // Both edges can land in one frame, the held state decides
        if is_key_pressed(key_code) || is_key_released(key_code) {
            events.push(key_event(key, is_key_down(key_code)));
        }
    }

    let (x, y) = mouse_position();
    let pointer = vec2(x, y);
    if *last_pointer != Some(pointer) {
        *last_pointer = Some(pointer);
        events.push(InputEvent::PointerMoved(pointer));
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_case_insensitive() {
        assert_eq!(Key::from_identifier("W"), Some(Key::W));
        assert_eq!(Key::from_identifier("a"), Some(Key::A));
        assert_eq!(Key::from_identifier(" "), Some(Key::Space));
        assert_eq!(Key::from_identifier("Spacebar"), Some(Key::Space));
        assert_eq!(Key::from_identifier("q"), None);
        assert_eq!(Key::from_identifier("Enter"), None);
    }

    #[test]
    fn key_codes_map_to_keys() {
        assert_eq!(Key::from_key_code(KeyCode::D), Some(Key::D));
        assert_eq!(Key::from_key_code(KeyCode::Space), Some(Key::Space));
        assert_eq!(Key::from_key_code(KeyCode::Q), None);
    }

    #[test]
    fn tracked_key_codes_all_map() {
        for &key_code in TRACKED_KEYS.iter() {
            assert!(Key::from_key_code(key_code).is_some(), "{:?}", key_code);
        }
    }

    #[test]
    fn held_state_wins_when_both_edges_fire() {
        let mut input = InputState::default();
        input.handle_event(InputEvent::KeyDown(Key::D));
        // Released and pressed again within one frame
        input.handle_event(key_event(Key::D, true));
        assert!(input.d);

        input.handle_event(key_event(Key::D, false));
        assert!(!input.d);
    }

    #[test]
    fn key_events_toggle_flags() {
        let mut input = InputState::default();
        input.handle_event(InputEvent::KeyDown(Key::A));
        input.handle_event(InputEvent::KeyDown(Key::Space));
        assert!(input.a && input.space);
        assert!(input.left());
        assert!(input.jump());

        input.handle_event(InputEvent::KeyDown(Key::D));
        assert!(!input.left() && !input.right());

        input.handle_event(InputEvent::KeyUp(Key::A));
        assert!(input.right());
        input.handle_event(InputEvent::KeyUp(Key::Space));
        assert!(!input.jump());
    }

    #[test]
    fn pointer_is_stored_verbatim() {
        let mut input = InputState::default();
        assert_eq!(input.pointer, None);
        input.handle_event(InputEvent::PointerMoved(vec2(812.0, 33.5)));
        assert_eq!(input.pointer, Some(vec2(812.0, 33.5)));
        input.handle_event(InputEvent::PointerMoved(vec2(-4.0, 2000.0)));
        assert_eq!(input.pointer, Some(vec2(-4.0, 2000.0)));
    }
}
