//! Keyboard polling.

use macroquad::input::{self, KeyCode};

use nave_sim::input::{Key, KeyEvent};

/// Physical keys the game listens to.
const BINDINGS: [(KeyCode, Key); 5] = [
    (KeyCode::Left, Key::Left),
    (KeyCode::Right, Key::Right),
    (KeyCode::Up, Key::Up),
    (KeyCode::Space, Key::Space),
    (KeyCode::Enter, Key::Enter),
];

/// Game key bound to a physical key, if any.
pub fn key_for(code: KeyCode) -> Option<Key> {
    BINDINGS
        .iter()
        .find(|(bound, _)| *bound == code)
        .map(|(_, key)| *key)
}

/// Key transitions since the previous frame, presses before releases.
pub fn poll_key_events() -> Vec<KeyEvent> {
    let mut events = Vec::new();
    for (code, key) in BINDINGS {
        if input::is_key_pressed(code) {
            events.push(KeyEvent::Pressed(key));
        }
    }
    for (code, key) in BINDINGS {
        if input::is_key_released(code) {
            events.push(KeyEvent::Released(key));
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings() {
        assert_eq!(key_for(KeyCode::Left), Some(Key::Left));
        assert_eq!(key_for(KeyCode::Enter), Some(Key::Enter));
        assert_eq!(key_for(KeyCode::Space), Some(Key::Space));
        assert_eq!(key_for(KeyCode::W), None);
    }
}
