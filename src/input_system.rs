use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// Keys the game reacts to
///
/// Raw SDL keycodes are collapsed into this small set so the menu and the
/// gameplay loop never see SDL types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Return or Space
    Confirm,
}

/// A single input event, in the order the backend received it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close requested
    Quit,
    KeyDown(Key),
}

/// Translates one SDL2 event into an InputEvent
///
/// Returns `None` for events the game has no use for (mouse motion, key
/// releases, unmapped keys, window events, ...).
pub fn translate_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            keycode: Some(key), ..
        } => translate_key(*key).map(InputEvent::KeyDown),
        _ => None,
    }
}

fn translate_key(key: Keycode) -> Option<Key> {
    match key {
        Keycode::Up => Some(Key::Up),
        Keycode::Down => Some(Key::Down),
        Keycode::Left => Some(Key::Left),
        Keycode::Right => Some(Key::Right),
        Keycode::Return | Keycode::Space => Some(Key::Confirm),
        _ => None,
    }
}

/// Drains every pending SDL2 event without blocking
///
/// If the queue is empty this returns immediately with an empty Vec.
pub fn poll_events(event_pump: &mut EventPump) -> Vec<InputEvent> {
    event_pump
        .poll_iter()
        .filter_map(|event| translate_event(&event))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key_down(keycode: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 1,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn test_quit_event() {
        let event = Event::Quit { timestamp: 0 };
        assert_eq!(translate_event(&event), Some(InputEvent::Quit));
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            translate_event(&key_down(Keycode::Up)),
            Some(InputEvent::KeyDown(Key::Up))
        );
        assert_eq!(
            translate_event(&key_down(Keycode::Down)),
            Some(InputEvent::KeyDown(Key::Down))
        );
        assert_eq!(
            translate_event(&key_down(Keycode::Left)),
            Some(InputEvent::KeyDown(Key::Left))
        );
        assert_eq!(
            translate_event(&key_down(Keycode::Right)),
            Some(InputEvent::KeyDown(Key::Right))
        );
    }

    #[test]
    fn test_confirm_keys() {
        assert_eq!(
            translate_event(&key_down(Keycode::Return)),
            Some(InputEvent::KeyDown(Key::Confirm))
        );
        assert_eq!(
            translate_event(&key_down(Keycode::Space)),
            Some(InputEvent::KeyDown(Key::Confirm))
        );
    }

    #[test]
    fn test_unmapped_events_are_dropped() {
        assert_eq!(translate_event(&key_down(Keycode::A)), None);

        let key_up = Event::KeyUp {
            timestamp: 0,
            window_id: 1,
            keycode: Some(Keycode::Up),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        };
        assert_eq!(translate_event(&key_up), None);
    }
}
