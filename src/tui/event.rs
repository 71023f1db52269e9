use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Key;
use crate::core::controller::KeySource;

/// Blocking key source backed by crossterm.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> std::io::Result<Key> {
        loop {
            match event::read()? {
                // Release/repeat events would turn one press into several moves
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    log::debug!(
                        "Key event: {:?} with modifiers {:?}",
                        key_event.code,
                        key_event.modifiers
                    );
                    return Ok(map_key(key_event));
                }
                Event::Resize(_, _) => return Ok(Key::Resize),
                _ => continue,
            }
        }
    }
}

/// Translate a crossterm key press into a game key.
pub fn map_key(key_event: KeyEvent) -> Key {
    match (key_event.modifiers, key_event.code) {
        // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Key::ForceQuit,
        (_, KeyCode::Up | KeyCode::Char('k')) => Key::Up,
        (_, KeyCode::Down | KeyCode::Char('j')) => Key::Down,
        (_, KeyCode::Left | KeyCode::Char('h')) => Key::Left,
        (_, KeyCode::Right | KeyCode::Char('l')) => Key::Right,
        (_, KeyCode::Char('q')) => Key::Quit,
        (_, KeyCode::Char('y' | 'Y')) => Key::Yes,
        (_, KeyCode::Char('n' | 'N')) => Key::No,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_map_to_directions() {
        assert_eq!(map_key(press(KeyCode::Up)), Key::Up);
        assert_eq!(map_key(press(KeyCode::Down)), Key::Down);
        assert_eq!(map_key(press(KeyCode::Left)), Key::Left);
        assert_eq!(map_key(press(KeyCode::Right)), Key::Right);
    }

    #[test]
    fn test_vim_keys_map_to_directions() {
        assert_eq!(map_key(press(KeyCode::Char('h'))), Key::Left);
        assert_eq!(map_key(press(KeyCode::Char('j'))), Key::Down);
        assert_eq!(map_key(press(KeyCode::Char('k'))), Key::Up);
        assert_eq!(map_key(press(KeyCode::Char('l'))), Key::Right);
    }

    #[test]
    fn test_quit_and_answers() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), Key::Quit);
        assert_eq!(map_key(press(KeyCode::Char('y'))), Key::Yes);
        assert_eq!(map_key(press(KeyCode::Char('Y'))), Key::Yes);
        assert_eq!(map_key(press(KeyCode::Char('n'))), Key::No);
        assert_eq!(map_key(press(KeyCode::Char('N'))), Key::No);
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Key::ForceQuit);
        assert_eq!(map_key(press(KeyCode::Char('c'))), Key::Other);
    }

    #[test]
    fn test_unbound_keys_are_other() {
        assert_eq!(map_key(press(KeyCode::Enter)), Key::Other);
        assert_eq!(map_key(press(KeyCode::Esc)), Key::Other);
        assert_eq!(map_key(press(KeyCode::Char('Q'))), Key::Other);
    }
}
