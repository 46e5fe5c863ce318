use bitext_align_engine::editing::{Caret, Key, KeyInput, Modifiers};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translate a terminal key press into the engine's input event.
///
/// Alt+Enter stands in for Shift+Enter, which many terminals cannot report.
pub fn to_key_input(event: &KeyEvent, caret: Caret) -> KeyInput {
    let key = match event.code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(c) => Key::Char(c.to_ascii_lowercase()),
        _ => Key::Other,
    };
    let alt_enter = event.code == KeyCode::Enter && event.modifiers.contains(KeyModifiers::ALT);
    let modifiers = Modifiers {
        shift: event.modifiers.contains(KeyModifiers::SHIFT) || alt_enter,
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        meta: event
            .modifiers
            .intersects(KeyModifiers::SUPER | KeyModifiers::META),
    };
    KeyInput::new(key, modifiers, caret)
}
