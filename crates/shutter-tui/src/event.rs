//! Terminal input for the speed field, the theme buttons and the crash overlay
//!
//! Only keys some handler routes are translated; everything else is dropped
//! here so `handler::update` never sees it.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use shutter_app::message::Message;
use shutter_app::InputKey;
use shutter_core::prelude::*;
use std::time::Duration;

/// Redraw cadence while idle
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Translate a key press into the [`InputKey`] the handlers match on
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let input = match key.code {
        // Ctrl+C quits, Ctrl+U clears the draft
        KeyCode::Char(c) if ctrl => InputKey::CharCtrl(c.to_ascii_lowercase()),
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::Backspace => InputKey::Backspace,
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        // Some terminals report Shift+Tab as Tab with SHIFT rather than BackTab
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => InputKey::BackTab,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::BackTab => InputKey::BackTab,
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        _ => return None,
    };
    Some(input)
}

/// Turn one terminal event into a message, ignoring key releases and repeats
pub fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        // The next loop iteration redraws at the new size
        Event::Resize(..) => Some(Message::Tick),
        _ => None,
    }
}

/// Wait up to one poll interval for input, yielding `Tick` when none arrives
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }
    Ok(event_to_message(event::read()?))
}
