//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use phishguard_app::message::Message;
use phishguard_app::InputKey;
use phishguard_core::prelude::*;
use std::time::Duration;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c.to_ascii_lowercase()))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CtrlEnter)
        }
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert a crossterm event to a message, if it maps to one
pub fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Paste(text) => Some(Message::Paste(text)),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        Ok(event_to_message(event::read()?))
    } else {
        // Generate tick on timeout for the analyzing spinner
        Ok(Some(Message::Tick))
    }
}
