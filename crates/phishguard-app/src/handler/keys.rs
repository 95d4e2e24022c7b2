//! Key event handlers for each page

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use phishguard_core::Page;

/// Convert key events to messages based on the active page
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.on_detector() {
        handle_key_detector(state, key)
    } else {
        handle_key_browse(state, key)
    }
}

/// Marketing pages: single-key navigation
fn handle_key_browse(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        InputKey::Tab | InputKey::Right | InputKey::Char('l') => Some(Message::NextPage),
        InputKey::BackTab | InputKey::Left | InputKey::Char('h') => Some(Message::PreviousPage),

        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            page_at(state, index)
        }
        InputKey::F(n) if n >= 1 => page_at(state, n as usize - 1),

        // "Start analyzing" shortcut
        InputKey::Char('d') => Some(Message::SelectPage(Page::Detector)),
        InputKey::Enter if state.current_page == Page::Home => {
            Some(Message::SelectPage(Page::Detector))
        }

        _ => None,
    }
}

/// Detector page: the text area owns printable keys
fn handle_key_detector(state: &AppState, key: InputKey) -> Option<Message> {
    let text = &state.detector.email_text;

    match key {
        InputKey::Esc => Some(Message::Quit),

        InputKey::CtrlEnter | InputKey::CharCtrl('s') => Some(Message::Submit),
        InputKey::CharCtrl('u') => Some(Message::EditInput(String::new())),

        InputKey::Tab => Some(Message::NextPage),
        InputKey::BackTab => Some(Message::PreviousPage),
        InputKey::F(n) if n >= 1 => page_at(state, n as usize - 1),

        InputKey::Enter => Some(Message::EditInput(format!("{text}\n"))),
        InputKey::Backspace => {
            let mut edited = text.clone();
            edited.pop()?;
            Some(Message::EditInput(edited))
        }
        InputKey::Char(c) => {
            let mut edited = text.clone();
            edited.push(c);
            Some(Message::EditInput(edited))
        }

        _ => None,
    }
}

fn page_at(state: &AppState, index: usize) -> Option<Message> {
    state
        .variant
        .pages()
        .get(index)
        .map(|page| Message::SelectPage(*page))
}
