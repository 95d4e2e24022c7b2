//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use phishguard_core::AppPhase;

use super::{detector, keys::handle_key, navigation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Paste(text) => detector::handle_paste(state, &text),

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectPage(page) => navigation::handle_select_page(state, page),
        Message::NextPage => {
            let page = state.variant.next(state.current_page);
            navigation::handle_select_page(state, page)
        }
        Message::PreviousPage => {
            let page = state.variant.previous(state.current_page);
            navigation::handle_select_page(state, page)
        }

        // ─────────────────────────────────────────────────────────
        // Detector Messages
        // ─────────────────────────────────────────────────────────
        Message::EditInput(text) => detector::handle_edit_input(state, text),
        Message::Submit => detector::handle_submit(state),
        Message::AnalysisCompleted { token, result } => {
            detector::handle_analysis_completed(state, token, result)
        }
    }
}
