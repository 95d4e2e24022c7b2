//! Tests for handler module

use super::*;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use phishguard_client::{EMPTY_INPUT_MESSAGE, TRANSPORT_FAILURE_MESSAGE};
use phishguard_core::{AnalysisResult, AppPhase, Outcome, Page, SiteVariant, Verdict};

fn detector_state(text: &str) -> AppState {
    let mut state = AppState::new();
    update(&mut state, Message::SelectPage(Page::Detector));
    update(&mut state, Message::EditInput(text.to_string()));
    state
}

/// Submit and return the dispatched token
fn submit(state: &mut AppState) -> phishguard_core::AnalysisToken {
    match update(state, Message::Submit).action {
        Some(UpdateAction::Analyze { token, .. }) => token,
        None => panic!("expected an Analyze action"),
    }
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_on_every_page() {
    for page in [Page::Home, Page::Detector, Page::About] {
        let mut state = AppState::new();
        update(&mut state, Message::SelectPage(page));
        let result = handle_key(&state, InputKey::CharCtrl('c'));
        assert!(matches!(result, Some(Message::Quit)));
    }
}

#[test]
fn test_q_quits_outside_detector_but_types_inside() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));

    let state = detector_state("");
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::EditInput(ref t)) if t == "q"
    ));
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_select_page_sets_current_page() {
    let mut state = AppState::new();
    update(&mut state, Message::SelectPage(Page::About));
    assert_eq!(state.current_page, Page::About);
}

#[test]
fn test_select_page_clears_form() {
    let mut state = detector_state("Dear user, verify your account");
    state.detector.last_result = Some(AnalysisResult::failed("old"));
    state.detector.validation_error = Some("old".to_string());

    update(&mut state, Message::SelectPage(Page::About));

    assert!(state.detector.email_text.is_empty());
    assert!(state.detector.last_result.is_none());
    assert!(state.detector.validation_error.is_none());
}

#[test]
fn test_select_page_is_idempotent() {
    let mut state = detector_state("hello");
    update(&mut state, Message::SelectPage(Page::Detector));
    let page = state.current_page;
    let text = state.detector.email_text.clone();

    update(&mut state, Message::SelectPage(Page::Detector));

    assert_eq!(state.current_page, page);
    assert_eq!(state.detector.email_text, text);
    assert!(state.detector.last_result.is_none());
    assert!(!state.detector.pending);
}

#[test]
fn test_select_page_has_no_network_effect() {
    let mut state = detector_state("hello");
    let result = update(&mut state, Message::SelectPage(Page::Home));
    assert!(result.action.is_none());
    assert!(result.message.is_none());
}

#[test]
fn test_select_page_outside_variant_is_ignored() {
    let mut settings = Settings::default();
    settings.ui.variant = SiteVariant::Team;
    let mut state = AppState::with_settings(settings);

    update(&mut state, Message::SelectPage(Page::WhyUs));
    assert_eq!(state.current_page, Page::Home);

    update(&mut state, Message::SelectPage(Page::Team));
    assert_eq!(state.current_page, Page::Team);
}

#[test]
fn test_next_and_previous_page_wrap() {
    let mut state = AppState::new();
    update(&mut state, Message::PreviousPage);
    assert_eq!(state.current_page, Page::WhyUs);
    update(&mut state, Message::NextPage);
    assert_eq!(state.current_page, Page::Home);
    update(&mut state, Message::NextPage);
    assert_eq!(state.current_page, Page::Detector);
}

#[test]
fn test_number_keys_select_pages_outside_detector() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('3')),
        Some(Message::SelectPage(Page::About))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('4')),
        Some(Message::SelectPage(Page::WhyUs))
    ));
    assert!(handle_key(&state, InputKey::Char('7')).is_none());
}

#[test]
fn test_enter_on_home_opens_detector() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::SelectPage(Page::Detector))
    ));
}

#[test]
fn test_function_keys_navigate_from_detector() {
    let state = detector_state("text");
    assert!(matches!(
        handle_key(&state, InputKey::F(1)),
        Some(Message::SelectPage(Page::Home))
    ));
}

// ─────────────────────────────────────────────────────────
// Editing
// ─────────────────────────────────────────────────────────

#[test]
fn test_edit_input_replaces_text_verbatim() {
    let mut state = detector_state("");
    update(&mut state, Message::EditInput("  padded\n\t".to_string()));
    assert_eq!(state.detector.email_text, "  padded\n\t");
}

#[test]
fn test_edit_input_clears_validation_error() {
    let mut state = detector_state("   ");
    update(&mut state, Message::Submit);
    assert!(state.detector.validation_error.is_some());

    update(&mut state, Message::EditInput("x".to_string()));
    assert!(state.detector.validation_error.is_none());
}

#[test]
fn test_edit_after_result_returns_to_idle() {
    let mut state = detector_state("hello");
    let token = submit(&mut state);
    update(
        &mut state,
        Message::AnalysisCompleted {
            token,
            result: AnalysisResult::Verdict(Verdict::legitimate(Some(0.2))),
        },
    );
    assert!(state.detector.last_result.is_some());

    update(&mut state, Message::EditInput("hello!".to_string()));
    assert!(state.detector.last_result.is_none());
}

#[test]
fn test_typing_keys_edit_the_buffer() {
    let state = detector_state("ab");
    assert!(matches!(
        handle_key(&state, InputKey::Char('c')),
        Some(Message::EditInput(ref t)) if t == "abc"
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Backspace),
        Some(Message::EditInput(ref t)) if t == "a"
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::EditInput(ref t)) if t == "ab\n"
    ));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('u')),
        Some(Message::EditInput(ref t)) if t.is_empty()
    ));
}

#[test]
fn test_backspace_on_empty_buffer_does_nothing() {
    let state = detector_state("");
    assert!(handle_key(&state, InputKey::Backspace).is_none());
}

#[test]
fn test_paste_appends_on_detector_only() {
    let mut state = detector_state("Subject: ");
    update(&mut state, Message::Paste("Urgent\r\nClick here".to_string()));
    assert_eq!(state.detector.email_text, "Subject: Urgent\nClick here");

    let mut state = AppState::new();
    update(&mut state, Message::Paste("ignored".to_string()));
    assert!(state.detector.email_text.is_empty());
}

// ─────────────────────────────────────────────────────────
// Submit
// ─────────────────────────────────────────────────────────

#[test]
fn test_submit_keys() {
    let state = detector_state("text");
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('s')),
        Some(Message::Submit)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::CtrlEnter),
        Some(Message::Submit)
    ));
}

#[test]
fn test_blank_submit_sets_validation_error_without_dispatch() {
    for blank in ["", " ", "\n\t  \n"] {
        let mut state = detector_state(blank);

        let result = update(&mut state, Message::Submit);

        assert!(result.action.is_none());
        assert!(!state.detector.pending);
        assert_eq!(
            state.detector.validation_error.as_deref(),
            Some(EMPTY_INPUT_MESSAGE)
        );
    }
}

#[test]
fn test_submit_dispatches_trimmed_email() {
    let mut state = detector_state("  Dear user  \n");

    let result = update(&mut state, Message::Submit);

    match result.action {
        Some(UpdateAction::Analyze { email, .. }) => assert_eq!(email, "Dear user"),
        other => panic!("unexpected action: {:?}", other),
    }
    assert!(state.detector.pending);
    // Buffer itself is untouched
    assert_eq!(state.detector.email_text, "  Dear user  \n");
}

#[test]
fn test_submit_clears_previous_result_before_dispatch() {
    let mut state = detector_state("hello");
    state.detector.last_result = Some(AnalysisResult::failed("earlier"));

    submit(&mut state);

    assert!(state.detector.pending);
    assert!(state.detector.last_result.is_none());
}

#[test]
fn test_no_duplicate_dispatch_while_pending() {
    let mut state = detector_state("hello");
    submit(&mut state);

    let second = update(&mut state, Message::Submit);

    assert!(second.action.is_none());
    assert!(state.detector.pending);
}

// ─────────────────────────────────────────────────────────
// Completion
// ─────────────────────────────────────────────────────────

#[test]
fn test_phishing_completion() {
    let mut state = detector_state("Verify your password now");
    let token = submit(&mut state);

    update(
        &mut state,
        Message::AnalysisCompleted {
            token,
            result: AnalysisResult::Verdict(Verdict::phishing(Some(0.873))),
        },
    );

    assert!(!state.detector.pending);
    let result = state.detector.last_result.as_ref().unwrap();
    assert_eq!(result.outcome(), Outcome::Phishing);
    assert_eq!(
        result.verdict().unwrap().confidence().unwrap().to_string(),
        "87.3%"
    );
}

#[test]
fn test_safe_completion() {
    let mut state = detector_state("Lunch at noon?");
    let token = submit(&mut state);

    update(
        &mut state,
        Message::AnalysisCompleted {
            token,
            result: AnalysisResult::Verdict(Verdict::legitimate(Some(0.12))),
        },
    );

    let result = state.detector.last_result.as_ref().unwrap();
    assert_eq!(result.outcome(), Outcome::Safe);
    assert_eq!(
        result.verdict().unwrap().confidence().unwrap().to_string(),
        "88.0%"
    );
}

#[test]
fn test_failure_completion_clears_pending_and_allows_resubmit() {
    let mut state = detector_state("hello");
    let token = submit(&mut state);

    update(
        &mut state,
        Message::AnalysisCompleted {
            token,
            result: AnalysisResult::failed(TRANSPORT_FAILURE_MESSAGE),
        },
    );

    assert!(!state.detector.pending);
    assert_eq!(
        state.detector.last_result.as_ref().map(|r| r.outcome()),
        Some(Outcome::Error)
    );

    let retry = update(&mut state, Message::Submit);
    assert!(retry.action.is_some());
    assert!(state.detector.pending);
}

#[test]
fn test_navigation_while_pending_discards_late_response() {
    let mut state = detector_state("hello");
    let token = submit(&mut state);

    update(&mut state, Message::SelectPage(Page::About));
    assert!(state.detector.email_text.is_empty());
    assert!(state.detector.last_result.is_none());
    assert!(!state.detector.pending);

    update(&mut state, Message::SelectPage(Page::Detector));
    update(
        &mut state,
        Message::AnalysisCompleted {
            token,
            result: AnalysisResult::Verdict(Verdict::phishing(Some(0.99))),
        },
    );

    assert!(state.detector.last_result.is_none());
    assert_eq!(state.current_page, Page::Detector);
}

#[test]
fn test_late_response_does_not_overwrite_newer_analysis() {
    let mut state = detector_state("first");
    let old = submit(&mut state);

    update(&mut state, Message::SelectPage(Page::Detector));
    update(&mut state, Message::EditInput("second".to_string()));
    let new = submit(&mut state);

    update(
        &mut state,
        Message::AnalysisCompleted {
            token: old,
            result: AnalysisResult::Verdict(Verdict::phishing(Some(0.99))),
        },
    );
    assert!(state.detector.pending);
    assert!(state.detector.last_result.is_none());

    update(
        &mut state,
        Message::AnalysisCompleted {
            token: new,
            result: AnalysisResult::Verdict(Verdict::legitimate(Some(0.05))),
        },
    );
    assert!(!state.detector.pending);
    assert_eq!(
        state.detector.last_result.as_ref().map(|r| r.outcome()),
        Some(Outcome::Safe)
    );
}

#[test]
fn test_edit_while_pending_keeps_call_alive() {
    let mut state = detector_state("hello");
    let token = submit(&mut state);

    update(&mut state, Message::EditInput("hello again".to_string()));
    assert!(state.detector.pending);

    update(
        &mut state,
        Message::AnalysisCompleted {
            token,
            result: AnalysisResult::Verdict(Verdict::legitimate(None)),
        },
    );
    assert!(state.detector.last_result.is_some());
}
