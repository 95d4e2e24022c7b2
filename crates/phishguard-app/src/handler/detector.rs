//! Detector form handlers: edit, paste, submit, completion

use crate::state::AppState;
use phishguard_client::EMPTY_INPUT_MESSAGE;
use phishguard_core::{prelude::*, AnalysisResult, AnalysisToken, Outcome};

use super::{UpdateAction, UpdateResult};

/// Replace the buffer verbatim.
///
/// Outside an analysis, editing also returns the form to idle by dropping the
/// previous result. Edits during an analysis leave the in-flight call alone.
pub fn handle_edit_input(state: &mut AppState, text: String) -> UpdateResult {
    let detector = &mut state.detector;
    detector.email_text = text;
    detector.validation_error = None;
    if !detector.pending {
        detector.last_result = None;
    }
    UpdateResult::none()
}

/// Append pasted text; only the detector page has a text area
pub fn handle_paste(state: &mut AppState, pasted: &str) -> UpdateResult {
    if !state.on_detector() {
        return UpdateResult::none();
    }
    let mut text = state.detector.email_text.clone();
    text.push_str(&pasted.replace("\r\n", "\n").replace('\r', "\n"));
    handle_edit_input(state, text)
}

/// Validate and dispatch one analysis
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.detector.pending {
        debug!("Submit ignored: analysis already pending");
        return UpdateResult::none();
    }

    let email = state.detector.email_text.trim();
    if email.is_empty() {
        state.detector.validation_error = Some(EMPTY_INPUT_MESSAGE.to_string());
        return UpdateResult::none();
    }
    let email = email.to_string();

    let token = state.detector.begin_analysis();
    info!("Dispatching analysis {} ({} chars)", token, email.chars().count());
    UpdateResult::action(UpdateAction::Analyze { token, email })
}

/// Record the result of a finished analysis, dropping stale completions
pub fn handle_analysis_completed(
    state: &mut AppState,
    token: AnalysisToken,
    result: AnalysisResult,
) -> UpdateResult {
    let outcome = result.outcome();
    if !state.detector.complete(token, result) {
        debug!("Discarding stale completion for analysis {}", token);
        return UpdateResult::none();
    }

    match outcome {
        Outcome::Phishing => info!("Analysis {} resolved: phishing", token),
        Outcome::Safe => info!("Analysis {} resolved: safe", token),
        Outcome::Error => warn!("Analysis {} failed", token),
    }
    UpdateResult::none()
}
