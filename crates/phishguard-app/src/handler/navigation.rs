//! Page selection

use crate::state::AppState;
use phishguard_core::{prelude::*, Page};

use super::UpdateResult;

/// Switch pages and reset the detector form.
///
/// Selecting the active page performs the same reset. Any in-flight analysis
/// is abandoned; its completion will arrive with a stale token and be dropped.
pub fn handle_select_page(state: &mut AppState, page: Page) -> UpdateResult {
    if !state.variant.contains(page) {
        warn!("{} is not part of the {:?} layout", page, state.variant);
        return UpdateResult::none();
    }

    if let Some(token) = state.detector.in_flight {
        debug!("Abandoning analysis {} on navigation to {}", token, page);
    }

    state.current_page = page;
    state.detector.reset();
    UpdateResult::none()
}
