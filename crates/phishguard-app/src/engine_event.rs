//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use phishguard_core::{AnalysisToken, Page, Verdict};

/// Domain events emitted by the Engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The active navigation destination changed
    PageChanged { from: Page, to: Page },

    /// A blank submit was rejected before any network call
    ValidationFailed { message: String },

    /// A classification call was dispatched
    AnalysisStarted { token: AnalysisToken, chars: usize },

    /// The in-flight call resolved with a verdict
    AnalysisCompleted {
        token: AnalysisToken,
        verdict: Verdict,
    },

    /// The in-flight call failed; `message` is the user-facing text
    AnalysisFailed {
        token: AnalysisToken,
        message: String,
    },

    /// The in-flight call was abandoned by navigation
    AnalysisAbandoned { token: AnalysisToken },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Stable snake_case label for logs and NDJSON output
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::PageChanged { .. } => "page_changed",
            EngineEvent::ValidationFailed { .. } => "validation_failed",
            EngineEvent::AnalysisStarted { .. } => "analysis_started",
            EngineEvent::AnalysisCompleted { .. } => "analysis_completed",
            EngineEvent::AnalysisFailed { .. } => "analysis_failed",
            EngineEvent::AnalysisAbandoned { .. } => "analysis_abandoned",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
