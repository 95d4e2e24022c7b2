//! Headless mode - JSON event output instead of the TUI
//!
//! Classifies a single email and writes structured events to stdout, one per
//! line (NDJSON). Useful for scripts and for checking a classification service
//! without a terminal.
//!
//! # Example Output
//!
//! ```json
//! {"event":"analysis_started","token":1,"chars":412,"timestamp":1704700001000}
//! {"event":"analysis_completed","token":1,"label":"phishing","probability":0.873,"confidence":87.3,"timestamp":1704700001800}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use phishguard_app::EngineEvent;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Blank input rejected before any network call
    ValidationFailed { message: String, timestamp: i64 },

    /// Classification request dispatched
    AnalysisStarted {
        token: u64,
        chars: usize,
        timestamp: i64,
    },

    /// Service returned a usable verdict
    AnalysisCompleted {
        token: u64,
        label: &'static str,
        probability: Option<f64>,
        /// Displayed confidence in percent
        confidence: Option<f64>,
        timestamp: i64,
    },

    /// Transport-level failure
    AnalysisFailed {
        token: u64,
        message: String,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Map an engine event to its headless form; page changes, abandoned
    /// analyses and shutdown have none
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        match event {
            EngineEvent::ValidationFailed { message } => Some(Self::ValidationFailed {
                message: message.clone(),
                timestamp,
            }),
            EngineEvent::AnalysisStarted { token, chars } => Some(Self::AnalysisStarted {
                token: token.id(),
                chars: *chars,
                timestamp,
            }),
            EngineEvent::AnalysisCompleted { token, verdict } => Some(Self::AnalysisCompleted {
                token: token.id(),
                label: if verdict.is_phishing() {
                    "phishing"
                } else {
                    "legitimate"
                },
                probability: verdict.probability,
                confidence: verdict
                    .confidence()
                    .map(|c| (c.percent() * 10.0).round() / 10.0),
                timestamp,
            }),
            EngineEvent::AnalysisFailed { token, message } => Some(Self::AnalysisFailed {
                token: token.id(),
                message: message.clone(),
                timestamp,
            }),
            EngineEvent::PageChanged { .. }
            | EngineEvent::AnalysisAbandoned { .. }
            | EngineEvent::Shutdown => None,
        }
    }
}
