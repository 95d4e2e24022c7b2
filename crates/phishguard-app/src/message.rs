//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use phishguard_core::{AnalysisResult, AnalysisToken, Page};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Bracketed paste from terminal
    Paste(String),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Switch to a navigation destination; resets the detector form
    SelectPage(Page),
    /// Select the next destination in nav order
    NextPage,
    /// Select the previous destination in nav order
    PreviousPage,

    // ─────────────────────────────────────────────────────────
    // Detector Messages
    // ─────────────────────────────────────────────────────────
    /// Replace the email buffer verbatim
    EditInput(String),
    /// Run an analysis of the current buffer
    Submit,
    /// Background classification finished
    AnalysisCompleted {
        token: AnalysisToken,
        result: AnalysisResult,
    },
}
