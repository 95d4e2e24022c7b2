//! Application state (Model in TEA pattern)

use phishguard_core::{AnalysisResult, AnalysisToken, AppPhase, Page, SiteVariant};

use crate::config::Settings;

/// Transient state of the detector form.
///
/// `pending` and `last_result` are never both set: a submit clears the old
/// result before dispatching, and a completion clears `pending`.
#[derive(Debug, Clone, Default)]
pub struct DetectorState {
    /// The input buffer, exactly as typed or pasted
    pub email_text: String,

    /// True strictly between dispatch and resolution
    pub pending: bool,

    /// Outcome of the most recent completed analysis
    pub last_result: Option<AnalysisResult>,

    /// Inline message shown near the input (blank submit)
    pub validation_error: Option<String>,

    /// Token of the call whose completion we are waiting for
    pub in_flight: Option<AnalysisToken>,

    /// Last token handed out
    last_token: AnalysisToken,
}

impl DetectorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the submit affordance is enabled
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.email_text.trim().is_empty()
    }

    /// Number of characters in the buffer
    pub fn char_count(&self) -> usize {
        self.email_text.chars().count()
    }

    /// Begin a new analysis cycle and return its token
    pub fn begin_analysis(&mut self) -> AnalysisToken {
        let token = self.last_token.next();
        self.last_token = token;
        self.last_result = None;
        self.validation_error = None;
        self.pending = true;
        self.in_flight = Some(token);
        token
    }

    /// Store a completion if it belongs to the in-flight call.
    ///
    /// Returns `false` for stale completions, which are dropped.
    pub fn complete(&mut self, token: AnalysisToken, result: AnalysisResult) -> bool {
        if self.in_flight != Some(token) {
            return false;
        }
        self.in_flight = None;
        self.pending = false;
        self.last_result = Some(result);
        true
    }

    /// Clear the form and abandon any in-flight call
    pub fn reset(&mut self) {
        self.email_text.clear();
        self.last_result = None;
        self.validation_error = None;
        self.pending = false;
        self.in_flight = None;
    }
}

/// Complete application state (Model in TEA pattern)
#[derive(Debug)]
pub struct AppState {
    /// Application phase
    pub phase: AppPhase,

    /// Navigation layout in use
    pub variant: SiteVariant,

    /// Active navigation destination
    pub current_page: Page,

    /// Detector form
    pub detector: DetectorState,

    /// Configuration settings
    pub settings: Settings,

    /// Tick counter for the analyzing spinner
    pub spinner_frame: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let variant = settings.ui.variant;
        let current_page = if variant.contains(settings.ui.start_page) {
            settings.ui.start_page
        } else {
            Page::Home
        };

        Self {
            phase: AppPhase::Running,
            variant,
            current_page,
            detector: DetectorState::new(),
            settings,
            spinner_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn on_detector(&self) -> bool {
        self.current_page == Page::Detector
    }

    /// Advance the spinner while an analysis is running
    pub fn tick(&mut self) {
        if self.detector.pending {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}
