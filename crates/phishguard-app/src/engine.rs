//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel and the classifier, and
//! broadcasts [`EngineEvent`]s describing what each message changed.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use phishguard_client::Classifier;
use phishguard_core::{AnalysisResult, AnalysisToken, Page};

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    page: Page,
    in_flight: Option<AnalysisToken>,
    validation_error: Option<String>,
    last_result: Option<AnalysisResult>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            page: state.current_page,
            in_flight: state.detector.in_flight,
            validation_error: state.detector.validation_error.clone(),
            last_result: state.detector.last_result.clone(),
        }
    }
}

/// Orchestration engine for PhishGuard.
///
/// Generic over the [`Classifier`] so tests can swap in a scripted one.
pub struct Engine<C> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, terminal events).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Classification backend shared with background tasks
    classifier: Arc<C>,

    /// Event broadcaster for external consumers
    event_tx: broadcast::Sender<EngineEvent>,
}

impl<C> Engine<C>
where
    C: Classifier + Sync + 'static,
{
    /// Create a new Engine.
    ///
    /// Creates the message channel (capacity 256), the event broadcast
    /// channel, and spawns the OS signal handler. Must be called inside a
    /// tokio runtime.
    pub fn new(settings: Settings, classifier: C) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            classifier: Arc::new(classifier),
            event_tx,
        }
    }

    /// Subscribe to engine events.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Emits EngineEvents based on state changes detected by comparing
    /// before/after snapshots.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.classifier);

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which drains all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` when every sender is gone.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Announce shutdown to subscribers.
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.page != post.page {
            self.emit(EngineEvent::PageChanged {
                from: pre.page,
                to: post.page,
            });
        }

        if let Some(message) = &post.validation_error {
            if pre.validation_error.as_ref() != Some(message) {
                self.emit(EngineEvent::ValidationFailed {
                    message: message.clone(),
                });
            }
        }

        // Resolution or abandonment of the previous call
        if let Some(token) = pre.in_flight {
            if post.in_flight != Some(token) {
                match (&post.in_flight, &post.last_result) {
                    (None, Some(AnalysisResult::Verdict(verdict))) => {
                        self.emit(EngineEvent::AnalysisCompleted {
                            token,
                            verdict: *verdict,
                        });
                    }
                    (None, Some(AnalysisResult::Failed { message })) => {
                        self.emit(EngineEvent::AnalysisFailed {
                            token,
                            message: message.clone(),
                        });
                    }
                    _ => self.emit(EngineEvent::AnalysisAbandoned { token }),
                }
            }
        }

        if let Some(token) = post.in_flight {
            if pre.in_flight != Some(token) {
                self.emit(EngineEvent::AnalysisStarted {
                    token,
                    chars: self.state.detector.email_text.trim().chars().count(),
                });
            }
        }
    }

    /// send() returns Err only if there are no receivers, which is fine.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
