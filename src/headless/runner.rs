//! Headless mode runner - one analysis without the TUI

use tokio::sync::broadcast;
use tracing::{info, warn};

use phishguard_app::config::Settings;
use phishguard_app::{Engine, EngineEvent, Message};
use phishguard_client::Classifier;
use phishguard_core::{prelude::*, Outcome, Page};

use super::HeadlessEvent;

/// Classify `email` and emit NDJSON events.
///
/// Returns `Ok(true)` when the service produced a verdict, `Ok(false)` on a
/// validation or transport failure, or when a signal interrupted the wait.
pub async fn run_headless<C>(settings: Settings, classifier: C, email: String) -> Result<bool>
where
    C: Classifier + Sync + 'static,
{
    info!("PhishGuard starting in HEADLESS mode");

    let mut engine = Engine::new(settings, classifier);
    let mut events = engine.subscribe();

    engine.process_message(Message::SelectPage(Page::Detector));
    engine.process_message(Message::EditInput(email));
    engine.process_message(Message::Submit);
    emit_pending(&mut events);

    while engine.state.detector.pending && !engine.should_quit() {
        if !engine.process_next().await {
            info!("Message channel closed");
            break;
        }
        emit_pending(&mut events);
    }

    let succeeded = matches!(
        engine.state.detector.last_result.as_ref().map(|r| r.outcome()),
        Some(Outcome::Safe | Outcome::Phishing)
    );

    engine.shutdown();
    info!("PhishGuard headless mode exiting");
    Ok(succeeded)
}

/// Emit every queued engine event that has a headless form
fn emit_pending(events: &mut broadcast::Receiver<EngineEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(headless) = HeadlessEvent::from_engine_event(&event) {
                    headless.emit();
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(n)) => {
                warn!("Dropped {} engine events", n);
            }
            Err(_) => break,
        }
    }
}
