//! Main TUI runner - entry point and event loop

use phishguard_app::config::Settings;
use phishguard_app::message::Message;
use phishguard_app::Engine;
use phishguard_client::Classifier;
use phishguard_core::{prelude::*, Page};

use super::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// `initial_email` preloads the detector buffer and opens the detector page.
pub async fn run<C>(settings: Settings, classifier: C, initial_email: Option<String>) -> Result<()>
where
    C: Classifier + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut engine = Engine::new(settings, classifier);
    if let Some(text) = initial_email {
        engine.process_message(Message::SelectPage(Page::Detector));
        engine.process_message(Message::EditInput(text));
    }
    info!(
        "PhishGuard starting on {} ({:?} layout)",
        engine.state.current_page, engine.state.variant
    );

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_paste() {
        warn!("{}", e);
    }

    let result = run_loop(&mut term, &mut engine);

    terminal::disable_paste();
    engine.shutdown();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<C>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<C>) -> Result<()>
where
    C: Classifier + Sync + 'static,
{
    while !engine.should_quit() {
        // Completions from background analyses, signal handler quits
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("PhishGuard exiting");
    Ok(())
}
