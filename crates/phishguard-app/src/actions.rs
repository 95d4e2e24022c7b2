//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::handler::UpdateAction;
use crate::message::Message;
use phishguard_client::Classifier;
use phishguard_core::{prelude::*, AnalysisResult};

/// Execute an action by spawning a background task
pub fn handle_action<C>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, classifier: Arc<C>)
where
    C: Classifier + Sync + 'static,
{
    match action {
        UpdateAction::Analyze { token, email } => {
            tokio::spawn(async move {
                let result = run_analysis(classifier.as_ref(), &email).await;
                if msg_tx
                    .send(Message::AnalysisCompleted { token, result })
                    .await
                    .is_err()
                {
                    debug!("Message channel closed before analysis {} finished", token);
                }
            });
        }
    }
}

/// Classify one email and fold any client error into a failure result
pub async fn run_analysis<C: Classifier>(classifier: &C, email: &str) -> AnalysisResult {
    match classifier.classify(email).await {
        Ok(verdict) => AnalysisResult::Verdict(verdict),
        Err(e) => {
            warn!("Analysis failed: {}", e);
            AnalysisResult::failed(e.user_message())
        }
    }
}
