//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per page
//! - `navigation`: Page selection and the reset-on-navigate rule
//! - `detector`: Edit, submit and completion handlers for the detector form

pub(crate) mod detector;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use phishguard_core::AnalysisToken;

// Re-export main entry point
pub use update::update;

// Re-export functions used by internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Classify `email` in the background and report back with
    /// `Message::AnalysisCompleted { token, .. }`
    Analyze {
        token: AnalysisToken,
        /// Trimmed email text
        email: String,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
