//! # phishguard-client - Classification Service Client
//!
//! Talks to the remote `/predict` endpoint: builds the request, runs the HTTP
//! exchange, and normalizes every outcome into a [`Verdict`] or a
//! [`ClientError`].
//!
//! ## Public API
//!
//! - [`Classifier`] / [`LocalClassifier`] - async classification seam
//! - [`HttpClassifier`] - `ureq`-backed implementation with a bounded timeout
//! - [`PredictRequest`], [`PredictResponse`], [`interpret_response`] - wire shape
//! - [`ClientError`] - transport-level failures and their user-facing text

pub mod classifier;
pub mod error;
pub mod http;
pub mod protocol;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use classifier::{Classifier, HttpClassifier, LocalClassifier, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use error::{ClientError, EMPTY_INPUT_MESSAGE, TRANSPORT_FAILURE_MESSAGE};
pub use protocol::{interpret_response, parse_predict_body, PredictRequest, PredictResponse};

pub use phishguard_core::Verdict;
