//! The classification seam
//!
//! [`Classifier`] is what the app layer talks to. [`HttpClassifier`] is the
//! production implementation; tests use
//! [`MockClassifier`](crate::test_utils::MockClassifier).

use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use phishguard_core::Verdict;

use crate::error::ClientError;
use crate::{http, protocol};

/// Default service endpoint
pub const DEFAULT_ENDPOINT: &str = "https://email-phishing-detector-3.onrender.com/predict";

/// Default client-side deadline for one request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Classify one email.
///
/// Implementations perform exactly one exchange per call: no retries.
/// Implement the `Send` variant [`Classifier`]; the blanket impl provides
/// `LocalClassifier`.
#[trait_variant::make(Classifier: Send)]
pub trait LocalClassifier {
    /// Classify `email`. Blank input is rejected locally with
    /// [`ClientError::EmptyInput`].
    async fn classify(&self, email: &str) -> Result<Verdict, ClientError>;
}

/// Classifier backed by the remote `/predict` endpoint
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    endpoint: Url,
    timeout: Duration,
    agent: ureq::Agent,
}

impl HttpClassifier {
    pub fn new(endpoint: Url, timeout: Duration) -> Self {
        Self {
            agent: http::agent(timeout),
            endpoint,
            timeout,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Classifier for HttpClassifier {
    async fn classify(&self, email: &str) -> Result<Verdict, ClientError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ClientError::EmptyInput);
        }

        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();
        let email = email.to_string();
        debug!("POST {} ({} chars)", endpoint, email.len());

        let exchange =
            tokio::task::spawn_blocking(move || http::post_predict(&agent, &endpoint, &email));

        let body = match tokio::time::timeout(self.timeout, exchange).await {
            Ok(Ok(result)) => result?,
            Ok(Err(join_err)) => {
                warn!("Classification task failed: {}", join_err);
                return Err(ClientError::Transport(join_err.to_string()));
            }
            Err(_) => return Err(ClientError::Timeout),
        };

        protocol::parse_predict_body(&body)
    }
}
