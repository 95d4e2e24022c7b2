//! Blocking HTTP exchange with the classification service

use std::io::{self, Read};
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::ClientError;
use crate::protocol::PredictRequest;

/// Upper bound on a `/predict` response body
pub const MAX_RESPONSE_BYTES: usize = 64 * 1024;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build an agent whose overall request deadline is `timeout`
pub fn agent(timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(CONNECT_TIMEOUT.min(timeout))
        .timeout(timeout)
        .build()
}

/// POST `{ "email": ... }` to `endpoint` and return the raw 2xx body
pub fn post_predict(
    agent: &ureq::Agent,
    endpoint: &Url,
    email: &str,
) -> Result<Vec<u8>, ClientError> {
    let request = agent
        .post(endpoint.as_str())
        .set("Accept", "application/json")
        .set("Content-Type", "application/json");

    let response = match request.send_json(PredictRequest { email }) {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _)) => {
            return Err(ClientError::Status(code));
        }
        Err(ureq::Error::Transport(err)) => {
            if is_timeout(&err) {
                return Err(ClientError::Timeout);
            }
            return Err(ClientError::Transport(err.to_string()));
        }
    };

    debug!("Classification service answered HTTP {}", response.status());
    read_response_bytes(response, MAX_RESPONSE_BYTES).map_err(|e| ClientError::Body(e.to_string()))
}

fn is_timeout(err: &ureq::Transport) -> bool {
    use std::error::Error as _;
    let mut source = err.source();
    while let Some(inner) = source {
        if let Some(io_err) = inner.downcast_ref::<io::Error>() {
            if matches!(
                io_err.kind(),
                io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
            ) {
                return true;
            }
        }
        source = inner.source();
    }
    false
}

/// Read a response into memory, enforcing a maximum byte size.
fn read_response_bytes(response: ureq::Response, max_bytes: usize) -> Result<Vec<u8>, io::Error> {
    if let Some(length) = response
        .header("Content-Length")
        .and_then(|v| v.parse::<u64>().ok())
    {
        if length > max_bytes as u64 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Response too large: {length} bytes"),
            ));
        }
    }
    let mut limited = response.into_reader().take(max_bytes as u64 + 1);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes)?;
    if bytes.len() > max_bytes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Response exceeded {max_bytes} bytes"),
        ));
    }
    Ok(bytes)
}
