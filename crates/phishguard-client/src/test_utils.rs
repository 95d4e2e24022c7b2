//! Test helpers: a scripted classifier and a one-shot local HTTP server
//!
//! Available under `cfg(test)` and the `test-helpers` feature so the app and
//! TUI crates can drive the TEA loop without a network.

use std::collections::VecDeque;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use phishguard_core::Verdict;

use crate::classifier::Classifier;
use crate::error::ClientError;

// ─────────────────────────────────────────────────────────────────────────────
// MockClassifier
// ─────────────────────────────────────────────────────────────────────────────

/// Classifier that replays queued results and records every call.
///
/// When the queue is empty it answers with a legitimate verdict at
/// probability `0.0`.
#[derive(Debug, Clone, Default)]
pub struct MockClassifier {
    inner: Arc<MockInner>,
}

#[derive(Debug, Default)]
struct MockInner {
    replies: Mutex<VecDeque<Result<Verdict, ClientError>>>,
    inputs: Mutex<Vec<String>>,
    calls: AtomicUsize,
    delay: Mutex<Option<Duration>>,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for the next call
    pub fn push_reply(&self, reply: Result<Verdict, ClientError>) -> &Self {
        if let Ok(mut replies) = self.inner.replies.lock() {
            replies.push_back(reply);
        }
        self
    }

    /// Delay every reply, to observe the pending state
    pub fn with_delay(self, delay: Duration) -> Self {
        if let Ok(mut d) = self.inner.delay.lock() {
            *d = Some(delay);
        }
        self
    }

    pub fn call_count(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    /// Email text received by each call, in order
    pub fn inputs(&self) -> Vec<String> {
        self.inner
            .inputs
            .lock()
            .map(|i| i.clone())
            .unwrap_or_default()
    }
}

impl Classifier for MockClassifier {
    async fn classify(&self, email: &str) -> Result<Verdict, ClientError> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut inputs) = self.inner.inputs.lock() {
            inputs.push(email.to_string());
        }

        let delay = self.inner.delay.lock().ok().and_then(|d| *d);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.inner
            .replies
            .lock()
            .ok()
            .and_then(|mut r| r.pop_front())
            .unwrap_or_else(|| Ok(Verdict::legitimate(Some(0.0))))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// One-shot HTTP server
// ─────────────────────────────────────────────────────────────────────────────

/// Canned HTTP response
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
    /// Sleep before answering, to exercise client timeouts
    pub delay: Option<Duration>,
}

impl HttpReply {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn to_wire(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status,
            reason_phrase(self.status),
            self.body.len(),
            self.body
        )
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Status",
    }
}

/// Serve a single request with `reply`; returns the base URL (`http://127.0.0.1:PORT`)
pub fn serve_once(reply: HttpReply) -> String {
    serve_once_capturing(reply).0
}

/// Like [`serve_once`], also handing back the raw request text
pub fn serve_once_capturing(reply: HttpReply) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let request = read_request(&mut stream);
            let _ = tx.send(request);
            if let Some(delay) = reply.delay {
                thread::sleep(delay);
            }
            let _ = stream.write_all(reply.to_wire().as_bytes());
            let _ = stream.flush();
        }
    });

    (format!("http://{}", addr), rx)
}

/// Read headers plus a `Content-Length` body
fn read_request(stream: &mut impl Read) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        data.extend_from_slice(&buf[..n]);

        let text = String::from_utf8_lossy(&data);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.trim()
                        .eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if data.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&data).into_owned()
}
