//! In-memory transports for exercising the client without a network.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::http::{Headers, HttpRequest, HttpResponse};
use crate::transport::{Transport, TransportOutcome};

/// Outcome carrying a response with the given status and optional body.
pub fn responded(status: u16, body: Option<&str>) -> TransportOutcome {
    TransportOutcome::Responded(HttpResponse {
        status,
        headers: Headers::new(),
        body: body.map(|b| b.as_bytes().to_vec()),
    })
}

/// Replays one fixed outcome for every request.
pub struct StaticTransport {
    pub outcome: TransportOutcome,
}

#[async_trait]
impl Transport for StaticTransport {
    async fn send(&self, _request: &HttpRequest) -> TransportOutcome {
        self.outcome.clone()
    }
}

/// Records every request it sees, then replays a fixed outcome.
pub struct RecordingTransport {
    pub outcome: TransportOutcome,
    pub seen: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn new(outcome: TransportOutcome) -> Self {
        Self {
            outcome,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: &HttpRequest) -> TransportOutcome {
        self.seen.lock().unwrap().push(request.clone());
        self.outcome.clone()
    }
}

/// Panics on use. Stands in for call infrastructure that tears down
/// before delivering a result.
pub struct PanickingTransport;

#[async_trait]
impl Transport for PanickingTransport {
    async fn send(&self, _request: &HttpRequest) -> TransportOutcome {
        panic!("transport used after teardown");
    }
}
