//! Transport seam between the client and the network.
//!
//! # Design
//! A `Transport` turns a plain-data `HttpRequest` into a `TransportOutcome`
//! and nothing else: no status interpretation, no body decoding. Outcomes
//! are a three-way sum rather than a `Result` because "the exchange failed"
//! and "the exchange finished but produced no response" are distinct inputs
//! to the client's validation pipeline.
//!
//! `ReqwestTransport` is the production implementation; tests substitute
//! in-memory fakes behind the same trait.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::http::{Headers, HttpMethod, HttpRequest, HttpResponse};

/// Default per-request deadline, covering the full exchange.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default deadline for establishing a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Coarse classification of a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Could not reach the server.
    Connect,
    /// A deadline elapsed before the exchange finished.
    Timeout,
    /// The request could not be realized on the wire.
    Request,
    /// Anything the transport could not classify further.
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransportErrorKind::Connect => "connection failed",
            TransportErrorKind::Timeout => "timed out",
            TransportErrorKind::Request => "request invalid",
            TransportErrorKind::Other => "transport failed",
        };
        f.write_str(label)
    }
}

/// A failure raised by the transport layer, before any response existed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} ({message})")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Everything a transport can report back for one request.
#[derive(Debug, Clone)]
pub enum TransportOutcome {
    /// The exchange failed underway.
    Failed(TransportError),
    /// The exchange finished without error yet produced no response.
    NoResponse,
    /// A response arrived, whatever its status.
    Responded(HttpResponse),
}

/// Executes HTTP requests. Implementations report outcomes; they never
/// interpret them.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &HttpRequest) -> TransportOutcome;
}

/// Timeouts applied by `ReqwestTransport`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportPolicy {
    /// Deadline for the whole exchange, connect included.
    pub request_timeout: Duration,
    /// Deadline for establishing the connection.
    pub connect_timeout: Duration,
}

impl Default for TransportPolicy {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

/// Production transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Transport with the default policy.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_policy(TransportPolicy::default())
    }

    pub fn with_policy(policy: TransportPolicy) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(policy.request_timeout)
            .connect_timeout(policy.connect_timeout)
            .build()
            .map_err(|e| TransportError::new(TransportErrorKind::Request, e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> TransportOutcome {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Patch => reqwest::Method::PATCH,
        };

        let mut builder = self.client.request(method, request.url.as_str());
        if let Some(headers) = &request.headers {
            for (name, value) in headers.iter() {
                builder = builder.header(name, value);
            }
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return TransportOutcome::Failed(classify(&e)),
        };

        let status = response.status().as_u16();
        let mut headers = Headers::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers.set(name.as_str(), value);
            }
        }

        match response.bytes().await {
            Ok(bytes) => TransportOutcome::Responded(HttpResponse {
                status,
                headers,
                body: Some(bytes.to_vec()),
            }),
            Err(e) => TransportOutcome::Failed(classify(&e)),
        }
    }
}

/// Map a reqwest failure onto the transport taxonomy.
fn classify(error: &reqwest::Error) -> TransportError {
    let kind = if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        TransportErrorKind::Connect
    } else if error.is_request() || error.is_builder() {
        TransportErrorKind::Request
    } else {
        TransportErrorKind::Other
    };
    TransportError::new(kind, error.to_string())
}
