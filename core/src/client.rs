//! Generic HTTP client: one validation pipeline for every descriptor.
//!
//! # Design
//! `HttpClient` owns a shared `Transport` and nothing else. `execute` turns
//! a descriptor into a wire request, hands it to the transport, and folds
//! the outcome through a fixed classification order:
//!
//! 1. transport failure
//! 2. no response produced
//! 3. response without a body
//! 4. non-2xx status (error body probed for a server message)
//! 5. decode of the success body
//!
//! First match wins. Step 3 outranks step 4, so an error status with an
//! absent body reports `NoData`, not `Api`. An empty-but-present body on a
//! 2xx response falls through to `decode` and fails there.
//!
//! `execute_spawned` runs the same pipeline on a background task for
//! callers that want a handle instead of an await point.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::error::{ApiError, ErrorMessage};
use crate::http::{HttpRequest, HttpResponse};
use crate::request::ApiRequest;
use crate::transport::{Transport, TransportOutcome};

/// Executes request descriptors against a transport.
#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
}

impl HttpClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Run one call to completion and resolve it to the descriptor's model
    /// or to exactly one `ApiError` variant.
    pub async fn execute<R: ApiRequest>(&self, request: R) -> Result<R::Model, ApiError> {
        let wire = wire_request(&request);
        tracing::debug!(method = wire.method.as_str(), url = %wire.url, "executing api request");

        match self.transport.send(&wire).await {
            TransportOutcome::Failed(failure) => {
                tracing::warn!(url = %wire.url, error = %failure, "transport failed");
                Err(ApiError::Transport(failure))
            }
            TransportOutcome::NoResponse => {
                tracing::warn!(url = %wire.url, "transport produced no response");
                Err(ApiError::NoResponse)
            }
            TransportOutcome::Responded(response) => validate(&request, response),
        }
    }

    /// Run the call on a background task and return a handle that resolves
    /// exactly once with the same result `execute` would have produced.
    ///
    /// Must be called within a tokio runtime. Dropping the handle detaches
    /// the call; it keeps running but nobody observes the result.
    pub fn execute_spawned<R>(&self, request: R) -> SpawnedCall<R::Model>
    where
        R: ApiRequest + Send + 'static,
        R::Model: Send + 'static,
    {
        let client = self.clone();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = client.execute(request).await;
            let _ = tx.send(result);
        });
        SpawnedCall { rx }
    }
}

/// Materialize the descriptor's wire shape.
fn wire_request<R: ApiRequest>(request: &R) -> HttpRequest {
    HttpRequest {
        url: request.url(),
        method: request.method(),
        headers: request.headers().cloned(),
        body: request.body().map(<[u8]>::to_vec),
    }
}

/// Steps 3 to 5 of the pipeline: body presence, status, decode.
fn validate<R: ApiRequest>(request: &R, response: HttpResponse) -> Result<R::Model, ApiError> {
    let status = response.status;
    let success = response.is_success();

    let Some(body) = response.body else {
        tracing::warn!(status, "response carried no body");
        return Err(ApiError::NoData);
    };

    if !success {
        let message = serde_json::from_slice::<ErrorMessage>(&body)
            .ok()
            .and_then(|m| m.message);
        tracing::warn!(status, message = ?message, "api rejected request");
        return Err(ApiError::Api { message, status });
    }

    request.decode(&body)
}

/// Handle to a call running on a background task.
///
/// Resolves exactly once: either the call's result, or `ApiError::Unknown`
/// when the task tore down without delivering one.
pub struct SpawnedCall<T> {
    rx: oneshot::Receiver<Result<T, ApiError>>,
}

impl<T> Future for SpawnedCall<T> {
    type Output = Result<T, ApiError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.get_mut().rx).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(ApiError::Unknown)),
            Poll::Pending => Poll::Pending,
        }
    }
}
