//! Typed async client core for the task API.
//!
//! # Overview
//! One generic pipeline (`HttpClient::execute`) runs every call: a request
//! descriptor says what to send and how to decode the success body, the
//! transport does the I/O, and the client classifies whatever comes back
//! into a closed `ApiError` taxonomy. `TaskService` layers the concrete
//! task operations on top.
//!
//! # Design
//! - Descriptors (`ApiRequest`) bundle wire shape and decoding; the
//!   pipeline never learns about endpoints.
//! - The transport is a trait seam: `ReqwestTransport` in production,
//!   in-memory fakes in tests.
//! - Every failure maps to exactly one `ApiError` variant, in a fixed
//!   classification order; errors compare structurally.
//! - Credentials enter through `TaskServiceConfig`; nothing is embedded.
//! - Callers pick the runtime. `execute` is a plain async fn;
//!   `execute_spawned` hands back a detachable handle for callers that
//!   want the call running on a background task.

pub mod client;
pub mod error;
pub mod http;
pub mod request;
pub mod service;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testutil;

pub use client::{HttpClient, SpawnedCall};
pub use error::{ApiError, ErrorMessage};
pub use http::{BasicCredentials, Headers, HttpMethod, HttpRequest, HttpResponse};
pub use request::ApiRequest;
pub use service::{GetAllTasksRequest, TaskService, TaskServiceConfig};
pub use transport::{
    ReqwestTransport, Transport, TransportError, TransportErrorKind, TransportOutcome,
    TransportPolicy,
};
pub use types::{Meta, Page, Task, TaskList, TaskListKind, TasksEnvelope, UserPermissions};
