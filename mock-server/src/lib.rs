//! Configurable stand-in for the task API, used by integration tests and
//! runnable as a standalone binary.
//!
//! `MockApi` decides how the single tasks route behaves: which fixture
//! rows it returns, whether it demands `Basic` credentials, whether it
//! answers with a forced failure, and whether it stalls first (to
//! exercise client timeouts). Builders configure it before the router
//! is built; per-request state never mutates.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Route served by the mock, matching the real API's task listing.
pub const TASKS_PATH: &str = "/projects/api/v3/tasks.json";

/// Behavior of the mock for the lifetime of one router.
#[derive(Clone, Debug, Default)]
pub struct MockApi {
    tasks: Vec<Value>,
    expected_authorization: Option<String>,
    failure: Option<Failure>,
    stall: Option<Duration>,
}

#[derive(Clone, Debug)]
struct Failure {
    status: u16,
    message: Option<String>,
}

impl MockApi {
    /// Rows returned inside the success envelope.
    pub fn with_tasks(mut self, tasks: Vec<Value>) -> Self {
        self.tasks = tasks;
        self
    }

    /// Demand `Basic` credentials on every request; anything else gets
    /// 401 with an `Unauthorized` message body.
    pub fn require_basic_auth(mut self, username: &str, password: &str) -> Self {
        let token = STANDARD.encode(format!("{username}:{password}"));
        self.expected_authorization = Some(format!("Basic {token}"));
        self
    }

    /// Answer every request with `status`, and a `{"message"}` body when
    /// one is given.
    pub fn fail_with(mut self, status: u16, message: Option<&str>) -> Self {
        self.failure = Some(Failure {
            status,
            message: message.map(str::to_string),
        });
        self
    }

    /// Sleep before answering, so clients with short deadlines time out.
    pub fn stall_for(mut self, delay: Duration) -> Self {
        self.stall = Some(delay);
        self
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

pub fn app(api: MockApi) -> Router {
    Router::new()
        .route(TASKS_PATH, get(list_tasks))
        .with_state(Arc::new(api))
}

pub async fn run(listener: TcpListener, api: MockApi) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api)).await
}

async fn list_tasks(State(api): State<Arc<MockApi>>, headers: HeaderMap) -> Response {
    if let Some(delay) = api.stall {
        tokio::time::sleep(delay).await;
    }

    if let Some(failure) = &api.failure {
        let status =
            StatusCode::from_u16(failure.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return match &failure.message {
            Some(message) => (
                status,
                Json(ErrorBody {
                    message: message.clone(),
                }),
            )
                .into_response(),
            None => status.into_response(),
        };
    }

    if let Some(expected) = &api.expected_authorization {
        let presented = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        if presented != Some(expected.as_str()) {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ErrorBody {
                    message: "Unauthorized".to_string(),
                }),
            )
                .into_response();
        }
    }

    let count = api.tasks.len();
    Json(json!({
        "tasks": api.tasks,
        "meta": {
            "page": {
                "pageOffset": 0,
                "pageSize": count,
                "count": count,
                "hasMore": false
            }
        }
    }))
    .into_response()
}

/// Fixture rows shaped like real task payloads. Extra fields exercise
/// the client's ignore-unknown decoding; the last row has no id at all.
pub fn sample_tasks() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "name": "Prepare onboarding deck",
            "priority": "high",
            "progress": 40,
            "displayOrder": 1,
            "status": "new",
            "tasklist": {"id": 101, "type": "tasklists"},
            "userPermissions": {
                "canEdit": true,
                "canComplete": true,
                "canLogTime": true,
                "canViewEstTime": true,
                "canAddSubtasks": false
            }
        }),
        json!({
            "id": 2,
            "name": "Review quarterly roadmap",
            "status": "reopened",
            "tasklist": {"id": 102, "type": "tasklists"}
        }),
        json!({
            "name": "Orphan row without id",
            "status": "new"
        }),
    ]
}
