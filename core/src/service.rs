//! Task operations built on the generic client.
//!
//! # Design
//! `TaskService` is a thin layer: each operation builds its descriptor
//! from injected configuration, hands it to `HttpClient::execute`, and
//! republishes the result unchanged. No recovery, no caching; errors
//! reach the caller exactly as the pipeline classified them.

use crate::client::HttpClient;
use crate::error::ApiError;
use crate::http::{BasicCredentials, Headers, HttpMethod};
use crate::request::ApiRequest;
use crate::types::{Task, TasksEnvelope};

const ALL_TASKS_PATH: &str = "/projects/api/v3/tasks.json";

/// Where the task API lives and how to authenticate against it.
///
/// Credentials are optional; without them requests go out anonymous and
/// the server decides what that is worth.
#[derive(Debug, Clone)]
pub struct TaskServiceConfig {
    base_url: String,
    credentials: Option<BasicCredentials>,
}

impl TaskServiceConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, credentials: BasicCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}

/// Descriptor for listing every task.
#[derive(Debug, Clone)]
pub struct GetAllTasksRequest {
    url: String,
    headers: Headers,
}

impl GetAllTasksRequest {
    pub fn new(config: &TaskServiceConfig) -> Self {
        Self {
            url: format!("{}{}", config.base_url, ALL_TASKS_PATH),
            headers: Headers::json(config.credentials.as_ref()),
        }
    }
}

impl ApiRequest for GetAllTasksRequest {
    type Model = Vec<Task>;

    fn url(&self) -> String {
        self.url.clone()
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn headers(&self) -> Option<&Headers> {
        Some(&self.headers)
    }

    fn decode(&self, body: &[u8]) -> Result<Vec<Task>, ApiError> {
        serde_json::from_slice::<TasksEnvelope>(body)
            .map(|envelope| envelope.tasks)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Typed task API on top of `HttpClient`.
#[derive(Clone)]
pub struct TaskService {
    client: HttpClient,
    config: TaskServiceConfig,
}

impl TaskService {
    pub fn new(client: HttpClient, config: TaskServiceConfig) -> Self {
        Self { client, config }
    }

    /// Fetch every task visible to the configured account.
    pub async fn get_all_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.client
            .execute(GetAllTasksRequest::new(&self.config))
            .await
    }

    // TODO: add_task(POST to the same endpoint) once the write-side
    // payload shape is settled.
}
