//! Domain records decoded from API responses.
//!
//! # Design
//! Decode-only serde records. `Task` keeps just the id; every other wire
//! field on a task row is ignored, and rows may omit the id entirely.
//! The list records (`TaskList`, `UserPermissions`, `Meta`, `Page`) are
//! decoded passively when present; nothing in the crate acts on them.

use serde::Deserialize;

/// A single task row. Only the id survives decoding; rows without one
/// decode to `id: None` rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
}

/// Top-level success envelope for task listings.
#[derive(Debug, Clone, Deserialize)]
pub struct TasksEnvelope {
    pub tasks: Vec<Task>,
    pub meta: Option<Meta>,
}

/// The list a task belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskList {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TaskListKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskListKind {
    Tasklists,
    Users,
}

/// Per-task capability flags reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissions {
    pub can_edit: bool,
    pub can_complete: bool,
    pub can_log_time: bool,
    pub can_view_est_time: bool,
    pub can_add_subtasks: bool,
}

/// Pagination wrapper on list responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Meta {
    pub page: Page,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub page_offset: i64,
    pub page_size: i64,
    pub count: i64,
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_task_list_decodes() {
        let envelope: TasksEnvelope = serde_json::from_str(r#"{"tasks":[]}"#).unwrap();
        assert!(envelope.tasks.is_empty());
        assert!(envelope.meta.is_none());
    }

    #[test]
    fn task_ids_decode_in_order() {
        let envelope: TasksEnvelope =
            serde_json::from_str(r#"{"tasks":[{"id":1},{"id":2}]}"#).unwrap();
        assert_eq!(
            envelope.tasks,
            vec![Task { id: Some(1) }, Task { id: Some(2) }]
        );
    }

    #[test]
    fn rich_task_rows_decode_to_bare_ids() {
        let raw = r#"{
            "tasks": [{
                "id": 5,
                "name": "Paint the fence",
                "priority": "high",
                "progress": 40,
                "status": "new",
                "tasklist": {"id": 101, "type": "tasklists"},
                "userPermissions": {
                    "canEdit": true,
                    "canComplete": true,
                    "canLogTime": false,
                    "canViewEstTime": true,
                    "canAddSubtasks": false
                }
            }]
        }"#;
        let envelope: TasksEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.tasks, vec![Task { id: Some(5) }]);
    }

    #[test]
    fn task_without_id_decodes_to_none() {
        let envelope: TasksEnvelope =
            serde_json::from_str(r#"{"tasks":[{"name":"Orphan row"}]}"#).unwrap();
        assert_eq!(envelope.tasks, vec![Task { id: None }]);

        let null_id: TasksEnvelope = serde_json::from_str(r#"{"tasks":[{"id":null}]}"#).unwrap();
        assert_eq!(null_id.tasks, vec![Task { id: None }]);
    }

    #[test]
    fn missing_tasks_key_fails() {
        let result: Result<TasksEnvelope, _> = serde_json::from_str(r#"{"items":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn envelope_with_meta_decodes() {
        let raw = r#"{
            "tasks": [{"id": 1}],
            "meta": {"page": {"pageOffset": 0, "pageSize": 50, "count": 1, "hasMore": false}}
        }"#;
        let envelope: TasksEnvelope = serde_json::from_str(raw).unwrap();
        let meta = envelope.meta.unwrap();
        assert_eq!(
            meta.page,
            Page {
                page_offset: 0,
                page_size: 50,
                count: 1,
                has_more: false,
            }
        );
    }

    #[test]
    fn tasklist_kind_maps_wire_type_field() {
        let list: TaskList = serde_json::from_str(r#"{"id": 101, "type": "tasklists"}"#).unwrap();
        assert_eq!(list.kind, TaskListKind::Tasklists);

        let list: TaskList = serde_json::from_str(r#"{"id": 7, "type": "users"}"#).unwrap();
        assert_eq!(list.kind, TaskListKind::Users);

        let result: Result<TaskList, _> = serde_json::from_str(r#"{"id": 7, "type": "boards"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn permissions_decode_from_camel_case() {
        let raw = r#"{
            "canEdit": true,
            "canComplete": false,
            "canLogTime": true,
            "canViewEstTime": false,
            "canAddSubtasks": true
        }"#;
        let permissions: UserPermissions = serde_json::from_str(raw).unwrap();
        assert!(permissions.can_edit);
        assert!(!permissions.can_complete);
        assert!(permissions.can_log_time);
        assert!(!permissions.can_view_est_time);
        assert!(permissions.can_add_subtasks);
    }
}
