//! Migration from the legacy flat-task project schema.
//!
//! Early data files carried a flat `tasks` array instead of `items`.
//! Loading such a project converts every flat task into a level-1 epic
//! item (the only type the hierarchy admits at the root), preserving
//! name, status, priority, assignee, dates and comments.

use serde_json::Value;

use crate::models::{
    Comment, ItemStatus, ItemType, Priority, Project, ProjectStatus, WorkItem,
};

/// True when the raw project JSON uses the legacy flat `tasks` key.
pub fn is_legacy_project(raw: &Value) -> bool {
    raw.get("tasks").is_some() && raw.get("items").is_none()
}

fn str_field(raw: &Value, key: &str) -> String {
    raw.get(key).and_then(Value::as_str).unwrap_or("").to_string()
}

fn legacy_task_to_item(raw: &Value, fallback_id: i64) -> WorkItem {
    let status = raw
        .get("status")
        .and_then(Value::as_str)
        .and_then(ItemStatus::from_str_opt)
        .unwrap_or(ItemStatus::Pending);
    let priority = raw
        .get("priority")
        .and_then(Value::as_str)
        .and_then(Priority::from_str_opt)
        .unwrap_or(Priority::Medium);

    let comments = raw
        .get("comments")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .enumerate()
                .map(|(i, c)| Comment {
                    id: c.get("id").and_then(Value::as_i64).unwrap_or(i as i64 + 1),
                    text: str_field(c, "text"),
                    author: str_field(c, "author"),
                    timestamp: str_field(c, "timestamp"),
                    posted_to_jira: c
                        .get("postedToJira")
                        .and_then(Value::as_bool)
                        .unwrap_or(false),
                })
                .collect()
        })
        .unwrap_or_default();

    WorkItem {
        id: raw.get("id").and_then(Value::as_i64).unwrap_or(fallback_id),
        name: str_field(raw, "name"),
        item_type: ItemType::Epic,
        level: 1,
        parent_id: None,
        children: Vec::new(),
        status,
        priority,
        assignee: str_field(raw, "assignee"),
        start_date: str_field(raw, "startDate"),
        end_date: str_field(raw, "endDate"),
        estimated_hours: 0.0,
        actual_hours: 0.0,
        comments,
        jira: serde_json::from_value(raw.get("jira").cloned().unwrap_or(Value::Null)).ok(),
    }
}

/// Convert a raw project JSON value into a `Project`, transparently
/// migrating the legacy flat-task schema when present.
pub fn project_from_value(raw: Value) -> serde_json::Result<Project> {
    if !is_legacy_project(&raw) {
        return serde_json::from_value(raw);
    }

    let items: Vec<WorkItem> = raw
        .get("tasks")
        .and_then(Value::as_array)
        .map(|tasks| {
            tasks
                .iter()
                .enumerate()
                .map(|(i, t)| legacy_task_to_item(t, i as i64 + 1))
                .collect()
        })
        .unwrap_or_default();

    let status = raw
        .get("status")
        .and_then(Value::as_str)
        .and_then(ProjectStatus::from_str_opt)
        .unwrap_or(ProjectStatus::Planning);

    Ok(Project {
        id: raw.get("id").and_then(Value::as_i64).unwrap_or(0),
        name: str_field(&raw, "name"),
        description: str_field(&raw, "description"),
        start_date: str_field(&raw, "startDate"),
        end_date: str_field(&raw, "endDate"),
        status,
        items,
    })
}
