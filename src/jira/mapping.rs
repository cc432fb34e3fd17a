//! Jira issue → work item mapping.
//!
//! The status table is configuration (`jira.status_mapping`): two
//! variants circulate, a substring matcher and an exact matcher, and
//! which one a team considers authoritative differs per installation.

use serde::Deserialize;

use crate::config::{JiraConfig, StatusMapping};
use crate::models::{ItemDraft, ItemStatus, ItemType, JiraLink, Priority};
use crate::utils::date;

#[derive(Debug, Clone, Deserialize)]
pub struct NamedField {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssigneeField {
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraFields {
    #[serde(default)]
    pub summary: String,
    pub issuetype: Option<NamedField>,
    pub status: Option<NamedField>,
    pub priority: Option<NamedField>,
    pub assignee: Option<AssigneeField>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub duedate: Option<String>,
    /// Time-tracking values, in seconds.
    #[serde(default)]
    pub timeoriginalestimate: Option<i64>,
    #[serde(default)]
    pub timespent: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssue {
    pub key: String,
    #[serde(default)]
    pub id: String,
    pub fields: JiraFields,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<JiraIssue>,
}

/// Epic/Story/Sub-task map onto their counterparts; everything else,
/// Bug included, becomes a task.
pub fn map_issue_type(name: &str) -> ItemType {
    match name.to_lowercase().as_str() {
        "epic" => ItemType::Epic,
        "story" => ItemType::Story,
        "sub-task" | "subtask" => ItemType::Subtask,
        _ => ItemType::Task,
    }
}

pub fn map_status(name: &str, mode: StatusMapping) -> ItemStatus {
    match mode {
        StatusMapping::Substring => {
            let lower = name.to_lowercase();
            if lower.contains("done") || lower.contains("closed") || lower.contains("review") {
                ItemStatus::Review
            } else if lower.contains("progress") || lower.contains("development") {
                ItemStatus::InProgress
            } else {
                ItemStatus::Pending
            }
        }
        StatusMapping::Exact => match name {
            "To Do" => ItemStatus::Pending,
            "In Progress" => ItemStatus::InProgress,
            "Done" | "Closed" => ItemStatus::Review,
            _ => ItemStatus::Pending,
        },
    }
}

fn map_priority(priority: Option<&NamedField>) -> Priority {
    priority
        .and_then(|p| Priority::from_str_opt(&p.name))
        .unwrap_or(Priority::Medium)
}

fn seconds_to_hours(seconds: Option<i64>) -> f64 {
    match seconds {
        Some(s) => (s as f64 / 3600.0).round(),
        None => 0.0,
    }
}

/// Build an item draft (with its Jira link) from a fetched issue.
pub fn issue_to_draft(issue: &JiraIssue, cfg: &JiraConfig) -> ItemDraft {
    let issue_type_name = issue
        .fields
        .issuetype
        .as_ref()
        .map(|t| t.name.clone())
        .unwrap_or_default();

    let start_date = issue
        .fields
        .created
        .as_deref()
        .map(date::strip_time)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .unwrap_or_else(date::today_str);

    let end_date = issue
        .fields
        .duedate
        .as_deref()
        .map(date::strip_time)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .unwrap_or_else(|| date::plus_days(&start_date, cfg.default_due_days));

    ItemDraft {
        name: format!("{}: {}", issue.key, issue.fields.summary),
        item_type: map_issue_type(&issue_type_name),
        status: issue
            .fields
            .status
            .as_ref()
            .map(|s| map_status(&s.name, cfg.status_mapping))
            .unwrap_or(ItemStatus::Pending),
        priority: map_priority(issue.fields.priority.as_ref()),
        assignee: issue
            .fields
            .assignee
            .as_ref()
            .map(|a| a.display_name.clone())
            .unwrap_or_default(),
        start_date,
        end_date,
        estimated_hours: seconds_to_hours(issue.fields.timeoriginalestimate),
        actual_hours: seconds_to_hours(issue.fields.timespent),
        jira: Some(JiraLink::synced(
            &cfg.url,
            &issue.key,
            &issue.id,
            &issue_type_name,
        )),
    }
}

/// Internal type → the issue-type name Jira expects on create.
pub fn issue_type_name(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::Epic => "Epic",
        ItemType::Story => "Story",
        ItemType::Task => "Task",
        ItemType::Subtask => "Sub-task",
    }
}

/// Internal priority → Jira priority name.
pub fn priority_name(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "Low",
        Priority::Medium => "Medium",
        Priority::High => "High",
    }
}
