use rtracker::config::{JiraConfig, StatusMapping};
use rtracker::jira::mapping::{JiraIssue, issue_to_draft, map_issue_type, map_status};
use rtracker::models::{ItemStatus, ItemType, Priority};

fn issue(json: serde_json::Value) -> JiraIssue {
    serde_json::from_value(json).expect("valid issue json")
}

fn jira_cfg() -> JiraConfig {
    JiraConfig {
        url: "https://acme.atlassian.net".to_string(),
        connected: true,
        default_project: "ACME".to_string(),
        ..JiraConfig::default()
    }
}

// The contract round trip: Story / In Progress / High maps onto
// story / in-progress / high.
#[test]
fn test_issue_round_trip_story_in_progress_high() {
    let cfg = jira_cfg();
    let issue = issue(serde_json::json!({
        "key": "ACME-101",
        "id": "10001",
        "fields": {
            "summary": "Setup authentication system",
            "issuetype": { "name": "Story" },
            "status": { "name": "In Progress" },
            "priority": { "name": "High" },
            "assignee": { "displayName": "Alice" },
            "created": "2025-10-01T08:30:00.000+0000",
            "duedate": "2025-10-20"
        }
    }));

    let draft = issue_to_draft(&issue, &cfg);

    assert_eq!(draft.item_type, ItemType::Story);
    assert_eq!(draft.status, ItemStatus::InProgress);
    assert_eq!(draft.priority, Priority::High);
    assert_eq!(draft.name, "ACME-101: Setup authentication system");
    assert_eq!(draft.assignee, "Alice");
    assert_eq!(draft.start_date, "2025-10-01");
    assert_eq!(draft.end_date, "2025-10-20");

    let link = draft.jira.expect("link set on import");
    assert_eq!(link.issue_key, "ACME-101");
    assert_eq!(link.issue_url, "https://acme.atlassian.net/browse/ACME-101");
    assert_eq!(link.sync_status, "synced");
}

#[test]
fn test_issue_type_mapping_table() {
    assert_eq!(map_issue_type("Epic"), ItemType::Epic);
    assert_eq!(map_issue_type("Story"), ItemType::Story);
    assert_eq!(map_issue_type("Sub-task"), ItemType::Subtask);
    assert_eq!(map_issue_type("Subtask"), ItemType::Subtask);
    // Everything else lands on task, Bug included.
    assert_eq!(map_issue_type("Bug"), ItemType::Task);
    assert_eq!(map_issue_type("Spike"), ItemType::Task);
}

#[test]
fn test_substring_status_mapping() {
    let m = StatusMapping::Substring;
    assert_eq!(map_status("Done", m), ItemStatus::Review);
    assert_eq!(map_status("Closed", m), ItemStatus::Review);
    assert_eq!(map_status("In Review", m), ItemStatus::Review);
    assert_eq!(map_status("In Progress", m), ItemStatus::InProgress);
    assert_eq!(map_status("In Development", m), ItemStatus::InProgress);
    assert_eq!(map_status("To Do", m), ItemStatus::Pending);
    assert_eq!(map_status("Backlog", m), ItemStatus::Pending);
}

#[test]
fn test_exact_status_mapping() {
    let m = StatusMapping::Exact;
    assert_eq!(map_status("To Do", m), ItemStatus::Pending);
    assert_eq!(map_status("In Progress", m), ItemStatus::InProgress);
    assert_eq!(map_status("Done", m), ItemStatus::Review);
    assert_eq!(map_status("Closed", m), ItemStatus::Review);
    // Unknown names default to pending under the exact table, even when
    // the substring table would have matched them.
    assert_eq!(map_status("In Development", m), ItemStatus::Pending);
    assert_eq!(map_status("Code Review", m), ItemStatus::Pending);
}

#[test]
fn test_time_tracking_seconds_become_rounded_hours() {
    let cfg = jira_cfg();
    let issue = issue(serde_json::json!({
        "key": "ACME-7",
        "id": "7",
        "fields": {
            "summary": "Estimated work",
            "issuetype": { "name": "Task" },
            "status": { "name": "To Do" },
            "timeoriginalestimate": 9000,
            "timespent": 5400
        }
    }));

    let draft = issue_to_draft(&issue, &cfg);
    // 9000 s = 2.5 h → 3 (rounded); 5400 s = 1.5 h → 2.
    assert_eq!(draft.estimated_hours, 3.0);
    assert_eq!(draft.actual_hours, 2.0);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let mut cfg = jira_cfg();
    cfg.default_due_days = 7;

    let issue = issue(serde_json::json!({
        "key": "ACME-8",
        "id": "8",
        "fields": {
            "summary": "Bare issue",
            "created": "2025-10-02"
        }
    }));

    let draft = issue_to_draft(&issue, &cfg);

    assert_eq!(draft.item_type, ItemType::Task);
    assert_eq!(draft.status, ItemStatus::Pending);
    assert_eq!(draft.priority, Priority::Medium);
    assert_eq!(draft.estimated_hours, 0.0);
    assert_eq!(draft.actual_hours, 0.0);
    assert_eq!(draft.start_date, "2025-10-02");
    // Missing due date defaults to created + default_due_days.
    assert_eq!(draft.end_date, "2025-10-09");
}

#[test]
fn test_due_day_offset_is_configurable() {
    let mut cfg = jira_cfg();
    cfg.default_due_days = 30;

    let issue = issue(serde_json::json!({
        "key": "ACME-9",
        "id": "9",
        "fields": {
            "summary": "Server-variant offset",
            "created": "2025-10-01"
        }
    }));

    let draft = issue_to_draft(&issue, &cfg);
    assert_eq!(draft.end_date, "2025-10-31");
}
