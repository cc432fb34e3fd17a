// src/export/model.rs

use serde::Serialize;

use crate::core::rollup;
use crate::models::Project;

/// Flat row for item exports: one line per work item with its rollups.
#[derive(Serialize, Clone, Debug)]
pub struct ItemExport {
    pub project: String,
    pub id: i64,
    pub name: String,
    pub item_type: String,
    pub level: u8,
    pub status: String,
    pub priority: String,
    pub assignee: String,
    pub start_date: String,
    pub end_date: String,
    pub estimated_hours: f64,
    pub actual_hours: f64,
    pub progress: f64,
    pub jira_key: String,
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "project",
        "id",
        "name",
        "type",
        "level",
        "status",
        "priority",
        "assignee",
        "start_date",
        "end_date",
        "estimated_hours",
        "actual_hours",
        "progress",
        "jira_key",
    ]
}

pub(crate) fn item_to_row(e: &ItemExport) -> Vec<String> {
    vec![
        e.project.clone(),
        e.id.to_string(),
        e.name.clone(),
        e.item_type.clone(),
        e.level.to_string(),
        e.status.clone(),
        e.priority.clone(),
        e.assignee.clone(),
        e.start_date.clone(),
        e.end_date.clone(),
        format!("{}", e.estimated_hours),
        format!("{}", e.actual_hours),
        format!("{:.0}", e.progress),
        e.jira_key.clone(),
    ]
}

/// Flatten projects into export rows, parents before children.
pub fn collect_rows(projects: &[Project]) -> Vec<ItemExport> {
    let mut rows = Vec::new();

    for project in projects {
        for item in &project.items {
            let hours = rollup::compute_rollup_hours(&project.items, item.id);
            rows.push(ItemExport {
                project: project.name.clone(),
                id: item.id,
                name: item.name.clone(),
                item_type: item.item_type.as_str().to_string(),
                level: item.level,
                status: item.status.as_str().to_string(),
                priority: item.priority.as_str().to_string(),
                assignee: item.assignee.clone(),
                start_date: item.start_date.clone(),
                end_date: item.end_date.clone(),
                estimated_hours: hours.estimated,
                actual_hours: hours.actual,
                progress: rollup::compute_progress(&project.items, item.id),
                jira_key: item
                    .jira
                    .as_ref()
                    .map(|j| j.issue_key.clone())
                    .unwrap_or_default(),
            });
        }
    }

    rows
}
