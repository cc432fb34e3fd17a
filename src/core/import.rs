//! Spreadsheet (CSV) import: flexible header mapping into item drafts.
//!
//! Column aliases follow the sheets people actually export from other
//! trackers: the name may arrive as "Task Name", "Task", "Name" or
//! "Summary"; dates as "Start Date"/"Created" and "End Date"/"Due Date";
//! Excel serial date numbers are converted from the 1899-12-30 epoch.
//! A file that cannot be parsed aborts the import as a whole.

use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::models::{ItemDraft, ItemStatus, ItemType, Priority};
use crate::utils::date;

const NAME_ALIASES: &[&str] = &["task name", "task", "name", "summary"];
const TYPE_ALIASES: &[&str] = &["type", "item type", "issue type"];
const STATUS_ALIASES: &[&str] = &["status"];
const PRIORITY_ALIASES: &[&str] = &["priority"];
const ASSIGNEE_ALIASES: &[&str] = &["assignee", "assigned to"];
const START_ALIASES: &[&str] = &["start date", "created"];
const END_ALIASES: &[&str] = &["end date", "due date"];
const ESTIMATE_ALIASES: &[&str] = &["estimated hours", "estimate"];
const ACTUAL_ALIASES: &[&str] = &["actual hours", "logged hours"];

fn find_column(headers: &csv::StringRecord, aliases: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| aliases.contains(&h.trim().to_lowercase().as_str()))
}

fn field<'a>(record: &'a csv::StringRecord, idx: Option<usize>) -> &'a str {
    idx.and_then(|i| record.get(i)).unwrap_or("").trim()
}

/// Parse a CSV spreadsheet into item drafts.
///
/// Rows without a name are dropped; unknown status/priority values fall
/// back to pending/medium; a missing end date defaults to start + 7 days.
pub fn parse_spreadsheet(path: &Path) -> AppResult<Vec<ItemDraft>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| AppError::Import(format!("cannot read {}: {}", path.display(), e)))?;

    let headers = reader
        .headers()
        .map_err(|e| AppError::Import(format!("bad header row: {}", e)))?
        .clone();

    let name_col = find_column(&headers, NAME_ALIASES).ok_or_else(|| {
        AppError::Import("no name column found (expected one of: Task Name, Task, Name, Summary)".to_string())
    })?;
    let type_col = find_column(&headers, TYPE_ALIASES);
    let status_col = find_column(&headers, STATUS_ALIASES);
    let priority_col = find_column(&headers, PRIORITY_ALIASES);
    let assignee_col = find_column(&headers, ASSIGNEE_ALIASES);
    let start_col = find_column(&headers, START_ALIASES);
    let end_col = find_column(&headers, END_ALIASES);
    let estimate_col = find_column(&headers, ESTIMATE_ALIASES);
    let actual_col = find_column(&headers, ACTUAL_ALIASES);

    let mut drafts = Vec::new();

    for (line, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| AppError::Import(format!("bad row {}: {}", line + 2, e)))?;

        let name = field(&record, Some(name_col));
        if name.is_empty() {
            continue;
        }

        let item_type = ItemType::from_str_opt(field(&record, type_col)).unwrap_or(ItemType::Task);
        let status =
            ItemStatus::from_str_opt(field(&record, status_col)).unwrap_or(ItemStatus::Pending);
        let priority =
            Priority::from_str_opt(field(&record, priority_col)).unwrap_or(Priority::Medium);

        let start_date = date::normalize_spreadsheet_date(field(&record, start_col))
            .unwrap_or_else(date::today_str);
        let end_date = date::normalize_spreadsheet_date(field(&record, end_col))
            .unwrap_or_else(|| date::plus_days(&start_date, 7));

        drafts.push(ItemDraft {
            name: name.to_string(),
            item_type,
            status,
            priority,
            assignee: field(&record, assignee_col).to_string(),
            start_date,
            end_date,
            estimated_hours: field(&record, estimate_col).parse().unwrap_or(0.0),
            actual_hours: field(&record, actual_col).parse().unwrap_or(0.0),
            jira: None,
        });
    }

    Ok(drafts)
}
