mod common;
use common::temp_out;

use std::fs;
use std::path::Path;

use rtracker::core::import::parse_spreadsheet;
use rtracker::errors::AppError;
use rtracker::models::{ItemStatus, ItemType, Priority};
use rtracker::utils::date::excel_serial_to_date;

fn write_csv(name: &str, content: &str) -> String {
    let path = temp_out(name, "csv");
    fs::write(&path, content).expect("write csv");
    path
}

#[test]
fn test_parse_spreadsheet_with_standard_headers() {
    let path = write_csv(
        "import_standard",
        "Task Name,Status,Priority,Assignee,Start Date,End Date\n\
         Research & Planning,review,high,John,2025-10-01,2025-10-15\n\
         Design Mockups,in-progress,high,Sarah,2025-10-16,2025-11-15\n\
         Development,pending,medium,Mike,2025-11-16,2025-12-20\n",
    );

    let drafts = parse_spreadsheet(Path::new(&path)).unwrap();
    assert_eq!(drafts.len(), 3);

    assert_eq!(drafts[0].name, "Research & Planning");
    assert_eq!(drafts[0].status, ItemStatus::Review);
    assert_eq!(drafts[0].priority, Priority::High);
    assert_eq!(drafts[0].assignee, "John");
    assert_eq!(drafts[0].start_date, "2025-10-01");
    assert_eq!(drafts[0].end_date, "2025-10-15");

    // No Type column → everything imports as a task.
    assert!(drafts.iter().all(|d| d.item_type == ItemType::Task));
}

// Header aliases: Summary for the name, Assigned To, Created, Due Date.
#[test]
fn test_parse_spreadsheet_with_aliased_headers() {
    let path = write_csv(
        "import_aliases",
        "Summary,Status,Assigned To,Created,Due Date,Type,Estimated Hours\n\
         Setup CI,In Progress,Bob,2025-09-01,2025-09-10,story,12\n",
    );

    let drafts = parse_spreadsheet(Path::new(&path)).unwrap();
    assert_eq!(drafts.len(), 1);

    assert_eq!(drafts[0].name, "Setup CI");
    assert_eq!(drafts[0].status, ItemStatus::InProgress);
    assert_eq!(drafts[0].assignee, "Bob");
    assert_eq!(drafts[0].item_type, ItemType::Story);
    assert_eq!(drafts[0].estimated_hours, 12.0);
}

#[test]
fn test_rows_without_a_name_are_dropped() {
    let path = write_csv(
        "import_empty_names",
        "Name,Status\nReal task,pending\n,review\n   ,pending\n",
    );

    let drafts = parse_spreadsheet(Path::new(&path)).unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].name, "Real task");
}

#[test]
fn test_unknown_status_and_priority_fall_back() {
    let path = write_csv(
        "import_fallbacks",
        "Task,Status,Priority\nWeird row,Blocked,Critical\n",
    );

    let drafts = parse_spreadsheet(Path::new(&path)).unwrap();
    assert_eq!(drafts[0].status, ItemStatus::Pending);
    assert_eq!(drafts[0].priority, Priority::Medium);
}

// Excel exports dates as serial day numbers; 45992 is 2025-12-01.
#[test]
fn test_excel_serial_dates_are_converted() {
    assert_eq!(
        excel_serial_to_date(45992.0).unwrap().to_string(),
        "2025-12-01"
    );
    // Serial 1 is the day after the 1899-12-30 epoch.
    assert_eq!(excel_serial_to_date(1.0).unwrap().to_string(), "1899-12-31");

    let path = write_csv(
        "import_serials",
        "Task,Start Date,End Date\nSerial dates,45992,45999\n",
    );

    let drafts = parse_spreadsheet(Path::new(&path)).unwrap();
    assert_eq!(drafts[0].start_date, "2025-12-01");
    assert_eq!(drafts[0].end_date, "2025-12-08");
}

#[test]
fn test_missing_end_date_defaults_to_start_plus_week() {
    let path = write_csv(
        "import_no_end",
        "Task,Start Date\nOpen ended,2025-10-01\n",
    );

    let drafts = parse_spreadsheet(Path::new(&path)).unwrap();
    assert_eq!(drafts[0].start_date, "2025-10-01");
    assert_eq!(drafts[0].end_date, "2025-10-08");
}

// A sheet without any recognizable name column aborts the import whole.
#[test]
fn test_missing_name_column_aborts_import() {
    let path = write_csv("import_no_name_col", "Foo,Bar\n1,2\n");

    let result = parse_spreadsheet(Path::new(&path));
    assert!(matches!(result, Err(AppError::Import(_))));
}

#[test]
fn test_unreadable_file_aborts_import() {
    let result = parse_spreadsheet(Path::new("/nonexistent/definitely_missing.csv"));
    assert!(matches!(result, Err(AppError::Import(_))));
}
