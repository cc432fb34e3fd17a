#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

use rtracker::models::{ItemDraft, ItemStatus, ItemType, Project};

pub fn rtr() -> Command {
    cargo_bin_cmd!("rtracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and create a project with one epic, useful for many tests
pub fn init_db_with_project(db_path: &str) {
    rtr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rtr()
        .args([
            "--db",
            db_path,
            "--test",
            "new",
            "Website Redesign",
            "--description",
            "Complete overhaul of company website",
            "--start",
            "2025-10-01",
            "--end",
            "2025-12-31",
            "--status",
            "in-progress",
        ])
        .assert()
        .success();

    rtr()
        .args([
            "--db",
            db_path,
            "--test",
            "add",
            "--project",
            "1",
            "Research & Planning",
            "--type",
            "epic",
        ])
        .assert()
        .success();
}

/// A draft with sensible defaults for engine-level tests.
pub fn draft(name: &str, item_type: ItemType) -> ItemDraft {
    ItemDraft::new(name, item_type)
}

/// Build an in-memory project with an epic→story→task→subtask chain.
/// Returns (project, epic_id, story_id, task_id, subtask_id).
pub fn chain_project() -> (Project, i64, i64, i64, i64) {
    use rtracker::core::hierarchy::add_item;

    let mut project = Project::new("Test", "");
    let epic = add_item(&mut project, draft("Epic", ItemType::Epic), None).unwrap();
    let story = add_item(&mut project, draft("Story", ItemType::Story), Some(epic)).unwrap();
    let task = add_item(&mut project, draft("Task", ItemType::Task), Some(story)).unwrap();
    let subtask = add_item(&mut project, draft("Subtask", ItemType::Subtask), Some(task)).unwrap();
    (project, epic, story, task, subtask)
}

/// Shorthand for a draft with a given status.
pub fn draft_with_status(name: &str, item_type: ItemType, status: ItemStatus) -> ItemDraft {
    let mut d = ItemDraft::new(name, item_type);
    d.status = status;
    d
}

/// Shorthand for a draft with hours set.
pub fn draft_with_hours(name: &str, item_type: ItemType, estimated: f64, actual: f64) -> ItemDraft {
    let mut d = ItemDraft::new(name, item_type);
    d.estimated_hours = estimated;
    d.actual_hours = actual;
    d
}
