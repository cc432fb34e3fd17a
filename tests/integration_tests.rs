mod common;
use common::{init_db_with_project, rtr, setup_test_db, temp_out};

use predicates::prelude::*;
use std::fs;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rtr()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialization completed"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_new_and_projects_listing() {
    let db_path = setup_test_db("cli_projects");
    init_db_with_project(&db_path);

    rtr()
        .args(["--db", &db_path, "--test", "projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Website Redesign"))
        .stdout(predicate::str::contains("in-progress"));
}

#[test]
fn test_add_chain_and_show_tree() {
    let db_path = setup_test_db("cli_add_chain");
    init_db_with_project(&db_path);

    // Epic #1 exists; nest story → task under it.
    rtr()
        .args([
            "--db", &db_path, "--test", "add", "--project", "1", "User interviews",
            "--type", "story", "--parent", "1",
        ])
        .assert()
        .success();

    rtr()
        .args([
            "--db", &db_path, "--test", "add", "--project", "1", "Draft questions",
            "--type", "task", "--parent", "2", "--status", "review",
        ])
        .assert()
        .success();

    rtr()
        .args(["--db", &db_path, "--test", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User interviews"))
        .stdout(predicate::str::contains("Draft questions"));
}

#[test]
fn test_add_rejects_wrong_parent_type() {
    let db_path = setup_test_db("cli_add_invalid");
    init_db_with_project(&db_path);

    // A subtask directly under an epic violates the hierarchy.
    rtr()
        .args([
            "--db", &db_path, "--test", "add", "--project", "1", "Misplaced",
            "--type", "subtask", "--parent", "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_status_update_rolls_up_to_the_root() {
    let db_path = setup_test_db("cli_status_rollup");
    init_db_with_project(&db_path);

    rtr()
        .args([
            "--db", &db_path, "--test", "add", "--project", "1", "Only story",
            "--type", "story", "--parent", "1",
        ])
        .assert()
        .success();

    rtr()
        .args(["--db", &db_path, "--test", "status", "--project", "1", "2", "review"])
        .assert()
        .success();

    // The single story leaf at 100 pulls the epic rollup to 100.
    rtr()
        .args(["--db", &db_path, "--test", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100%"));
}

#[test]
fn test_del_subtree_with_confirmation() {
    let db_path = setup_test_db("cli_del");
    init_db_with_project(&db_path);

    rtr()
        .args([
            "--db", &db_path, "--test", "add", "--project", "1", "Doomed story",
            "--type", "story", "--parent", "1",
        ])
        .assert()
        .success();

    rtr()
        .args(["--db", &db_path, "--test", "del", "--project", "1", "2"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 item(s)"));

    rtr()
        .args(["--db", &db_path, "--test", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Doomed story").not());
}

#[test]
fn test_csv_import_flow() {
    let db_path = setup_test_db("cli_import");
    init_db_with_project(&db_path);

    let csv_path = temp_out("cli_import", "csv");
    fs::write(
        &csv_path,
        "Task Name,Status,Priority,Assignee\nImported one,pending,low,Ann\nImported two,review,high,Ben\n",
    )
    .unwrap();

    rtr()
        .args([
            "--db", &db_path, "--test", "import", "--project", "1", &csv_path, "-y",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully imported 2 item(s)!"));

    rtr()
        .args(["--db", &db_path, "--test", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported one"))
        .stdout(predicate::str::contains("Imported two"));
}

#[test]
fn test_backup_and_restore_round_trip() {
    let db_path = setup_test_db("cli_backup");
    init_db_with_project(&db_path);

    let backup_path = temp_out("cli_backup", "json");
    rtr()
        .args(["--db", &db_path, "--test", "export", "--file", &backup_path])
        .assert()
        .success();

    // Restore into a brand-new database.
    let db2 = setup_test_db("cli_backup_restore");
    rtr()
        .args(["--db", &db2, "--test", "init"])
        .assert()
        .success();

    rtr()
        .args(["--db", &db2, "--test", "restore", "--file", &backup_path, "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data restored successfully!"));

    rtr()
        .args(["--db", &db2, "--test", "projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Website Redesign"));
}

#[test]
fn test_csv_report_export() {
    let db_path = setup_test_db("cli_report");
    init_db_with_project(&db_path);

    let out = temp_out("cli_report", "csv");
    rtr()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--report",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("project,id,name,type,level,status"));
    assert!(content.contains("Research & Planning"));
}

#[test]
fn test_share_link_round_trip_via_cli() {
    let db_path = setup_test_db("cli_share");
    init_db_with_project(&db_path);

    let output = rtr()
        .args(["--db", &db_path, "--test", "share", "--make"])
        .output()
        .expect("run share --make");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let link = stdout
        .lines()
        .find(|l| l.contains("?share="))
        .expect("share link in output")
        .trim()
        .to_string();

    // Import the link into an empty database.
    let db2 = setup_test_db("cli_share_import");
    rtr()
        .args(["--db", &db2, "--test", "init"])
        .assert()
        .success();

    rtr()
        .args(["--db", &db2, "--test", "share", "--from", &link, "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shared data imported successfully!"));

    rtr()
        .args(["--db", &db2, "--test", "projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Website Redesign"));
}

#[test]
fn test_stats_counts_items() {
    let db_path = setup_test_db("cli_stats");
    init_db_with_project(&db_path);

    rtr()
        .args(["--db", &db_path, "--test", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Projects:     1"))
        .stdout(predicate::str::contains("Total items:  1"));
}

#[test]
fn test_clear_wipes_all_projects() {
    let db_path = setup_test_db("cli_clear");
    init_db_with_project(&db_path);

    rtr()
        .args(["--db", &db_path, "--test", "clear", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data cleared."));

    rtr()
        .args(["--db", &db_path, "--test", "projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects yet"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_project(&db_path);

    rtr()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("item_add"))
        .stdout(predicate::str::contains("project_create"));
}
