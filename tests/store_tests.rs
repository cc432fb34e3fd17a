mod common;
use common::{chain_project, setup_test_db, temp_out};

use std::fs;

use rtracker::models::{ItemStatus, ItemType, Priority, Project, ProjectStatus};
use rtracker::store::Store;
use rtracker::store::jsonfile::JsonFileStore;
use rtracker::store::sqlite::SqliteStore;

fn sample_project() -> Project {
    let (project, ..) = chain_project();
    project
}

#[test]
fn test_sqlite_store_crud_round_trip() {
    let db_path = setup_test_db("store_sqlite_crud");
    let mut store = SqliteStore::open(&db_path).unwrap();

    assert!(store.load_projects().unwrap().is_empty());

    let created = store.create_project(&sample_project()).unwrap();
    assert_eq!(created.id, 1);

    let mut loaded = store.load_projects().unwrap();
    assert_eq!(loaded.len(), 1);
    let mut project = loaded.remove(0);
    assert_eq!(project.name, "Test");
    assert_eq!(project.items.len(), 4);
    assert_eq!(project.item(2).unwrap().item_type, ItemType::Story);

    // Update survives a reload, items included.
    project.status = ProjectStatus::Completed;
    project.item_mut(4).unwrap().status = ItemStatus::Review;
    store.update_project(&project).unwrap();

    let reloaded = &store.load_projects().unwrap()[0];
    assert_eq!(reloaded.status, ProjectStatus::Completed);
    assert_eq!(reloaded.item(4).unwrap().status, ItemStatus::Review);

    // Delete is idempotent.
    store.delete_project(project.id).unwrap();
    store.delete_project(project.id).unwrap();
    assert!(store.load_projects().unwrap().is_empty());
}

// An UPDATE on an id that does not exist affects zero rows and reports
// success; that is this backend's documented contract.
#[test]
fn test_sqlite_update_of_absent_id_is_silent() {
    let db_path = setup_test_db("store_sqlite_absent");
    let mut store = SqliteStore::open(&db_path).unwrap();

    let mut ghost = sample_project();
    ghost.id = 42;
    store.update_project(&ghost).unwrap();

    assert!(store.load_projects().unwrap().is_empty());
}

#[test]
fn test_sqlite_replace_all_preserves_ids() {
    let db_path = setup_test_db("store_sqlite_replace");
    let mut store = SqliteStore::open(&db_path).unwrap();

    store.create_project(&sample_project()).unwrap();

    let mut a = sample_project();
    a.id = 7;
    a.name = "Seven".to_string();
    let mut b = sample_project();
    b.id = 9;
    b.name = "Nine".to_string();

    store.replace_all(&[a, b]).unwrap();

    let loaded = store.load_projects().unwrap();
    assert_eq!(loaded.len(), 2);
    let mut ids: Vec<i64> = loaded.iter().map(|p| p.id).collect();
    ids.sort();
    assert_eq!(ids, vec![7, 9]);
}

#[test]
fn test_json_store_crud_round_trip() {
    let path = temp_out("store_json_crud", "json");
    let mut store = JsonFileStore::open(&path).unwrap();

    assert!(store.load_projects().unwrap().is_empty());

    let created = store.create_project(&sample_project()).unwrap();
    assert_eq!(created.id, 1);

    // Upsert semantics: updating an absent id creates it.
    let mut other = sample_project();
    other.id = 5;
    other.name = "Upserted".to_string();
    store.update_project(&other).unwrap();

    let loaded = store.load_projects().unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(loaded.iter().any(|p| p.name == "Upserted"));

    store.delete_project(5).unwrap();
    store.delete_project(5).unwrap();
    assert_eq!(store.load_projects().unwrap().len(), 1);
}

#[test]
fn test_json_store_rejects_id_collision_on_create() {
    let path = temp_out("store_json_collision", "json");
    let mut store = JsonFileStore::open(&path).unwrap();

    let created = store.create_project(&sample_project()).unwrap();

    let mut clash = sample_project();
    clash.id = created.id;
    assert!(store.create_project(&clash).is_err());
}

// Documents written by the flat-task versions carry `tasks` instead of
// `items`; loading migrates every flat task into a level-1 epic.
#[test]
fn test_json_store_migrates_legacy_flat_tasks() {
    let path = temp_out("store_json_legacy", "json");
    fs::write(
        &path,
        r#"{
  "projects": [
    {
      "id": 1,
      "name": "Website Redesign",
      "description": "Complete overhaul",
      "startDate": "2025-10-01",
      "endDate": "2025-12-31",
      "status": "in-progress",
      "tasks": [
        {
          "id": 1,
          "name": "Research & Planning",
          "status": "review",
          "priority": "high",
          "startDate": "2025-10-01",
          "endDate": "2025-10-15",
          "assignee": "John",
          "comments": [],
          "jira": null
        },
        {
          "id": 2,
          "name": "Design Mockups",
          "status": "in-progress",
          "priority": "high",
          "startDate": "2025-10-16",
          "endDate": "2025-11-15",
          "assignee": "Sarah",
          "comments": [{"id": 1, "text": "looks good", "author": "Mike", "timestamp": "2025-10-20T10:00:00Z", "postedToJira": false}],
          "jira": null
        }
      ]
    }
  ]
}"#,
    )
    .unwrap();

    let mut store = JsonFileStore::open(&path).unwrap();
    let projects = store.load_projects().unwrap();
    assert_eq!(projects.len(), 1);

    let project = &projects[0];
    assert_eq!(project.status, ProjectStatus::InProgress);
    assert_eq!(project.items.len(), 2);

    let first = project.item(1).unwrap();
    assert_eq!(first.item_type, ItemType::Epic);
    assert_eq!(first.level, 1);
    assert_eq!(first.parent_id, None);
    assert_eq!(first.status, ItemStatus::Review);
    assert_eq!(first.priority, Priority::High);
    assert_eq!(first.assignee, "John");

    let second = project.item(2).unwrap();
    assert_eq!(second.comments.len(), 1);
    assert_eq!(second.comments[0].author, "Mike");
}
