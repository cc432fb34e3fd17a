mod common;
use common::{chain_project, draft};

use rtracker::core::hierarchy::{add_item, delete_item, import_batch, update_status};
use rtracker::errors::AppError;
use rtracker::models::{ItemStatus, ItemType, Project};

// After adding X under P, the forest invariant must hold in both
// directions: P.children contains X and X.parent_id is P.
#[test]
fn test_add_item_keeps_bidirectional_consistency() {
    let mut project = Project::new("Test", "");

    let epic = add_item(&mut project, draft("Epic", ItemType::Epic), None).unwrap();
    let story = add_item(&mut project, draft("Story", ItemType::Story), Some(epic)).unwrap();

    let epic_item = project.item(epic).unwrap();
    let story_item = project.item(story).unwrap();

    assert!(epic_item.children.contains(&story));
    assert_eq!(story_item.parent_id, Some(epic));
    assert_eq!(epic_item.level, 1);
    assert_eq!(story_item.level, 2);
}

#[test]
fn test_add_item_rejects_wrong_parent_type() {
    let mut project = Project::new("Test", "");

    let epic = add_item(&mut project, draft("Epic", ItemType::Epic), None).unwrap();

    // A task's parent must be a story, not an epic.
    let result = add_item(&mut project, draft("Task", ItemType::Task), Some(epic));
    assert!(matches!(result, Err(AppError::Validation(_))));

    // Nothing must have been appended by the failed call.
    assert_eq!(project.items.len(), 1);
    assert!(project.item(epic).unwrap().children.is_empty());
}

#[test]
fn test_add_item_rejects_non_epic_root() {
    let mut project = Project::new("Test", "");

    let result = add_item(&mut project, draft("Story", ItemType::Story), None);
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn test_add_item_rejects_missing_parent() {
    let mut project = Project::new("Test", "");

    let result = add_item(&mut project, draft("Story", ItemType::Story), Some(99));
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn test_add_item_rejects_nested_epic() {
    let mut project = Project::new("Test", "");
    let epic = add_item(&mut project, draft("Epic", ItemType::Epic), None).unwrap();

    let result = add_item(&mut project, draft("Epic 2", ItemType::Epic), Some(epic));
    assert!(matches!(result, Err(AppError::Validation(_))));
}

// Deleting the story from E→S→T→ST must remove S, T and ST, and E must
// no longer reference S.
#[test]
fn test_delete_item_removes_descendant_closure() {
    let (mut project, epic, story, task, subtask) = chain_project();

    let removed = delete_item(&mut project, story);
    assert_eq!(removed, 3);

    assert!(project.item(story).is_none());
    assert!(project.item(task).is_none());
    assert!(project.item(subtask).is_none());

    let epic_item = project.item(epic).unwrap();
    assert!(!epic_item.children.contains(&story));
}

#[test]
fn test_delete_item_unknown_id_is_noop() {
    let (mut project, ..) = chain_project();
    let before = project.items.len();

    assert_eq!(delete_item(&mut project, 999), 0);
    assert_eq!(project.items.len(), before);
}

#[test]
fn test_update_status_does_not_cascade() {
    let (mut project, epic, story, ..) = chain_project();

    update_status(&mut project, story, ItemStatus::Review).unwrap();

    assert_eq!(project.item(story).unwrap().status, ItemStatus::Review);
    // Parent status is untouched; its progress is computed, not stored.
    assert_eq!(project.item(epic).unwrap().status, ItemStatus::Pending);
}

#[test]
fn test_update_status_unknown_item() {
    let (mut project, ..) = chain_project();
    let result = update_status(&mut project, 999, ItemStatus::Review);
    assert!(matches!(result, Err(AppError::ItemNotFound(999))));
}

// Importing the same batch twice duplicates every item. That is the
// documented behavior: imports are additive and never deduplicated.
#[test]
fn test_import_batch_is_not_idempotent() {
    let mut project = Project::new("Test", "");

    let batch = vec![
        draft("Imported A", ItemType::Task),
        draft("Imported B", ItemType::Task),
    ];

    let first = import_batch(&mut project, batch.clone());
    let second = import_batch(&mut project, batch);

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
    assert_eq!(project.items.len(), 4);

    let names: Vec<&str> = project.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Imported A", "Imported B", "Imported A", "Imported B"]
    );

    // Ids stay unique even across duplicated imports.
    let mut ids: Vec<i64> = project.items.iter().map(|i| i.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn test_import_batch_pre_levels_by_type() {
    let mut project = Project::new("Test", "");

    import_batch(
        &mut project,
        vec![
            draft("An epic", ItemType::Epic),
            draft("A story", ItemType::Story),
            draft("A subtask", ItemType::Subtask),
        ],
    );

    let levels: Vec<u8> = project.items.iter().map(|i| i.level).collect();
    assert_eq!(levels, vec![1, 2, 4]);
    assert!(project.items.iter().all(|i| i.parent_id.is_none()));
}
