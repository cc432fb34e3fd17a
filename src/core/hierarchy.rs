//! Work-item forest mutations: insert, subtree delete, status updates,
//! comments, batch import. All operations are synchronous over the
//! in-memory project snapshot; a validation failure mutates nothing.

use std::collections::HashSet;

use crate::errors::{AppError, AppResult};
use crate::models::{Comment, ItemDraft, ItemStatus, Project, WorkItem};

/// Next free item id within a project (ids are project-local).
pub fn next_item_id(project: &Project) -> i64 {
    project.items.iter().map(|i| i.id).max().unwrap_or(0) + 1
}

/// Insert a new item, optionally under `parent_id`.
///
/// The parent must exist in the same project and its type must match the
/// strict chain (story under epic, task under story, subtask under task);
/// a parentless item must be an epic. Returns the assigned id.
pub fn add_item(project: &mut Project, draft: ItemDraft, parent_id: Option<i64>) -> AppResult<i64> {
    let level = match parent_id {
        Some(pid) => {
            let parent = project
                .item(pid)
                .ok_or_else(|| AppError::Validation(format!("parent item {} does not exist", pid)))?;
            let required = draft.item_type.required_parent().ok_or_else(|| {
                AppError::Validation("an epic cannot be nested under another item".to_string())
            })?;
            if parent.item_type != required {
                return Err(AppError::Validation(format!(
                    "a {} must be nested under a {}; parent {} is a {}",
                    draft.item_type.as_str(),
                    required.as_str(),
                    pid,
                    parent.item_type.as_str()
                )));
            }
            parent.level + 1
        }
        None => {
            if draft.item_type.required_parent().is_some() {
                return Err(AppError::Validation(format!(
                    "a {} requires a parent; only epics can be root items",
                    draft.item_type.as_str()
                )));
            }
            1
        }
    };

    let id = next_item_id(project);
    project.items.push(WorkItem {
        id,
        name: draft.name,
        item_type: draft.item_type,
        level,
        parent_id,
        children: Vec::new(),
        status: draft.status,
        priority: draft.priority,
        assignee: draft.assignee,
        start_date: draft.start_date,
        end_date: draft.end_date,
        estimated_hours: draft.estimated_hours,
        actual_hours: draft.actual_hours,
        comments: Vec::new(),
        jira: draft.jira,
    });

    if let Some(pid) = parent_id
        && let Some(parent) = project.item_mut(pid)
    {
        parent.children.push(id);
    }

    Ok(id)
}

/// Ids of `item_id` and every transitive descendant, followed via `children`.
pub fn descendant_closure(items: &[WorkItem], item_id: i64) -> HashSet<i64> {
    let mut closure = HashSet::new();
    let mut queue = vec![item_id];

    while let Some(id) = queue.pop() {
        if !closure.insert(id) {
            continue;
        }
        if let Some(item) = items.iter().find(|i| i.id == id) {
            queue.extend(item.children.iter().copied());
        }
    }

    closure
}

/// Remove an item together with its whole descendant subtree and strip
/// any reference to a removed id from surviving `children` lists.
///
/// No-op for an id not present. Returns the number of removed items.
pub fn delete_item(project: &mut Project, item_id: i64) -> usize {
    if project.item(item_id).is_none() {
        return 0;
    }

    let closure = descendant_closure(&project.items, item_id);
    let before = project.items.len();

    project.items.retain(|i| !closure.contains(&i.id));
    for item in project.items.iter_mut() {
        item.children.retain(|c| !closure.contains(c));
    }

    before - project.items.len()
}

/// Pure field update; rollups are computed on demand, never cascaded.
pub fn update_status(project: &mut Project, item_id: i64, status: ItemStatus) -> AppResult<()> {
    let item = project
        .item_mut(item_id)
        .ok_or(AppError::ItemNotFound(item_id))?;
    item.status = status;
    Ok(())
}

/// Append a comment to an item's log.
pub fn add_comment(project: &mut Project, item_id: i64, text: &str, author: &str) -> AppResult<i64> {
    let item = project
        .item_mut(item_id)
        .ok_or(AppError::ItemNotFound(item_id))?;
    let comment_id = item.comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;
    item.comments.push(Comment::new(comment_id, text, author));
    Ok(comment_id)
}

/// Append externally-sourced drafts (spreadsheet rows, Jira issues)
/// verbatim as parentless items, pre-leveled by their type.
///
/// Every call is additive: no merging by name or key, so importing the
/// same source twice creates two full copies. Returns the assigned ids.
pub fn import_batch(project: &mut Project, drafts: Vec<ItemDraft>) -> Vec<i64> {
    let mut ids = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let id = next_item_id(project);
        let level = draft.item_type.default_level();
        project.items.push(WorkItem {
            id,
            name: draft.name,
            item_type: draft.item_type,
            level,
            parent_id: None,
            children: Vec::new(),
            status: draft.status,
            priority: draft.priority,
            assignee: draft.assignee,
            start_date: draft.start_date,
            end_date: draft.end_date,
            estimated_hours: draft.estimated_hours,
            actual_hours: draft.actual_hours,
            comments: Vec::new(),
            jira: draft.jira,
        });
        ids.push(id);
    }
    ids
}
