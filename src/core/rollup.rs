//! Rollup queries over the item forest.
//!
//! Progress AVERAGES direct children (unweighted by subtree size) while
//! hours SUM them; the asymmetry is part of the contract and must not be
//! "normalized" in either direction.

use crate::models::{ItemStatus, WorkItem};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RollupHours {
    pub estimated: f64,
    pub actual: f64,
}

fn leaf_score(status: ItemStatus) -> f64 {
    match status {
        ItemStatus::Review => 100.0,
        ItemStatus::InProgress => 50.0,
        ItemStatus::Pending => 0.0,
    }
}

/// Progress of an item in [0, 100].
///
/// Leaves score by status (review=100, in-progress=50, pending=0).
/// Internal nodes take the arithmetic mean over their direct children;
/// a child id that resolves to no item is skipped and does not enter
/// the denominator. An unknown `item_id` scores 0.
pub fn compute_progress(items: &[WorkItem], item_id: i64) -> f64 {
    let Some(item) = items.iter().find(|i| i.id == item_id) else {
        return 0.0;
    };

    if item.is_leaf() {
        return leaf_score(item.status);
    }

    let mut sum = 0.0;
    let mut counted = 0usize;
    for child_id in &item.children {
        if items.iter().any(|i| i.id == *child_id) {
            sum += compute_progress(items, *child_id);
            counted += 1;
        }
    }

    if counted == 0 {
        0.0
    } else {
        sum / counted as f64
    }
}

/// Estimated/actual hours rolled up over a subtree.
///
/// Leaves report their own fields; internal nodes sum their children's
/// rollups (the node's own hour fields are not added on top).
pub fn compute_rollup_hours(items: &[WorkItem], item_id: i64) -> RollupHours {
    let Some(item) = items.iter().find(|i| i.id == item_id) else {
        return RollupHours::default();
    };

    if item.is_leaf() {
        return RollupHours {
            estimated: item.estimated_hours,
            actual: item.actual_hours,
        };
    }

    let mut total = RollupHours::default();
    for child_id in &item.children {
        let child = compute_rollup_hours(items, *child_id);
        total.estimated += child.estimated;
        total.actual += child.actual;
    }
    total
}

/// Mean progress over a project's root items; 0 for an empty project.
/// Feeds the dashboard's per-project bar.
pub fn project_progress(items: &[WorkItem]) -> f64 {
    let roots: Vec<&WorkItem> = items.iter().filter(|i| i.parent_id.is_none()).collect();
    if roots.is_empty() {
        return 0.0;
    }
    let sum: f64 = roots.iter().map(|r| compute_progress(items, r.id)).sum();
    sum / roots.len() as f64
}
