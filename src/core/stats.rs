//! Dashboard aggregation over all projects.

use crate::models::{ItemStatus, Project};

#[derive(Debug, Default, Clone, Copy)]
pub struct ItemStats {
    pub total: usize,
    pub review: usize,
    pub in_progress: usize,
    pub pending: usize,
}

/// Count items per status across every project.
pub fn item_stats(projects: &[Project]) -> ItemStats {
    let mut stats = ItemStats::default();
    for p in projects {
        for item in &p.items {
            stats.total += 1;
            match item.status {
                ItemStatus::Review => stats.review += 1,
                ItemStatus::InProgress => stats.in_progress += 1,
                ItemStatus::Pending => stats.pending += 1,
            }
        }
    }
    stats
}
