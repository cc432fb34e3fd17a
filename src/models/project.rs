use serde::{Deserialize, Serialize};

use super::item::WorkItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "planning")]
    Planning,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "planning" => Some(ProjectStatus::Planning),
            "in-progress" | "in progress" => Some(ProjectStatus::InProgress),
            "completed" => Some(ProjectStatus::Completed),
            _ => None,
        }
    }
}

/// A project exclusively owns its work items; comments and Jira links
/// are owned by the item and move/die with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Store-assigned integer id, unique within the store. 0 = not yet saved.
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "startDate", default)]
    pub start_date: String,
    #[serde(rename = "endDate", default)]
    pub end_date: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub items: Vec<WorkItem>,
}

impl Project {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            description: description.to_string(),
            start_date: String::new(),
            end_date: String::new(),
            status: ProjectStatus::Planning,
            items: Vec::new(),
        }
    }

    pub fn item(&self, id: i64) -> Option<&WorkItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn item_mut(&mut self, id: i64) -> Option<&mut WorkItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }
}
