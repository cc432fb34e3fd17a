use serde::{Deserialize, Serialize};

use super::comment::Comment;
use super::jira_link::JiraLink;

/// Work item kind. The hierarchy is strictly nested in this order:
/// epic (level 1) → story (2) → task (3) → subtask (4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Epic,
    Story,
    Task,
    Subtask,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Epic => "epic",
            ItemType::Story => "story",
            ItemType::Task => "task",
            ItemType::Subtask => "subtask",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "epic" => Some(ItemType::Epic),
            "story" => Some(ItemType::Story),
            "task" => Some(ItemType::Task),
            "subtask" | "sub-task" => Some(ItemType::Subtask),
            _ => None,
        }
    }

    /// Depth an item of this type sits at when it has no parent chain
    /// above it (imports land pre-leveled this way).
    pub fn default_level(&self) -> u8 {
        match self {
            ItemType::Epic => 1,
            ItemType::Story => 2,
            ItemType::Task => 3,
            ItemType::Subtask => 4,
        }
    }

    /// The only type allowed as parent of `self`, or None for roots.
    pub fn required_parent(&self) -> Option<ItemType> {
        match self {
            ItemType::Epic => None,
            ItemType::Story => Some(ItemType::Epic),
            ItemType::Task => Some(ItemType::Story),
            ItemType::Subtask => Some(ItemType::Task),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "review")]
    Review,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::InProgress => "in-progress",
            ItemStatus::Review => "review",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(ItemStatus::Pending),
            "in-progress" | "in progress" => Some(ItemStatus::InProgress),
            "review" => Some(ItemStatus::Review),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

/// A node of the per-project work-item forest.
///
/// Invariants maintained by `core::hierarchy`:
/// - `children` is exactly the set of ids whose `parent_id` is this id;
/// - `level` = parent level + 1, roots sit at level 1 and are epics;
/// - deleting an item deletes its whole descendant subtree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub level: u8,
    #[serde(rename = "parentId")]
    pub parent_id: Option<i64>,
    pub children: Vec<i64>,
    pub status: ItemStatus,
    pub priority: Priority,
    #[serde(default)]
    pub assignee: String,
    #[serde(rename = "startDate", default)]
    pub start_date: String,
    #[serde(rename = "endDate", default)]
    pub end_date: String,
    #[serde(rename = "estimatedHours", default)]
    pub estimated_hours: f64,
    #[serde(rename = "actualHours", default)]
    pub actual_hours: f64,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub jira: Option<JiraLink>,
}

impl WorkItem {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Field set for an item that does not exist yet (no id, no links).
/// `core::hierarchy::add_item` and `import_batch` turn drafts into items.
#[derive(Debug, Clone)]
pub struct ItemDraft {
    pub name: String,
    pub item_type: ItemType,
    pub status: ItemStatus,
    pub priority: Priority,
    pub assignee: String,
    pub start_date: String,
    pub end_date: String,
    pub estimated_hours: f64,
    pub actual_hours: f64,
    pub jira: Option<JiraLink>,
}

impl ItemDraft {
    pub fn new(name: &str, item_type: ItemType) -> Self {
        Self {
            name: name.to_string(),
            item_type,
            status: ItemStatus::Pending,
            priority: Priority::Medium,
            assignee: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            estimated_hours: 0.0,
            actual_hours: 0.0,
            jira: None,
        }
    }
}
