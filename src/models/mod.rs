pub mod comment;
pub mod item;
pub mod jira_link;
pub mod project;

pub use comment::Comment;
pub use item::{ItemDraft, ItemStatus, ItemType, Priority, WorkItem};
pub use jira_link::JiraLink;
pub use project::{Project, ProjectStatus};
