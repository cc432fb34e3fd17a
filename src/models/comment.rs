use serde::{Deserialize, Serialize};

/// Append-only item comment. Never edited or deleted in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub author: String,
    /// ISO 8601 datetime of when the comment was posted.
    pub timestamp: String,
    #[serde(rename = "postedToJira", default)]
    pub posted_to_jira: bool,
}

impl Comment {
    pub fn new(id: i64, text: &str, author: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            author: author.to_string(),
            timestamp: chrono::Local::now().to_rfc3339(),
            posted_to_jira: false,
        }
    }
}
