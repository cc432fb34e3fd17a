use serde::{Deserialize, Serialize};

/// Link between a local work item and a remote Jira issue.
/// Set once on creation/import; only re-sync operations touch it again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraLink {
    #[serde(rename = "issueKey")]
    pub issue_key: String,
    #[serde(rename = "issueId")]
    pub issue_id: String,
    #[serde(rename = "issueUrl")]
    pub issue_url: String,
    #[serde(rename = "issueType", default)]
    pub issue_type: String,
    #[serde(rename = "lastSynced")]
    pub last_synced: String,
    #[serde(rename = "syncStatus")]
    pub sync_status: String,
}

impl JiraLink {
    pub fn synced(base_url: &str, key: &str, id: &str, issue_type: &str) -> Self {
        Self {
            issue_key: key.to_string(),
            issue_id: id.to_string(),
            issue_url: format!("{}/browse/{}", base_url.trim_end_matches('/'), key),
            issue_type: issue_type.to_string(),
            last_synced: chrono::Local::now().to_rfc3339(),
            sync_status: "synced".to_string(),
        }
    }
}
