use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::JiraConfig;
use crate::errors::AppResult;
use crate::models::Project;

/// Full backup document: projects plus the Jira connection, so a
/// restore brings back the whole working state.
#[derive(Debug, Serialize, Deserialize)]
pub struct BackupDocument {
    pub projects: Vec<Project>,
    #[serde(default)]
    pub jira: Option<JiraConfig>,
    #[serde(rename = "exportDate")]
    pub export_date: String,
}

pub fn write_backup(path: &Path, projects: &[Project], jira: &JiraConfig) -> AppResult<()> {
    let doc = BackupDocument {
        projects: projects.to_vec(),
        jira: Some(jira.clone()),
        export_date: chrono::Local::now().to_rfc3339(),
    };
    std::fs::write(path, serde_json::to_string_pretty(&doc)?)?;
    Ok(())
}

pub fn read_backup(path: &Path) -> AppResult<BackupDocument> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
