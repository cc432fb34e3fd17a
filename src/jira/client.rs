//! Jira REST v3 client (Basic auth, synchronous HTTP).

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use super::mapping::{self, JiraIssue, SearchResponse};
use crate::config::JiraConfig;
use crate::errors::{AppError, AppResult};
use crate::models::WorkItem;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const MAX_SEARCH_RESULTS: u32 = 100;

#[derive(Debug, Deserialize)]
pub struct CreatedIssue {
    pub key: String,
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct Myself {
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}

pub struct JiraClient {
    agent: ureq::Agent,
    base_url: String,
    auth_header: String,
}

/// Extract the first server-side error message from a failed Jira call.
fn jira_error(context: &str, err: ureq::Error) -> AppError {
    match err {
        ureq::Error::Status(code, response) => {
            let detail = response
                .into_json::<serde_json::Value>()
                .ok()
                .and_then(|v| {
                    v.get("errorMessages")
                        .and_then(|m| m.as_array())
                        .and_then(|a| a.first())
                        .and_then(|m| m.as_str().map(String::from))
                })
                .unwrap_or_else(|| format!("HTTP {}", code));
            AppError::Gateway(format!("{}: {}", context, detail))
        }
        other => AppError::Gateway(format!("{}: {}", context, other)),
    }
}

impl JiraClient {
    /// Build a client from the saved connection; fails when the config
    /// was never connected or is incomplete.
    pub fn from_config(cfg: &JiraConfig) -> AppResult<Self> {
        if !cfg.connected {
            return Err(AppError::Config(
                "not connected to Jira; run `rtracker jira --connect` first".to_string(),
            ));
        }
        if cfg.url.is_empty() || cfg.email.is_empty() || cfg.api_token.is_empty() {
            return Err(AppError::Config(
                "incomplete Jira configuration (url, email, api_token required)".to_string(),
            ));
        }

        Ok(Self {
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
            base_url: cfg.url.trim_end_matches('/').to_string(),
            auth_header: format!(
                "Basic {}",
                B64.encode(format!("{}:{}", cfg.email, cfg.api_token))
            ),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Verify the credentials by fetching the authenticated user.
    pub fn test_connection(&self) -> AppResult<Myself> {
        let response = self
            .agent
            .get(&self.url("/rest/api/3/myself"))
            .set("Authorization", &self.auth_header)
            .call()
            .map_err(|e| jira_error("Jira connection test failed", e))?;

        response
            .into_json()
            .map_err(|e| AppError::Gateway(format!("malformed Jira response: {}", e)))
    }

    /// Create an issue for a local work item. Only the fields the wire
    /// contract names are sent; an empty end date omits `duedate`.
    pub fn create_issue(&self, item: &WorkItem, project_key: &str) -> AppResult<CreatedIssue> {
        let mut fields = json!({
            "project": { "key": project_key },
            "summary": item.name,
            "issuetype": { "name": mapping::issue_type_name(item.item_type) },
            "priority": { "name": mapping::priority_name(item.priority) },
        });
        if !item.end_date.is_empty() {
            fields["duedate"] = json!(item.end_date);
        }

        let response = self
            .agent
            .post(&self.url("/rest/api/3/issue"))
            .set("Authorization", &self.auth_header)
            .send_json(json!({ "fields": fields }))
            .map_err(|e| jira_error("cannot create Jira issue", e))?;

        response
            .into_json()
            .map_err(|e| AppError::Gateway(format!("malformed Jira create response: {}", e)))
    }

    /// Latest issues of a project, newest first.
    pub fn search_issues(&self, project_key: &str) -> AppResult<Vec<JiraIssue>> {
        let jql = format!("project={} ORDER BY created DESC", project_key);

        let response = self
            .agent
            .get(&self.url("/rest/api/3/search"))
            .set("Authorization", &self.auth_header)
            .query("jql", &jql)
            .query("maxResults", &MAX_SEARCH_RESULTS.to_string())
            .call()
            .map_err(|e| jira_error("cannot search Jira issues", e))?;

        let search: SearchResponse = response
            .into_json()
            .map_err(|e| AppError::Gateway(format!("malformed Jira search response: {}", e)))?;
        Ok(search.issues)
    }

    /// Post a comment onto an issue (Atlassian-document body).
    pub fn post_comment(&self, issue_key: &str, text: &str) -> AppResult<()> {
        let body = json!({
            "body": {
                "type": "doc",
                "version": 1,
                "content": [{
                    "type": "paragraph",
                    "content": [{ "type": "text", "text": text }],
                }],
            },
        });

        self.agent
            .post(&self.url(&format!("/rest/api/3/issue/{}/comment", issue_key)))
            .set("Authorization", &self.auth_header)
            .send_json(body)
            .map_err(|e| jira_error("cannot post Jira comment", e))?;
        Ok(())
    }
}
