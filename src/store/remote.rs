//! Remote REST backend: HTTP+JSON client of the team server
//! (`/api/projects`, `/api/health`, `/api/holidays/:year`).
//!
//! Failures map to `AppError::Gateway` with the server-provided message
//! when one is available; the caller's local snapshot stays authoritative.

use serde::Deserialize;
use std::time::Duration;

use super::{Store, StoreHealth};
use crate::core::migrate::project_from_value;
use crate::errors::{AppError, AppResult};
use crate::models::Project;

const HEALTH_TIMEOUT: Duration = Duration::from_secs(3);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
pub struct Holiday {
    pub date: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    database: String,
}

pub struct RemoteStore {
    agent: ureq::Agent,
    base_url: String,
}

/// Pull the server's `{error}`/`{message}` field out of a failed call.
fn gateway_error(context: &str, err: ureq::Error) -> AppError {
    match err {
        ureq::Error::Status(code, response) => {
            let detail = response
                .into_json::<serde_json::Value>()
                .ok()
                .and_then(|v| {
                    v.get("error")
                        .or_else(|| v.get("message"))
                        .and_then(|m| m.as_str().map(String::from))
                })
                .unwrap_or_else(|| format!("HTTP {}", code));
            AppError::Gateway(format!("{}: {}", context, detail))
        }
        other => AppError::Gateway(format!("{}: {}", context, other)),
    }
}

impl RemoteStore {
    pub fn new(base_url: &str) -> AppResult<Self> {
        if base_url.trim().is_empty() {
            return Err(AppError::Config(
                "remote backend selected but remote_url is empty".to_string(),
            ));
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build();
        Ok(Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Public holidays for a year, from the server's lookup table.
    pub fn holidays(&self, year: i32) -> AppResult<Vec<Holiday>> {
        let response = self
            .agent
            .get(&self.url(&format!("/api/holidays/{}", year)))
            .call()
            .map_err(|e| gateway_error("holiday lookup failed", e))?;

        response
            .into_json()
            .map_err(|e| AppError::Gateway(format!("malformed holiday response: {}", e)))
    }
}

impl Store for RemoteStore {
    fn load_projects(&mut self) -> AppResult<Vec<Project>> {
        let response = self
            .agent
            .get(&self.url("/api/projects"))
            .call()
            .map_err(|e| gateway_error("cannot fetch projects", e))?;

        let raw: Vec<serde_json::Value> = response
            .into_json()
            .map_err(|e| AppError::Gateway(format!("malformed project list: {}", e)))?;

        let mut projects = Vec::with_capacity(raw.len());
        for value in raw {
            projects.push(project_from_value(value)?);
        }
        Ok(projects)
    }

    fn create_project(&mut self, project: &Project) -> AppResult<Project> {
        let response = self
            .agent
            .post(&self.url("/api/projects"))
            .send_json(serde_json::to_value(project)?)
            .map_err(|e| gateway_error("cannot create project", e))?;

        let created: serde_json::Value = response
            .into_json()
            .map_err(|e| AppError::Gateway(format!("malformed create response: {}", e)))?;
        Ok(project_from_value(created)?)
    }

    fn update_project(&mut self, project: &Project) -> AppResult<()> {
        self.agent
            .put(&self.url(&format!("/api/projects/{}", project.id)))
            .send_json(serde_json::to_value(project)?)
            .map_err(|e| gateway_error("cannot update project", e))?;
        Ok(())
    }

    fn delete_project(&mut self, id: i64) -> AppResult<()> {
        self.agent
            .delete(&self.url(&format!("/api/projects/{}", id)))
            .call()
            .map_err(|e| gateway_error("cannot delete project", e))?;
        Ok(())
    }

    fn replace_all(&mut self, projects: &[Project]) -> AppResult<()> {
        // The wire protocol has no bulk endpoint; replace project by
        // project, then delete remote leftovers.
        let remote = self.load_projects()?;

        for p in projects {
            self.update_project(p)?;
        }
        for stale in remote.iter().filter(|r| !projects.iter().any(|p| p.id == r.id)) {
            self.delete_project(stale.id)?;
        }
        Ok(())
    }

    fn health(&mut self) -> AppResult<StoreHealth> {
        let probe = ureq::AgentBuilder::new().timeout(HEALTH_TIMEOUT).build();

        let response = probe
            .get(&self.url("/api/health"))
            .call()
            .map_err(|e| gateway_error("health probe failed", e))?;

        let health: HealthResponse = response
            .into_json()
            .map_err(|e| AppError::Gateway(format!("malformed health response: {}", e)))?;

        Ok(StoreHealth {
            status: health.status,
            message: health.message,
            database: health.database,
        })
    }
}
