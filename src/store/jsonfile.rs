//! JSON document backend: the whole project list in one pretty-printed
//! file. This is the lowdb/local-storage analog; every save rewrites the
//! document (last write wins).

use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;

use super::{Store, StoreHealth};
use crate::core::migrate::project_from_value;
use crate::errors::{AppError, AppResult};
use crate::models::Project;

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            path: PathBuf::from(path),
        })
    }

    fn read_document(&self) -> AppResult<Vec<Project>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let doc: Value = serde_json::from_str(&content)
            .map_err(|e| AppError::Other(format!("corrupt data file {}: {}", self.path.display(), e)))?;

        let raw_projects = doc
            .get("projects")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let mut projects = Vec::with_capacity(raw_projects.len());
        for raw in raw_projects {
            projects.push(project_from_value(raw)?);
        }
        Ok(projects)
    }

    fn write_document(&self, projects: &[Project]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let doc = json!({
            "projects": projects,
            "updatedAt": chrono::Local::now().to_rfc3339(),
        });
        fs::write(&self.path, serde_json::to_string_pretty(&doc)?)?;
        Ok(())
    }

    fn next_id(projects: &[Project]) -> i64 {
        projects.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }
}

impl Store for JsonFileStore {
    fn load_projects(&mut self) -> AppResult<Vec<Project>> {
        self.read_document()
    }

    fn create_project(&mut self, project: &Project) -> AppResult<Project> {
        let mut projects = self.read_document()?;

        let mut created = project.clone();
        if created.id != 0 && projects.iter().any(|p| p.id == created.id) {
            return Err(AppError::Validation(format!(
                "project id {} already exists",
                created.id
            )));
        }
        if created.id == 0 {
            created.id = Self::next_id(&projects);
        }

        projects.push(created.clone());
        self.write_document(&projects)?;
        Ok(created)
    }

    fn update_project(&mut self, project: &Project) -> AppResult<()> {
        let mut projects = self.read_document()?;

        // Upsert: create when absent, replace otherwise.
        match projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => *existing = project.clone(),
            None => projects.push(project.clone()),
        }

        self.write_document(&projects)
    }

    fn delete_project(&mut self, id: i64) -> AppResult<()> {
        let mut projects = self.read_document()?;
        projects.retain(|p| p.id != id);
        self.write_document(&projects)
    }

    fn replace_all(&mut self, projects: &[Project]) -> AppResult<()> {
        self.write_document(projects)
    }

    fn health(&mut self) -> AppResult<StoreHealth> {
        let projects = self.read_document()?;
        Ok(StoreHealth {
            status: "ok".to_string(),
            message: format!("{} projects", projects.len()),
            database: self.path.display().to_string(),
        })
    }
}
