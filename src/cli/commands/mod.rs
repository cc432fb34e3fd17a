pub mod add;
pub mod clear;
pub mod comment;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod holidays;
pub mod import;
pub mod init;
pub mod jira;
pub mod log;
pub mod new;
pub mod projects;
pub mod restore;
pub mod share;
pub mod show;
pub mod stats;
pub mod status;
pub mod sync;

use crate::config::{Backend, Config};
use crate::errors::{AppError, AppResult};
use crate::models::Project;
use crate::store::sqlite::{SqliteStore, oplog};

/// Fetch one project from the store by id.
pub(crate) fn load_project(
    store: &mut dyn crate::store::Store,
    id: i64,
) -> AppResult<Project> {
    store
        .load_projects()?
        .into_iter()
        .find(|p| p.id == id)
        .ok_or(AppError::ProjectNotFound(id))
}

/// Best-effort audit log line; only the SQLite backend keeps a log table.
pub(crate) fn audit(cfg: &Config, operation: &str, target: &str, message: &str) {
    if cfg.backend != Backend::Sqlite {
        return;
    }
    match SqliteStore::open(&cfg.database) {
        Ok(store) => {
            if let Err(e) = oplog(&store.conn, operation, target, message) {
                eprintln!("⚠️ Failed to write internal log: {}", e);
            }
        }
        Err(e) => eprintln!("⚠️ Failed to open log database: {}", e),
    }
}
