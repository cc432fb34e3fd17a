//! Persistence gateway: a pluggable `Store` behind one trait.
//!
//! Three backends implement the same project CRUD contract: SQLite
//! (rusqlite, items kept as a JSON column), a single JSON document file,
//! and a remote REST server speaking the `/api/projects` wire protocol.
//! Store failures never invalidate the in-memory snapshot; callers keep
//! local state authoritative and surface the error.

pub mod jsonfile;
pub mod remote;
pub mod sqlite;

use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::models::Project;

#[derive(Debug, Clone)]
pub struct StoreHealth {
    pub status: String,
    pub message: String,
    pub database: String,
}

pub trait Store {
    /// All projects in the store, most recently updated first.
    fn load_projects(&mut self) -> AppResult<Vec<Project>>;

    /// Persist a new project; the store assigns the id. Returns the
    /// project with its id set.
    fn create_project(&mut self, project: &Project) -> AppResult<Project>;

    /// Replace the stored project with the given id. The SQLite backend
    /// silently affects zero rows for an unknown id; the JSON and remote
    /// backends upsert.
    fn update_project(&mut self, project: &Project) -> AppResult<()>;

    /// Remove a project. Idempotent: deleting an absent id succeeds.
    fn delete_project(&mut self, id: i64) -> AppResult<()>;

    /// Drop everything and store the given snapshot verbatim
    /// (last-fetch-wins replace; ids are preserved, not reassigned).
    fn replace_all(&mut self, projects: &[Project]) -> AppResult<()>;

    /// Liveness probe.
    fn health(&mut self) -> AppResult<StoreHealth>;
}

/// Open the backend selected by the configuration.
pub fn open_store(cfg: &Config) -> AppResult<Box<dyn Store>> {
    match cfg.backend {
        Backend::Sqlite => Ok(Box::new(sqlite::SqliteStore::open(&cfg.database)?)),
        Backend::Json => Ok(Box::new(jsonfile::JsonFileStore::open(&cfg.data_file)?)),
        Backend::Remote => Ok(Box::new(remote::RemoteStore::new(&cfg.remote_url)?)),
    }
}
