//! SQLite backend. Projects live in one table with the item forest
//! serialized into an `items` JSON column, mirroring the wire shape the
//! remote server stores.

use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

use super::{Store, StoreHealth};
use crate::core::migrate::project_from_value;
use crate::errors::{AppError, AppResult};
use crate::models::Project;

pub struct SqliteStore {
    pub conn: Connection,
    path: String,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        let store = Self {
            conn,
            path: path.to_string(),
        };
        store.run_pending_migrations()?;
        Ok(store)
    }

    /// Ensure the schema exists and upgrade older databases in place.
    fn run_pending_migrations(&self) -> AppResult<()> {
        ensure_log_table(&self.conn)?;
        create_projects_table(&self.conn)?;
        migrate_add_updated_at(&self.conn)?;
        Ok(())
    }

    fn row_to_project(items_json: &str, row: &rusqlite::Row) -> rusqlite::Result<Project> {
        let raw: serde_json::Value =
            serde_json::from_str(items_json).unwrap_or(serde_json::Value::Array(vec![]));
        let list = if raw.is_array() {
            raw
        } else {
            serde_json::Value::Array(vec![])
        };

        let mut value = serde_json::json!({
            "id": row.get::<_, i64>("id")?,
            "name": row.get::<_, String>("name")?,
            "description": row.get::<_, Option<String>>("description")?.unwrap_or_default(),
            "startDate": row.get::<_, Option<String>>("start_date")?.unwrap_or_default(),
            "endDate": row.get::<_, Option<String>>("end_date")?.unwrap_or_default(),
            "status": row.get::<_, Option<String>>("status")?.unwrap_or_else(|| "planning".into()),
        });

        // Rows written by the flat-task versions carry tasks without a
        // `type`; route those through the schema migration.
        let legacy = list
            .as_array()
            .is_some_and(|a| a.iter().any(|t| t.get("type").is_none() && t.get("name").is_some()));
        value[if legacy { "tasks" } else { "items" }] = list;

        project_from_value(value).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
    }
}

impl Store for SqliteStore {
    fn load_projects(&mut self) -> AppResult<Vec<Project>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, description, start_date, end_date, status, items
             FROM projects ORDER BY updated_at DESC",
        )?;

        let projects = stmt
            .query_map([], |row| {
                let items_json: Option<String> = row.get("items")?;
                Self::row_to_project(items_json.as_deref().unwrap_or("[]"), row)
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(projects)
    }

    fn create_project(&mut self, project: &Project) -> AppResult<Project> {
        let items_json = serde_json::to_string(&project.items)?;
        let now = Local::now().to_rfc3339();

        self.conn.execute(
            "INSERT INTO projects (name, description, start_date, end_date, status, items, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
            params![
                project.name,
                project.description,
                project.start_date,
                project.end_date,
                project.status.as_str(),
                items_json,
                now,
            ],
        )?;

        let mut created = project.clone();
        created.id = self.conn.last_insert_rowid();
        Ok(created)
    }

    fn update_project(&mut self, project: &Project) -> AppResult<()> {
        let items_json = serde_json::to_string(&project.items)?;
        let now = Local::now().to_rfc3339();

        // UPDATE over an absent id affects zero rows; that is the
        // documented behavior of this backend, not an error.
        self.conn.execute(
            "UPDATE projects
             SET name = ?1, description = ?2, start_date = ?3, end_date = ?4,
                 status = ?5, items = ?6, updated_at = ?7
             WHERE id = ?8",
            params![
                project.name,
                project.description,
                project.start_date,
                project.end_date,
                project.status.as_str(),
                items_json,
                now,
                project.id,
            ],
        )?;

        Ok(())
    }

    fn delete_project(&mut self, id: i64) -> AppResult<()> {
        self.conn
            .execute("DELETE FROM projects WHERE id = ?1", params![id])?;
        Ok(())
    }

    fn replace_all(&mut self, projects: &[Project]) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM projects", [])?;
        for p in projects {
            let items_json = serde_json::to_string(&p.items)?;
            tx.execute(
                "INSERT INTO projects (id, name, description, start_date, end_date, status, items, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
                params![
                    p.id,
                    p.name,
                    p.description,
                    p.start_date,
                    p.end_date,
                    p.status.as_str(),
                    items_json,
                    now,
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn health(&mut self) -> AppResult<StoreHealth> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM projects", [], |row| row.get(0))?;
        Ok(StoreHealth {
            status: "ok".to_string(),
            message: format!("{} projects", count),
            database: self.path.clone(),
        })
    }
}

/// Write an internal log line into the `log` table.
pub fn oplog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Recent internal log rows, newest first.
pub fn read_log(conn: &Connection, limit: usize) -> AppResult<Vec<(String, String, String, String)>> {
    let mut stmt = conn.prepare(
        "SELECT date, operation, target, message FROM log ORDER BY id DESC LIMIT ?1",
    )?;
    let rows = stmt
        .query_map([limit as i64], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_projects_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            description TEXT DEFAULT '',
            start_date  TEXT DEFAULT '',
            end_date    TEXT DEFAULT '',
            status      TEXT NOT NULL DEFAULT 'planning',
            items       TEXT NOT NULL DEFAULT '[]',
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_projects_updated ON projects(updated_at);
        "#,
    )?;
    Ok(())
}

fn projects_has_updated_at(conn: &Connection) -> AppResult<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('projects')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "updated_at" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Databases created before the sync work lack `updated_at`; add it and
/// backfill with `created_at`.
fn migrate_add_updated_at(conn: &Connection) -> AppResult<()> {
    let exists: Option<String> = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='projects'")?
        .query_row([], |row| row.get(0))
        .optional()?;
    if exists.is_none() || projects_has_updated_at(conn)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        ALTER TABLE projects ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';
        UPDATE projects SET updated_at = created_at WHERE updated_at = '';
        "#,
    )
    .map_err(|e| AppError::Migration(format!("add updated_at: {}", e)))?;

    Ok(())
}
