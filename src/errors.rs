//! Unified application error type.
//! All modules (core, store, jira, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage backends
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Domain validation (bad shape or bad reference; nothing mutated)
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(i64),

    #[error("Work item not found: {0}")]
    ItemNotFound(i64),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid item type: {0}")]
    InvalidItemType(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Gateways (remote store, Jira); local state stays authoritative
    // ---------------------------
    #[error("Gateway error: {0}")]
    Gateway(String),

    // ---------------------------
    // Import / export
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Invalid share link: {0}")]
    Share(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
