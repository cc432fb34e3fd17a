// src/export/mod.rs

mod csv;
mod json;
mod model;
mod xlsx;

pub use json::{BackupDocument, read_backup, write_backup};
pub use model::{ItemExport, collect_rows};

use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Completion notice shared by all writers.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Write a flat item report in the requested format. JSON backups are
/// handled separately (`write_backup`) because they carry config too.
pub fn export_items(format: &ExportFormat, rows: &[ItemExport], path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => {
            csv::write_csv(path, rows)?;
            notify_export_success("CSV", path);
            Ok(())
        }
        ExportFormat::Xlsx => xlsx::export_xlsx(rows, path),
        ExportFormat::Json => {
            std::fs::write(path, serde_json::to_string_pretty(rows)?)?;
            notify_export_success("JSON", path);
            Ok(())
        }
    }
}
