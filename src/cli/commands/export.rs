use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportFormat, collect_rows, export_items, write_backup};
use crate::store;

/// Export a full JSON backup or a flat item report (csv/xlsx/json).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        report,
    } = cmd
    {
        let mut store = store::open_store(cfg)?;
        let projects = store.load_projects()?;
        let path = Path::new(file);

        // The default JSON export is a restorable backup (projects plus
        // the Jira connection); --report switches to the flat item list.
        if matches!(format, ExportFormat::Json) && !*report {
            write_backup(path, &projects, &cfg.jira)?;
            crate::ui::messages::success(format!("Backup written to {}", path.display()));
            return Ok(());
        }

        let rows = collect_rows(&projects);
        export_items(format, &rows, path)?;
    }

    Ok(())
}
