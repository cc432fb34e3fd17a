use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::read_backup;
use crate::store;
use crate::ui::messages::{confirm, info, success};

/// Restore projects (and the Jira connection) from a JSON backup.
/// The current store content is replaced, not merged.
pub fn handle(cmd: &Commands, cfg: &Config, is_test: bool) -> AppResult<()> {
    if let Commands::Restore { file, yes } = cmd {
        let backup = read_backup(Path::new(file))?;

        let prompt = format!(
            "Replace ALL local data with {} project(s) from {} (exported {})?",
            backup.projects.len(),
            file,
            backup.export_date
        );
        if !*yes && !confirm(&prompt) {
            info("Restore cancelled.");
            return Ok(());
        }

        let mut store = store::open_store(cfg)?;
        store.replace_all(&backup.projects)?;

        if let Some(jira) = backup.jira
            && !is_test
        {
            let mut updated = cfg.clone();
            updated.jira = jira;
            updated.save()?;
            info("Jira connection restored from backup.");
        }

        super::audit(
            cfg,
            "restore",
            file,
            &format!("Restored {} project(s)", backup.projects.len()),
        );
        success("Data restored successfully!");
    }

    Ok(())
}
