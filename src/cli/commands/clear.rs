use crate::cli::parser::Commands;
use crate::config::{Config, JiraConfig};
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{confirm, info, success};

/// Bulk data-clear: remove every project and forget the Jira connection.
pub fn handle(cmd: &Commands, cfg: &Config, is_test: bool) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes && !confirm("Clear ALL data? This cannot be undone!") {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut store = store::open_store(cfg)?;
        store.replace_all(&[])?;

        if !is_test {
            let mut updated = cfg.clone();
            updated.jira = JiraConfig::default();
            updated.save()?;
        }

        super::audit(cfg, "clear", "all", "All data cleared");
        success("All data cleared.");
    }

    Ok(())
}
