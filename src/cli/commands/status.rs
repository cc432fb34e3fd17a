use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::hierarchy;
use crate::errors::{AppError, AppResult};
use crate::jira::JiraClient;
use crate::models::ItemStatus;
use crate::store;
use crate::ui::messages::{success, warning};

/// Update the status of a work item. With Jira auto-sync enabled the
/// change is also pushed to the linked issue as a comment trail.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status {
        project,
        item,
        status,
    } = cmd
    {
        let new_status = ItemStatus::from_str_opt(status)
            .ok_or_else(|| AppError::InvalidStatus(status.clone()))?;

        let mut store = store::open_store(cfg)?;
        let mut proj = super::load_project(store.as_mut(), *project)?;

        hierarchy::update_status(&mut proj, *item, new_status)?;
        store.update_project(&proj)?;

        // Fire the Jira update after the local write; a gateway failure
        // leaves the local state in place and is only reported.
        if cfg.jira.auto_sync
            && let Some(link) = proj.item(*item).and_then(|i| i.jira.as_ref())
        {
            match JiraClient::from_config(&cfg.jira).and_then(|client| {
                client.post_comment(
                    &link.issue_key,
                    &format!("Status changed to {} in rtracker", new_status.as_str()),
                )
            }) {
                Ok(()) => success(format!("Jira {} notified.", link.issue_key)),
                Err(e) => warning(format!("Jira not updated: {}", e)),
            }
        }

        super::audit(
            cfg,
            "item_status",
            &format!("{}/{}", project, item),
            &format!("Status set to {}", new_status.as_str()),
        );
        success(format!("Item #{} is now {}.", item, new_status.as_str()));
    }

    Ok(())
}
