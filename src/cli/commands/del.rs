use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::hierarchy;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{confirm, info, success};

/// Delete a work item together with its whole subtree.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { project, item, yes } = cmd {
        let mut store = store::open_store(cfg)?;
        let mut proj = super::load_project(store.as_mut(), *project)?;

        let Some(target) = proj.item(*item) else {
            info(format!("Item #{} not found in project #{}; nothing to delete.", item, project));
            return Ok(());
        };

        let subtree = hierarchy::descendant_closure(&proj.items, *item).len();
        let prompt = format!(
            "Delete {} '{}' and its {} descendant(s)? This action is irreversible.",
            target.item_type.as_str(),
            target.name,
            subtree - 1
        );
        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = hierarchy::delete_item(&mut proj, *item);
        store.update_project(&proj)?;

        super::audit(
            cfg,
            "item_del",
            &format!("{}/{}", project, item),
            &format!("Removed {} item(s)", removed),
        );
        success(format!("Removed {} item(s).", removed));
    }

    Ok(())
}
