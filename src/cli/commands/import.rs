use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{hierarchy, import};
use crate::errors::AppResult;
use crate::models::ItemDraft;
use crate::store;
use crate::ui::messages::{confirm, info, success};
use crate::utils::table::{Column, Table};

/// Import items from a CSV spreadsheet: parse, preview, confirm, append.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { project, file, yes } = cmd {
        let drafts = import::parse_spreadsheet(Path::new(file))?;

        if drafts.is_empty() {
            info("No importable rows found.");
            return Ok(());
        }

        print_preview(&drafts);

        if !*yes && !confirm(&format!("Import {} item(s) into project #{}?", drafts.len(), project)) {
            info("Import cancelled.");
            return Ok(());
        }

        let mut store = store::open_store(cfg)?;
        let mut proj = super::load_project(store.as_mut(), *project)?;

        let count = drafts.len();
        hierarchy::import_batch(&mut proj, drafts);
        store.update_project(&proj)?;

        super::audit(
            cfg,
            "import",
            &project.to_string(),
            &format!("Imported {} item(s) from {}", count, file),
        );
        success(format!("Successfully imported {} item(s)!", count));
    }

    Ok(())
}

pub(crate) fn print_preview(drafts: &[ItemDraft]) {
    let mut table = Table::new(vec![
        Column::new("NAME", 32),
        Column::new("TYPE", 8),
        Column::new("STATUS", 12),
        Column::new("PRIORITY", 8),
        Column::new("ASSIGNEE", 14),
        Column::new("START", 10),
        Column::new("END", 10),
    ]);

    for d in drafts {
        table.add_row(vec![
            d.name.clone(),
            d.item_type.as_str().to_string(),
            d.status.as_str().to_string(),
            d.priority.as_str().to_string(),
            d.assignee.clone(),
            d.start_date.clone(),
            d.end_date.clone(),
        ]);
    }

    print!("{}", table.render());
}
