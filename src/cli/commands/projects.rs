use crate::config::Config;
use crate::core::rollup;
use crate::errors::AppResult;
use crate::store;
use crate::utils::table::{Column, Table, progress_bar};

/// List all projects with their rollup progress.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = store::open_store(cfg)?;
    let projects = store.load_projects()?;

    if projects.is_empty() {
        println!("No projects yet. Create one with `rtracker new <name>`.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("NAME", 28),
        Column::new("STATUS", 12),
        Column::new("ITEMS", 6),
        Column::new("PROGRESS", 18),
    ]);

    for p in &projects {
        table.add_row(vec![
            p.id.to_string(),
            p.name.clone(),
            p.status.as_str().to_string(),
            p.items.len().to_string(),
            progress_bar(rollup::project_progress(&p.items), 10),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
