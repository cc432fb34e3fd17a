use crate::config::Config;
use crate::core::stats::item_stats;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, GREY, RESET, YELLOW};

/// Dashboard counters across all projects.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = store::open_store(cfg)?;
    let projects = store.load_projects()?;
    let stats = item_stats(&projects);

    header("Dashboard");
    println!("Projects:     {}", projects.len());
    println!("Total items:  {}", stats.total);
    println!("In review:    {}{}{}", GREEN, stats.review, RESET);
    println!("In progress:  {}{}{}", YELLOW, stats.in_progress, RESET);
    println!("Pending:      {}{}{}", GREY, stats.pending, RESET);

    if cfg.jira.connected {
        println!("\nConnected to Jira: {}", cfg.jira.url);
    }

    Ok(())
}
