use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::rollup;
use crate::errors::AppResult;
use crate::models::{Project, WorkItem};
use crate::store;
use crate::utils::colors::{GREY, RESET, color_for_status, colorize};
use crate::utils::table::progress_bar;

/// Print a project's item tree with rollup progress (and hours).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { project, hours } = cmd {
        let mut store = store::open_store(cfg)?;
        let proj = super::load_project(store.as_mut(), *project)?;

        println!(
            "\n#{} {} [{}]  {}",
            proj.id,
            proj.name,
            proj.status.as_str(),
            progress_bar(rollup::project_progress(&proj.items), 16)
        );
        if !proj.description.is_empty() {
            println!("{}{}{}", GREY, proj.description, RESET);
        }
        if !proj.start_date.is_empty() || !proj.end_date.is_empty() {
            println!("{}{} → {}{}", GREY, proj.start_date, proj.end_date, RESET);
        }
        println!();

        if proj.items.is_empty() {
            println!("No items yet. Add an epic with `rtracker add --project {} <name>`.", proj.id);
            return Ok(());
        }

        let roots: Vec<&WorkItem> = proj.items.iter().filter(|i| i.parent_id.is_none()).collect();
        for root in roots {
            print_subtree(&proj, root, 0, *hours);
        }
        println!();
    }

    Ok(())
}

fn print_subtree(proj: &Project, item: &WorkItem, depth: usize, with_hours: bool) {
    let indent = "  ".repeat(depth);
    let progress = rollup::compute_progress(&proj.items, item.id);

    let mut line = format!(
        "{}#{:<4} {} {} {}  {}",
        indent,
        item.id,
        badge(item),
        item.name,
        colorize(item.status.as_str(), color_for_status(item.status.as_str())),
        progress_bar(progress, 10),
    );

    if with_hours {
        let h = rollup::compute_rollup_hours(&proj.items, item.id);
        line.push_str(&format!("  est {}h / act {}h", h.estimated, h.actual));
    }
    if let Some(jira) = &item.jira {
        line.push_str(&format!("  {}{}{}", GREY, jira.issue_key, RESET));
    }

    println!("{}", line);

    for child_id in &item.children {
        if let Some(child) = proj.item(*child_id) {
            print_subtree(proj, child, depth + 1, with_hours);
        }
    }
}

fn badge(item: &WorkItem) -> &'static str {
    match item.item_type {
        crate::models::ItemType::Epic => "📦",
        crate::models::ItemType::Story => "📖",
        crate::models::ItemType::Task => "🔧",
        crate::models::ItemType::Subtask => "▪️",
    }
}
