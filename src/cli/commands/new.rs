use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Project, ProjectStatus};
use crate::store;
use crate::ui::messages::success;
use crate::utils::date;

/// Create a new project in the active store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::New {
        name,
        description,
        start,
        end,
        status,
    } = cmd
    {
        let status = ProjectStatus::from_str_opt(status)
            .ok_or_else(|| AppError::InvalidStatus(status.clone()))?;

        let mut project = Project::new(name, description);
        project.status = status;
        project.start_date = parse_date_arg(start)?.unwrap_or_else(date::today_str);
        project.end_date = parse_date_arg(end)?.unwrap_or_default();

        let mut store = store::open_store(cfg)?;
        let created = store.create_project(&project)?;

        super::audit(
            cfg,
            "project_create",
            &created.id.to_string(),
            &format!("Created project '{}'", created.name),
        );
        success(format!("Project #{} '{}' created.", created.id, created.name));
    }

    Ok(())
}

fn parse_date_arg(arg: &Option<String>) -> AppResult<Option<String>> {
    match arg {
        None => Ok(None),
        Some(s) => match date::parse_date(s) {
            Some(d) => Ok(Some(d.format("%Y-%m-%d").to_string())),
            None => Err(AppError::InvalidDate(s.clone())),
        },
    }
}
