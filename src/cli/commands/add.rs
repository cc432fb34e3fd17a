use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::hierarchy;
use crate::errors::{AppError, AppResult};
use crate::jira::JiraClient;
use crate::jira::mapping::issue_type_name;
use crate::models::{ItemDraft, ItemStatus, ItemType, JiraLink, Priority, WorkItem};
use crate::store;
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// Add a work item to a project, optionally creating a linked Jira issue.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        project,
        name,
        item_type,
        parent,
        status,
        priority,
        assignee,
        start,
        end,
        estimated_hours,
        actual_hours,
        jira,
    } = cmd
    {
        //
        // 1. Parse item fields
        //
        let item_type = ItemType::from_str_opt(item_type)
            .ok_or_else(|| AppError::InvalidItemType(item_type.clone()))?;
        let status = ItemStatus::from_str_opt(status)
            .ok_or_else(|| AppError::InvalidStatus(status.clone()))?;
        let priority = Priority::from_str_opt(priority)
            .ok_or_else(|| AppError::Validation(format!("invalid priority '{}'", priority)))?;

        let start_date = parse_date_arg(start)?.unwrap_or_else(date::today_str);
        let end_date = parse_date_arg(end)?.unwrap_or_else(|| date::plus_days(&start_date, 7));

        let mut draft = ItemDraft {
            name: name.clone(),
            item_type,
            status,
            priority,
            assignee: assignee.clone(),
            start_date,
            end_date,
            estimated_hours: *estimated_hours,
            actual_hours: *actual_hours,
            jira: None,
        };

        //
        // 2. Load the target project
        //
        let mut store = store::open_store(cfg)?;
        let mut proj = super::load_project(store.as_mut(), *project)?;

        //
        // 3. Optionally create the Jira issue first so the link lands on
        //    the new item. A gateway failure is reported and the item
        //    proceeds without a link.
        //
        if *jira {
            match create_jira_link(cfg, &draft) {
                Ok(link) => draft.jira = Some(link),
                Err(e) => warning(format!("Jira issue not created: {}", e)),
            }
        }

        //
        // 4. Apply the engine mutation and persist
        //
        let jira_key = draft.jira.as_ref().map(|j| j.issue_key.clone());
        let id = hierarchy::add_item(&mut proj, draft, *parent)?;
        store.update_project(&proj)?;

        super::audit(
            cfg,
            "item_add",
            &format!("{}/{}", project, id),
            &format!("Added {} '{}'", item_type.as_str(), name),
        );

        match jira_key {
            Some(key) => success(format!("Item #{} '{}' added (Jira {}).", id, name, key)),
            None => success(format!("Item #{} '{}' added.", id, name)),
        }
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

fn create_jira_link(cfg: &Config, draft: &ItemDraft) -> AppResult<JiraLink> {
    let client = JiraClient::from_config(&cfg.jira)?;

    // Throwaway item carrying the draft fields; the client only reads
    // name, type, priority and end date.
    let probe = WorkItem {
        id: 0,
        name: draft.name.clone(),
        item_type: draft.item_type,
        level: draft.item_type.default_level(),
        parent_id: None,
        children: Vec::new(),
        status: draft.status,
        priority: draft.priority,
        assignee: draft.assignee.clone(),
        start_date: draft.start_date.clone(),
        end_date: draft.end_date.clone(),
        estimated_hours: draft.estimated_hours,
        actual_hours: draft.actual_hours,
        comments: Vec::new(),
        jira: None,
    };

    let created = client.create_issue(&probe, &cfg.jira.default_project)?;
    Ok(JiraLink::synced(
        &cfg.jira.url,
        &created.key,
        &created.id,
        issue_type_name(draft.item_type),
    ))
}
