use crate::cli::parser::Commands;
use crate::config::{Config, JiraConfig};
use crate::core::hierarchy;
use crate::errors::{AppError, AppResult};
use crate::jira::{JiraClient, mapping};
use crate::store;
use crate::ui::messages::{confirm, info, success};

/// Manage the Jira connection and import issues.
pub fn handle(cmd: &Commands, cfg: &Config, is_test: bool) -> AppResult<()> {
    if let Commands::Jira {
        connect,
        disconnect,
        test,
        import,
        project,
        url,
        email,
        api_token,
        project_key,
        auto_sync,
        yes,
    } = cmd
    {
        if *connect {
            handle_connect(cfg, url, email, api_token, project_key, *auto_sync, is_test)?;
        }

        if *disconnect {
            if !is_test {
                let mut updated = cfg.clone();
                updated.jira = JiraConfig::default();
                updated.save()?;
            }
            success("Disconnected from Jira.");
        }

        if *test {
            let client = JiraClient::from_config(&cfg.jira)?;
            let me = client.test_connection()?;
            success(format!("Connected to Jira as {}.", me.display_name));
        }

        if *import {
            let target = project.ok_or_else(|| {
                AppError::Validation("--import requires --project <id>".to_string())
            })?;
            handle_import(cfg, target, *yes)?;
        }
    }

    Ok(())
}

fn handle_connect(
    cfg: &Config,
    url: &Option<String>,
    email: &Option<String>,
    api_token: &Option<String>,
    project_key: &Option<String>,
    auto_sync: bool,
    is_test: bool,
) -> AppResult<()> {
    let (Some(url), Some(email), Some(token), Some(key)) = (url, email, api_token, project_key)
    else {
        return Err(AppError::Validation(
            "connect requires --url, --email, --token and --project-key".to_string(),
        ));
    };

    let mut updated = cfg.clone();
    updated.jira = JiraConfig {
        url: url.trim_end_matches('/').to_string(),
        email: email.clone(),
        api_token: token.clone(),
        default_project: key.clone(),
        auto_sync,
        connected: true,
        ..cfg.jira
    };

    // Probe the credentials before persisting them.
    let client = JiraClient::from_config(&updated.jira)?;
    let me = client.test_connection()?;

    if !is_test {
        updated.save()?;
    }
    success(format!(
        "Successfully connected to Jira as {} ({}).",
        me.display_name, updated.jira.url
    ));
    Ok(())
}

fn handle_import(cfg: &Config, target: i64, yes: bool) -> AppResult<()> {
    let client = JiraClient::from_config(&cfg.jira)?;
    let issues = client.search_issues(&cfg.jira.default_project)?;

    if issues.is_empty() {
        info(format!(
            "No issues found in Jira project {}.",
            cfg.jira.default_project
        ));
        return Ok(());
    }

    let drafts: Vec<_> = issues
        .iter()
        .map(|issue| mapping::issue_to_draft(issue, &cfg.jira))
        .collect();

    super::import::print_preview(&drafts);

    if !yes
        && !confirm(&format!(
            "Import {} issue(s) into project #{}?",
            drafts.len(),
            target
        ))
    {
        info("Import cancelled.");
        return Ok(());
    }

    let mut store = store::open_store(cfg)?;
    let mut proj = super::load_project(store.as_mut(), target)?;

    let count = drafts.len();
    hierarchy::import_batch(&mut proj, drafts);
    store.update_project(&proj)?;

    super::audit(
        cfg,
        "jira_import",
        &target.to_string(),
        &format!("Imported {} issue(s) from {}", count, cfg.jira.default_project),
    );
    success(format!("Successfully imported {} issue(s)!", count));
    Ok(())
}
