use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::hierarchy;
use crate::errors::AppResult;
use crate::jira::JiraClient;
use crate::store;
use crate::ui::messages::{success, warning};

/// Append a comment to a work item; optionally mirror it to Jira.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Comment {
        project,
        item,
        text,
        author,
        jira,
    } = cmd
    {
        let mut store = store::open_store(cfg)?;
        let mut proj = super::load_project(store.as_mut(), *project)?;

        let comment_id = hierarchy::add_comment(&mut proj, *item, text, author)?;

        // Mirror to Jira before saving so the posted flag survives.
        if *jira {
            let link = proj.item(*item).and_then(|i| i.jira.clone());
            match link {
                Some(link) => {
                    match JiraClient::from_config(&cfg.jira)
                        .and_then(|client| client.post_comment(&link.issue_key, text))
                    {
                        Ok(()) => {
                            if let Some(item) = proj.item_mut(*item)
                                && let Some(c) =
                                    item.comments.iter_mut().find(|c| c.id == comment_id)
                            {
                                c.posted_to_jira = true;
                            }
                            success(format!("Comment posted to Jira {}.", link.issue_key));
                        }
                        Err(e) => warning(format!("Comment not posted to Jira: {}", e)),
                    }
                }
                None => warning("Item has no linked Jira issue; comment kept local."),
            }
        }

        store.update_project(&proj)?;
        success(format!("Comment #{} added to item #{}.", comment_id, item));
    }

    Ok(())
}
