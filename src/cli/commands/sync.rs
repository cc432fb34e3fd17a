use std::thread;
use std::time::Duration;

use crate::cli::parser::Commands;
use crate::config::{Backend, Config};
use crate::errors::{AppError, AppResult};
use crate::store::remote::RemoteStore;
use crate::store::{self, Store};
use crate::ui::messages::{confirm, info, success, warning};

/// Synchronize the local store with the remote team server.
///
/// Pull is last-fetch-wins: the remote snapshot replaces local state
/// with no merge, so a local edit made since the last push is lost.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sync {
        pull,
        push,
        watch,
        status,
        interval,
        yes,
    } = cmd
    {
        if cfg.backend == Backend::Remote {
            return Err(AppError::Config(
                "sync needs a local backend; the remote backend already reads the server directly"
                    .to_string(),
            ));
        }

        let mut remote = RemoteStore::new(&cfg.remote_url)?;

        if *status {
            let health = remote.health()?;
            success(format!(
                "Server {} — {} (database: {})",
                health.status, health.message, health.database
            ));
        }

        if *push {
            push_once(cfg, &mut remote)?;
        }

        if *pull {
            if !*yes
                && !confirm("Pull replaces ALL local projects with the remote snapshot. Continue?")
            {
                info("Pull cancelled.");
                return Ok(());
            }
            pull_once(cfg, &mut remote)?;
        }

        if *watch {
            let secs = interval.unwrap_or(cfg.sync_interval_secs).max(1);
            info(format!(
                "Watching remote every {}s (last fetch wins; Ctrl-C to stop)…",
                secs
            ));
            loop {
                if let Err(e) = pull_once(cfg, &mut remote) {
                    // Non-fatal: local state stays authoritative until
                    // the next successful poll.
                    warning(format!("sync failed: {}", e));
                }
                thread::sleep(Duration::from_secs(secs));
            }
        }
    }

    Ok(())
}

fn pull_once(cfg: &Config, remote: &mut RemoteStore) -> AppResult<()> {
    let projects = remote.load_projects()?;
    let mut local = store::open_store(cfg)?;
    local.replace_all(&projects)?;
    success(format!("Pulled {} project(s) from the server.", projects.len()));
    Ok(())
}

fn push_once(cfg: &Config, remote: &mut RemoteStore) -> AppResult<()> {
    let mut local = store::open_store(cfg)?;
    let projects = local.load_projects()?;

    for p in &projects {
        remote.update_project(p)?;
    }
    success(format!("Pushed {} project(s) to the server.", projects.len()));
    Ok(())
}
