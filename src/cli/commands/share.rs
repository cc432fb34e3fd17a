use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::share;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{confirm, info, success};

/// Create a share link from the local projects, or import one.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Share { make, from, yes } = cmd {
        let mut store = store::open_store(cfg)?;

        if *make {
            let projects = store.load_projects()?;
            let link = share::make_link(&cfg.share_base_url, &projects)?;
            println!("{}", link);
            info("Send this link to your team members.");
        }

        if let Some(input) = from {
            let payload = share::decode_link(input)?;

            let prompt = format!(
                "Replace ALL local data with {} shared project(s) (shared {})?",
                payload.projects.len(),
                payload.shared_date
            );
            if !*yes && !confirm(&prompt) {
                info("Import cancelled.");
                return Ok(());
            }

            store.replace_all(&payload.projects)?;
            success("Shared data imported successfully!");
        }
    }

    Ok(())
}
