use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::remote::RemoteStore;
use crate::utils::table::{Column, Table};

/// List public holidays for a year from the remote server's lookup table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Holidays { year } = cmd {
        let remote = RemoteStore::new(&cfg.remote_url)?;
        let holidays = remote.holidays(*year)?;

        if holidays.is_empty() {
            println!("No holidays found for {}.", year);
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("DATE", 12),
            Column::new("NAME", 32),
            Column::new("TYPE", 12),
        ]);
        for h in &holidays {
            table.add_row(vec![h.date.clone(), h.name.clone(), h.kind.clone()]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
