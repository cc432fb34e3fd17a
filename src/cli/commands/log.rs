use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::sqlite::{SqliteStore, read_log};
use crate::utils::table::{Column, Table};

/// Print the internal operation log (SQLite backend only).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print, limit } = cmd
        && *print
    {
        let store = SqliteStore::open(&cfg.database)?;
        let rows = read_log(&store.conn, *limit)?;

        if rows.is_empty() {
            println!("Log is empty.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("DATE", 28),
            Column::new("OPERATION", 14),
            Column::new("TARGET", 10),
            Column::new("MESSAGE", 40),
        ]);
        for (date, operation, target, message) in rows {
            table.add_row(vec![date, operation, target, message]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
