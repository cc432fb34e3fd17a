use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::sqlite::SqliteStore;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};
use std::fs;

/// SQLite maintenance: integrity check, vacuum, file info.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    {
        // Opening the store also applies pending schema migrations.
        let mut store = SqliteStore::open(&cfg.database)?;

        if *info {
            print_db_info(&mut store, &cfg.database)?;
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = store
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            store.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}

fn print_db_info(store: &mut SqliteStore, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    let projects: i64 = store
        .conn
        .query_row("SELECT COUNT(*) FROM projects", [], |row| row.get(0))?;
    println!(
        "{}• Total projects:{} {}{}{}",
        CYAN, RESET, GREEN, projects, RESET
    );

    let log_rows: i64 = store
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log rows:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
