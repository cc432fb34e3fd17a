use csv::Writer;
use std::path::Path;

use super::model::{ItemExport, get_headers, item_to_row};
use crate::errors::{AppError, AppResult};

/// Write item rows as CSV.
pub fn write_csv(path: &Path, rows: &[ItemExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("cannot write {}: {}", path.display(), e)))?;

    wtr.write_record(get_headers())
        .map_err(|e| AppError::Export(e.to_string()))?;

    for row in rows {
        wtr.write_record(item_to_row(row))
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
