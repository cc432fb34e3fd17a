// src/export/xlsx.rs

use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook};
use std::io;
use std::path::Path;

use super::model::{ItemExport, get_headers, item_to_row};
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;

/// XLSX export with a styled header row and banded data rows.
pub(crate) fn export_xlsx(rows: &[ItemExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    if rows.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_io_app_error)?;
        workbook.save(path_str(path)?).map_err(to_io_app_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, item) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        let fmt = Format::new()
            .set_background_color(band_color)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        for (col, value) in item_to_row(item).iter().enumerate() {
            // Numbers as numbers so spreadsheet formulas keep working.
            if let Ok(num) = value.parse::<f64>() {
                worksheet
                    .write_with_format(row, col as u16, num, &fmt)
                    .map_err(to_io_app_error)?;
            } else {
                worksheet
                    .write_with_format(row, col as u16, value.as_str(), &fmt)
                    .map_err(to_io_app_error)?;
            }

            col_widths[col] = col_widths[col].max(value.chars().count());
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_io_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}
