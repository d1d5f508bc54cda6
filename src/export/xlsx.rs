// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ExportCell, entries_to_table};
use crate::export::notify_export_success;
use crate::models::Entry;
use crate::ui::messages::info;
use chrono::{DateTime, TimeZone};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::fs;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

const SHEET_NAME: &str = "Trees";

/// `tree_data_<YYYYMMDD_HHMMSS>.xlsx`
pub fn workbook_file_name<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("tree_data_{}.xlsx", now.format("%Y%m%d_%H%M%S"))
}

/// Write the session entries to a timestamped workbook inside `dir`.
pub fn to_workbook_file<Tz: TimeZone>(
    entries: &[Entry],
    dir: &Path,
    now: &DateTime<Tz>,
) -> AppResult<PathBuf>
where
    Tz::Offset: std::fmt::Display,
{
    fs::create_dir_all(dir)?;
    let path = dir.join(workbook_file_name(now));
    write_workbook(entries, &path)?;
    Ok(path)
}

/// One sheet, styled header, one row per entry. Photos are referenced by link only.
pub fn write_workbook(entries: &[Entry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_export_error)?;

    let table = entries_to_table(entries);
    let mut col_widths: Vec<usize> = vec![0; table.first().map_or(0, Vec::len)];

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x3A7D44))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let band1 = Color::RGB(0xEEF6EC);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, cells) in table.iter().enumerate() {
        let row = row_index as u32;
        let format = if row_index == 0 {
            header_format.clone()
        } else {
            let band = if row_index % 2 == 1 { band1 } else { band2 };
            Format::new()
                .set_background_color(band)
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin)
        };

        for (col, cell) in cells.iter().enumerate() {
            write_cell(worksheet, row, col as u16, cell, &format)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(cell.text().as_str()));
        }
    }

    worksheet.set_freeze_panes(1, 0).ok();

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &ExportCell,
    format: &Format,
) -> AppResult<()> {
    let written = match cell {
        ExportCell::Number(n) => {
            let fmt = format.clone().set_align(FormatAlign::Right);
            worksheet.write_with_format(row, col, *n, &fmt)
        }
        ExportCell::Text(s) => worksheet.write_with_format(row, col, s.as_str(), format),
    };
    written.map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
