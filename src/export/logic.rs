// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_writable, write_bytes};
use crate::export::xlsx::{to_workbook_file, workbook_file_name, write_workbook};
use crate::export::{ExportFormat, notify_export_success, to_delimited_text, to_json};
use crate::models::Entry;
use crate::ui::messages::{info, warning};
use chrono::Local;
use std::path::{Path, PathBuf};

/// High-level export: picks the format, resolves the output path and writes it.
pub struct ExportLogic;

impl ExportLogic {
    /// Default file name for `format` (the workbook name carries the current time).
    pub fn default_file_name(format: ExportFormat) -> String {
        match format {
            ExportFormat::Csv => "tree_data.csv".to_string(),
            ExportFormat::Json => "tree_data.json".to_string(),
            ExportFormat::Xlsx => workbook_file_name(&Local::now()),
        }
    }

    /// Export `entries`.
    ///
    /// - `file`: explicit output path; `None` writes the default name into `export_dir`
    /// - `force`: overwrite without asking
    ///
    /// Returns `None` when there is nothing to export.
    pub fn export(
        entries: &[Entry],
        format: ExportFormat,
        file: Option<&Path>,
        export_dir: &Path,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        if entries.is_empty() {
            warning("No entries to export.");
            return Ok(None);
        }

        // Timestamped workbooks never collide with an earlier export.
        if format == ExportFormat::Xlsx && file.is_none() {
            return Ok(Some(to_workbook_file(entries, export_dir, &Local::now())?));
        }

        let path = match file {
            Some(p) => p.to_path_buf(),
            None => export_dir.join(Self::default_file_name(format)),
        };

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => {
                info(format!("Exporting to CSV: {}", path.display()));
                write_bytes(&path, &to_delimited_text(entries)?)?;
                notify_export_success("CSV", &path);
            }
            ExportFormat::Json => {
                info(format!("Exporting to JSON: {}", path.display()));
                write_bytes(&path, &to_json(entries)?)?;
                notify_export_success("JSON", &path);
            }
            ExportFormat::Xlsx => {
                if let Some(parent) = path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    std::fs::create_dir_all(parent)?;
                }
                write_workbook(entries, &path)?;
            }
        }

        Ok(Some(path))
    }
}
