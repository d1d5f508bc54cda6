// src/export/mod.rs

mod delimited;
mod fs_utils;
mod json;
pub mod logic;
mod model;
mod xlsx;

pub use delimited::to_delimited_text;
pub use json::to_json;
pub use logic::ExportLogic;
pub use xlsx::{to_workbook_file, workbook_file_name, write_workbook};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            "xlsx" | "excel" => Some(ExportFormat::Xlsx),
            _ => None,
        }
    }
}
