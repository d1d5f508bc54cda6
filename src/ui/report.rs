//! Rendering of submission results and entry lists.

use crate::core::submit::SubmissionReceipt;
use crate::models::{COLUMNS, Catalog, Entry};
use crate::models::entry::format_coord;
use crate::ui::messages::{success, warning};
use crate::utils::table::{Column, Table};
use unicode_width::UnicodeWidthStr;

pub fn print_receipt(receipt: &SubmissionReceipt) {
    if let Some(url) = &receipt.photo_url {
        success(format!("QR image uploaded successfully: {url}"));
    }
    if let Some(err) = &receipt.upload_error {
        warning(format!("Photo not uploaded ({err}); entry saved without it."));
    }
    success(format!("Entry {} added.", receipt.entry.identifier));
}

/// Species, height and DBH choices offered by the tree form.
pub fn print_catalog(catalog: &Catalog) {
    println!("Species:");
    for (i, s) in catalog.species.iter().enumerate() {
        println!("  {:>2}. {s}", i + 1);
    }
    println!("Overall Height (m): {}", catalog.heights.join(", "));
    println!("DBH (cm): {}", catalog.dbh.join(", "));
}

/// Entries as an aligned text table.
pub fn entries_table(entries: &[Entry]) -> String {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.identifier.clone(),
                e.species.clone(),
                e.height.clone(),
                e.dbh.clone(),
                e.canopy.clone(),
                format_coord(e.latitude),
                format_coord(e.longitude),
            ]
        })
        .collect();

    let columns = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, h)| Column {
            header: h.to_string(),
            width: rows
                .iter()
                .map(|r| UnicodeWidthStr::width(r[i].as_str()))
                .chain(std::iter::once(h.len()))
                .max()
                .unwrap_or(h.len()),
        })
        .collect();

    let mut table = Table::new(columns);
    for row in rows {
        table.add_row(row);
    }
    table.render()
}
