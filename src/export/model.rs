// src/export/model.rs

use crate::models::entry::format_coord;
use crate::models::{COLUMNS, Entry};

/// One cell of a typed export. Only coordinates are numeric; the other
/// fields are free or catalog text and are kept exactly as entered.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ExportCell {
    Text(String),
    Number(f64),
}

impl ExportCell {
    fn coord(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => ExportCell::Number(v),
            other => ExportCell::Text(format_coord(other)),
        }
    }

    /// Display text, used for column widths.
    pub(crate) fn text(&self) -> String {
        match self {
            ExportCell::Text(s) => s.clone(),
            ExportCell::Number(n) => n.to_string(),
        }
    }
}

/// Header row as cells, in sheet column order.
pub(crate) fn header_cells() -> Vec<ExportCell> {
    COLUMNS
        .iter()
        .map(|h| ExportCell::Text(h.to_string()))
        .collect()
}

/// One entry as typed cells, in header order.
pub(crate) fn entry_to_cells(e: &Entry) -> Vec<ExportCell> {
    vec![
        ExportCell::Text(e.identifier.clone()),
        ExportCell::Text(e.species.clone()),
        ExportCell::Text(e.height.clone()),
        ExportCell::Text(e.dbh.clone()),
        ExportCell::Text(e.canopy.clone()),
        ExportCell::coord(e.latitude),
        ExportCell::coord(e.longitude),
    ]
}

/// Header followed by one row per entry.
pub(crate) fn entries_to_table(entries: &[Entry]) -> Vec<Vec<ExportCell>> {
    std::iter::once(header_cells())
        .chain(entries.iter().map(entry_to_cells))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_text_stays_text_and_missing_coordinates_are_empty() {
        let e = Entry {
            identifier: "GGN/25/A1".into(),
            species: "Dyera costulata".into(),
            height: "3".into(),
            dbh: "4".into(),
            canopy: "050".into(),
            latitude: Some(1.23),
            longitude: None,
        };

        let cells = entry_to_cells(&e);
        assert_eq!(cells[4], ExportCell::Text("050".into()));
        assert_eq!(cells[5], ExportCell::Number(1.23));
        assert_eq!(cells[6], ExportCell::Text(String::new()));
    }
}
