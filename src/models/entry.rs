use serde::{Deserialize, Serialize};

/// Column headers of the shared sheet and of every export, in order.
pub const COLUMNS: [&str; 7] = [
    "Tree Name",
    "Name",
    "Overall Height",
    "DBH",
    "Canopy",
    "Latitude",
    "Longitude",
];

/// One recorded tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "Tree Name")]
    pub identifier: String,
    #[serde(rename = "Name")]
    pub species: String,
    #[serde(rename = "Overall Height")]
    pub height: String,
    #[serde(rename = "DBH")]
    pub dbh: String,
    #[serde(rename = "Canopy")]
    pub canopy: String,
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
}

impl Entry {
    /// Render the entry as the 7 text cells of a sheet row.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.identifier.clone(),
            self.species.clone(),
            self.height.clone(),
            self.dbh.clone(),
            self.canopy.clone(),
            format_coord(self.latitude),
            format_coord(self.longitude),
        ]
    }

    /// Rebuild an entry from sheet cells. Rows with fewer than 7 cells yield `None`.
    pub fn from_row(cells: &[String]) -> Option<Self> {
        if cells.len() < COLUMNS.len() {
            return None;
        }

        Some(Self {
            identifier: cells[0].clone(),
            species: cells[1].clone(),
            height: cells[2].clone(),
            dbh: cells[3].clone(),
            canopy: cells[4].clone(),
            latitude: parse_coord(&cells[5]),
            longitude: parse_coord(&cells[6]),
        })
    }
}

/// `f64` Display is the shortest representation that parses back to the same value.
pub fn format_coord(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn parse_coord(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
