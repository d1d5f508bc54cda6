//! In-memory state of one data-entry session.

use crate::models::{Entry, GeoReading};

#[derive(Debug, Default)]
pub struct Session {
    latitude: Option<f64>,
    longitude: Option<f64>,
    location_requested: bool,
    photo: Option<Vec<u8>>,
    entries: Vec<Entry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_location(&mut self) {
        self.location_requested = true;
    }

    pub fn set_pending_location(&mut self, latitude: Option<f64>, longitude: Option<f64>) {
        self.latitude = latitude;
        self.longitude = longitude;
    }

    pub fn apply_reading(&mut self, reading: GeoReading) {
        self.set_pending_location(reading.latitude, reading.longitude);
    }

    pub fn set_pending_photo(&mut self, bytes: Vec<u8>) {
        self.photo = Some(bytes);
    }

    /// Append a submitted entry and clear every pending field at once.
    pub fn append_and_reset_pending(&mut self, entry: Entry) {
        self.entries.push(entry);
        self.latitude = None;
        self.longitude = None;
        self.location_requested = false;
        self.photo = None;
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    pub fn location_requested(&self) -> bool {
        self.location_requested
    }

    pub fn photo(&self) -> Option<&[u8]> {
        self.photo.as_deref()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> Entry {
        Entry {
            identifier: id.into(),
            species: "Unknown sp".into(),
            height: "1".into(),
            dbh: "1".into(),
            canopy: "10".into(),
            latitude: Some(1.0),
            longitude: Some(2.0),
        }
    }

    #[test]
    fn reset_clears_all_pending_fields_together() {
        let mut s = Session::new();
        s.request_location();
        s.set_pending_location(Some(1.3), Some(103.8));
        s.set_pending_photo(vec![0xFF, 0xD8]);

        s.append_and_reset_pending(entry("GGN/25/A1"));

        assert_eq!(s.latitude(), None);
        assert_eq!(s.longitude(), None);
        assert!(!s.location_requested());
        assert!(s.photo().is_none());
        assert_eq!(s.entries().len(), 1);
    }

    #[test]
    fn reset_on_empty_session_still_leaves_it_clear() {
        let mut s = Session::new();
        s.append_and_reset_pending(entry("GGN/25/A1"));
        s.append_and_reset_pending(entry("GGN/25/A2"));

        assert!(s.latitude().is_none() && s.longitude().is_none());
        assert!(!s.location_requested());
        let ids: Vec<_> = s.entries().iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(ids, ["GGN/25/A1", "GGN/25/A2"]);
    }
}
