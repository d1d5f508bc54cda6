use crate::errors::{AppError, AppResult};
use serde::Deserialize;

/// A geolocation answer. Either coordinate may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct GeoReading {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ReadingJson {
    Browser { coords: GeoReading },
    Flat(GeoReading),
}

impl GeoReading {
    pub fn new(latitude: f64, longitude: f64) -> AppResult<Self> {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
        .checked()
    }

    /// Reject coordinates outside -90..90 / -180..180. Missing ones pass.
    fn checked(self) -> AppResult<Self> {
        if let Some(lat) = self.latitude
            && !(-90.0..=90.0).contains(&lat)
        {
            return Err(AppError::InvalidCoordinates(format!(
                "latitude {lat} is outside -90..90"
            )));
        }
        if let Some(lon) = self.longitude
            && !(-180.0..=180.0).contains(&lon)
        {
            return Err(AppError::InvalidCoordinates(format!(
                "longitude {lon} is outside -180..180"
            )));
        }
        Ok(self)
    }

    /// Parse `"<lat> <lon>"` or `"<lat>,<lon>"`.
    pub fn parse_pair(input: &str) -> AppResult<Self> {
        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        if parts.len() != 2 {
            return Err(AppError::InvalidCoordinates(format!(
                "expected '<lat> <lon>', got '{input}'"
            )));
        }

        let lat = parts[0]
            .parse::<f64>()
            .map_err(|_| AppError::InvalidCoordinates(format!("bad latitude '{}'", parts[0])))?;
        let lon = parts[1]
            .parse::<f64>()
            .map_err(|_| AppError::InvalidCoordinates(format!("bad longitude '{}'", parts[1])))?;

        Self::new(lat, lon)
    }

    /// Accepts `{"latitude":..,"longitude":..}` or `{"coords":{..}}`.
    pub fn from_json(text: &str) -> AppResult<Self> {
        let parsed: ReadingJson = serde_json::from_str(text)
            .map_err(|e| AppError::Location(format!("unreadable location payload: {e}")))?;
        match parsed {
            ReadingJson::Browser { coords } => coords,
            ReadingJson::Flat(r) => r,
        }
        .checked()
    }
}
