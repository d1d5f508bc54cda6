//! Sources of the device position.

use crate::errors::{AppError, AppResult};
use crate::models::GeoReading;
use std::process::Command;

pub trait LocationSource {
    /// `Ok(None)` means no data yet (permission pending or denied).
    fn request(&mut self) -> AppResult<Option<GeoReading>>;
}

/// Coordinates typed in by the user.
pub struct ManualLocation(pub Option<GeoReading>);

impl LocationSource for ManualLocation {
    fn request(&mut self) -> AppResult<Option<GeoReading>> {
        Ok(self.0.take())
    }
}

/// Runs an external program (e.g. `termux-location`) that prints a JSON reading.
pub struct CommandLocation {
    program: String,
    args: Vec<String>,
}

impl CommandLocation {
    /// Split a configured command line on whitespace.
    pub fn from_command_line(line: &str) -> AppResult<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| AppError::Config("location_command is empty".into()))?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl LocationSource for CommandLocation {
    fn request(&mut self) -> AppResult<Option<GeoReading>> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| AppError::Location(format!("cannot run '{}': {e}", self.program)))?;

        if !output.status.success() {
            return Ok(None);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim().is_empty() {
            return Ok(None);
        }

        let reading = GeoReading::from_json(stdout.trim())?;
        let any = reading.latitude.is_some() || reading.longitude.is_some();
        Ok(any.then_some(reading))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_source_answers_once() {
        let mut src = ManualLocation(Some(GeoReading::new(1.0, 2.0).unwrap()));
        assert!(src.request().unwrap().is_some());
        assert!(src.request().unwrap().is_none());
    }

    #[test]
    fn empty_command_line_is_rejected() {
        assert!(CommandLocation::from_command_line("   ").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn out_of_range_device_reading_is_rejected() {
        let mut src =
            CommandLocation::from_command_line(r#"echo {"latitude":123.0,"longitude":103.8}"#)
                .unwrap();
        assert!(matches!(src.request(), Err(AppError::InvalidCoordinates(_))));
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_means_no_data() {
        let mut src = CommandLocation::from_command_line("false").unwrap();
        assert!(src.request().unwrap().is_none());
    }
}
