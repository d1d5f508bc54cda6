//! Everything a data-entry command needs, built once from the configuration.

use crate::config::Config;
use crate::core::location::{CommandLocation, LocationSource, ManualLocation};
use crate::core::submit::SubmissionWorkflow;
use crate::errors::AppResult;
use crate::models::{Catalog, GeoReading, IdTemplate};
use crate::remote::{DriveStore, SheetStore};
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

pub struct FieldContext {
    pub workflow: SubmissionWorkflow<SheetStore, DriveStore>,
    pub catalog: Catalog,
    pub template: IdTemplate,
    pub location_command: Option<String>,
    pub export_dir: PathBuf,
}

impl FieldContext {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let remote = SheetStore::open(&cfg.database, &cfg.sheet_name)?;
        let media = DriveStore::open(
            &cfg.database,
            &cfg.drive_folder_id,
            &cfg.link_template,
            expand_tilde(&cfg.staging_dir),
        )?;

        Ok(Self {
            workflow: SubmissionWorkflow::new(
                remote,
                media,
                cfg.id_template(),
                cfg.failure_policy.clone(),
            ),
            catalog: cfg.catalog.clone(),
            template: cfg.id_template(),
            location_command: cfg.location_command.clone(),
            export_dir: expand_tilde(&cfg.export_dir),
        })
    }

    /// The configured device source, if any.
    pub fn device_location(&self) -> AppResult<Option<Box<dyn LocationSource>>> {
        device_location(self.location_command.as_deref())
    }
}

/// Source behind `location_command`, if one is configured.
pub fn device_location(command: Option<&str>) -> AppResult<Option<Box<dyn LocationSource>>> {
    match command {
        Some(line) if !line.trim().is_empty() => {
            Ok(Some(Box::new(CommandLocation::from_command_line(line)?)))
        }
        _ => Ok(None),
    }
}

/// Manual coordinates win over the device source.
pub fn location_source(
    command: Option<&str>,
    manual: Option<GeoReading>,
) -> AppResult<Option<Box<dyn LocationSource>>> {
    if manual.is_some() {
        return Ok(Some(Box::new(ManualLocation(manual))));
    }
    device_location(command)
}
