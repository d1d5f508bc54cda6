use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::{FieldContext, location_source};
use crate::core::session::Session;
use crate::core::submit::check_local;
use crate::errors::AppResult;
use crate::models::{GeoReading, TreeForm};
use crate::ui::messages::{info, success};
use crate::ui::report::print_receipt;
use crate::utils::path::expand_tilde;
use std::fs;

/// Submit one entry: a one-shot session holding a single submission.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        suffix,
        species,
        height,
        dbh,
        canopy,
        lat,
        lon,
        locate,
        photo,
    } = cmd
    {
        //
        // 1. Resolve the form against the catalog
        //
        let form = cfg.catalog.build_form(TreeForm {
            suffix: suffix.clone(),
            species: species.clone(),
            height: height.clone(),
            dbh: dbh.clone(),
            canopy: canopy.clone(),
        })?;

        let mut session = Session::new();

        //
        // 2. Location: explicit coordinates, or the device when --locate
        //
        let manual = match (lat, lon) {
            (Some(la), Some(lo)) => Some(GeoReading::new(*la, *lo)?),
            _ => None,
        };

        if manual.is_some() || *locate {
            session.request_location();
            match location_source(cfg.location_command.as_deref(), manual)? {
                Some(mut source) => match source.request()? {
                    Some(reading) => session.apply_reading(reading),
                    None => info("No location data available yet."),
                },
                None => info("No location_command configured."),
            }
        }

        //
        // 3. Photo
        //
        if let Some(path) = photo {
            session.set_pending_photo(fs::read(expand_tilde(path))?);
            success("QR image captured.");
        }

        // Nothing touches the shared store until the entry is locally valid.
        check_local(&session, &form)?;

        //
        // 4. Submit
        //
        let ctx = FieldContext::open(cfg)?;
        let receipt = ctx.workflow.submit(&mut session, &form)?;
        print_receipt(&receipt);
    }

    Ok(())
}
