use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::remote::DriveStore;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Photo { link, out } = cmd {
        let drive = DriveStore::open(
            &cfg.database,
            &cfg.drive_folder_id,
            &cfg.link_template,
            expand_tilde(&cfg.staging_dir),
        )?;

        let obj = drive
            .fetch_public(link)?
            .ok_or_else(|| AppError::Other(format!("no public photo for '{link}'")))?;

        let out = expand_tilde(out);
        fs::write(&out, &obj.data)?;
        success(format!(
            "Saved {} ({}, {} bytes) to {}",
            obj.name,
            obj.mime_type,
            obj.data.len(),
            out.display()
        ));
    }
    Ok(())
}
