use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::remote::{RemoteStore, SheetStore};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = SheetStore::open(&cfg.database, &cfg.sheet_name)?;
        let entries = store.fetch_all_entries()?;
        let file = file.as_deref().map(expand_tilde);

        ExportLogic::export(
            &entries,
            *format,
            file.as_deref(),
            &expand_tilde(&cfg.export_dir),
            *force,
        )?;
    }
    Ok(())
}
