use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::remote::{RemoteStore, SheetStore};
use crate::ui::messages::{header, info};
use crate::ui::report::{entries_table, print_catalog};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { options } = cmd {
        if *options {
            print_catalog(&cfg.catalog);
            return Ok(());
        }

        let store = SheetStore::open(&cfg.database, &cfg.sheet_name)?;
        let entries = store.fetch_all_entries()?;

        if entries.is_empty() {
            info(format!("No entries in sheet '{}'.", store.sheet_name()));
            return Ok(());
        }

        header(format!(
            "{} ({} entries)",
            store.sheet_name(),
            entries.len()
        ));
        print!("{}", entries_table(&entries));
    }
    Ok(())
}
