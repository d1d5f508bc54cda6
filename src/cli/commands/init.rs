use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped with `--test`)
///  - the shared store and its schema
///  - the header row of the configured sheet
pub fn handle(cli: &Cli, config_path: &Path) -> AppResult<()> {
    let custom = cli.db.as_deref().map(expand_tilde);
    let db_path = Config::init_all(config_path, custom.as_deref(), cli.test)?;
    let cfg = Config::load_from(config_path)?;

    println!("⚙️  Initializing treeqr…");
    println!("📄 Config file : {}", config_path.display());
    println!("🗄️  Store      : {}", db_path.display());

    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(&db_path)?;
    init_db(&conn, &cfg.sheet_name)?;

    println!("✅ Sheet '{}' ready", cfg.sheet_name);

    if let Err(e) = log::ttlog(
        &conn,
        "init",
        &cfg.sheet_name,
        &format!("Store initialized at {}", db_path.display()),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 treeqr initialization completed!");
    Ok(())
}
