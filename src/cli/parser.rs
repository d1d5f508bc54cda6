use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for treeqr
#[derive(Parser)]
#[command(
    name = "treeqr",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record QR-tagged trees with GPS coordinates and photos into a shared sheet",
    long_about = None
)]
pub struct Cli {
    /// Override the shared store path (useful for tests or custom stores)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the shared store
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "List keys missing from the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Maintain the shared store (migrations, integrity, info)
    Db {
        #[arg(long = "migrate", help = "Run pending schema migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check store integrity")]
        check: bool,

        #[arg(long = "info", help = "Show store information")]
        info: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Submit one tree entry
    Add {
        /// Tree name suffix (the site and year prefix are added automatically)
        suffix: String,

        #[arg(long, help = "Species name or its number in the species list")]
        species: String,

        #[arg(long, help = "Overall height category (m)")]
        height: String,

        #[arg(long, help = "Diameter at breast height category (cm)")]
        dbh: String,

        #[arg(long, help = "Canopy diameter (cm)")]
        canopy: String,

        #[arg(long, allow_hyphen_values = true, requires = "lon", help = "Latitude in degrees")]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true, requires = "lat", help = "Longitude in degrees")]
        lon: Option<f64>,

        #[arg(
            long,
            conflicts_with = "lat",
            help = "Ask the configured location_command for the position"
        )]
        locate: bool,

        #[arg(long, value_name = "FILE", help = "QR code photo to upload")]
        photo: Option<String>,
    },

    /// List entries stored in the shared sheet
    List {
        #[arg(long = "options", help = "Show species, height and DBH options instead")]
        options: bool,
    },

    /// Export every entry of the shared sheet
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default: export_dir)")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite without asking")]
        force: bool,
    },

    /// Download an uploaded photo by link or id
    Photo {
        /// Link returned at upload time, or the bare object id
        link: String,

        #[arg(long, value_name = "FILE")]
        out: String,
    },

    /// Start an interactive data-entry session
    Session,
}
