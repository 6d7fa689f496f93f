use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for hoslogger
/// CLI application to generate ELD daily logs and check HOS compliance
#[derive(Parser)]
#[command(
    name = "hoslogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate ELD daily logs, check Hours-of-Service compliance and keep a history in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Compact the database file")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database statistics")]
        info: bool,
    },

    /// Compute HOS totals for one day and generate its ELD log sheet
    Generate {
        /// Log input file (.json, or YAML for any other extension)
        #[arg(long, short, value_name = "FILE")]
        input: PathBuf,

        /// Compute and print only, do not store the log
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Print {id, log_sheet, remaining_hours} as JSON
        #[arg(long)]
        json: bool,
    },

    /// List stored ELD logs, most recent first
    List {
        /// Maximum number of logs (default: history_limit from config)
        #[arg(long, short)]
        limit: Option<usize>,

        /// Filter by log date: YYYY, YYYY-MM, YYYY-MM-DD or a start:end range
        #[arg(long, short)]
        period: Option<String>,
    },

    /// Show a stored ELD log exactly as it was generated
    Show {
        /// Log id (see `list`)
        id: i64,

        /// Print the full stored record as JSON
        #[arg(long)]
        json: bool,

        /// Also print the per-segment timeline
        #[arg(long)]
        details: bool,
    },

    /// Delete a stored ELD log and its duty status changes
    Del {
        /// Log id (see `list`)
        id: i64,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Print or manage the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export stored ELD logs
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Filter by log date (YYYY, YYYY-MM, YYYY-MM-DD, ranges start:end, or "all")
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
