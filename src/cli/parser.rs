use crate::export::ExportFormat;
use crate::models::Track;
use clap::{Parser, Subcommand};

/// Command-line interface definition for gearminder
#[derive(Parser)]
#[command(
    name = "gearminder",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track TRTR/MNTT inspection cycles for equipment and email a reminder when they are due",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or a second gear list)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the gear store
    Init {
        /// Create an empty store instead of loading the sample gear list
        #[arg(long)]
        empty: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Add a new piece of gear with no dates
    Add {
        /// Equipment name (case-sensitive, must be unique)
        name: String,
    },

    /// Record that a track was opened; the next opening is due 14 days later
    Open {
        /// Equipment name; created if it does not exist yet
        name: String,

        /// Track that was opened: trtr or mntt
        #[arg(value_enum, ignore_case = true)]
        track: Track,

        /// Opening date (YYYY-MM-DD), default today
        #[arg(long, short)]
        date: Option<String>,
    },

    /// Check what is due and send the reminder email now
    Remind {
        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long, short)]
        date: Option<String>,

        /// Print the email instead of sending it; nothing is marked or saved
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// Show the gear table
    List {
        /// Show only gear with a track due on the given day
        #[arg(long)]
        due: bool,

        /// Day used by --due (YYYY-MM-DD), default today
        #[arg(long, short, requires = "due")]
        date: Option<String>,
    },

    /// Export the gear table
    Export {
        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import a gear list from an .xlsx workbook or a CSV file in an older layout
    Import {
        /// File to read (.xlsx/.xlsm or .csv)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Replace a store that already holds gear
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the store file
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup into a .zip archive
        #[arg(long)]
        compress: bool,
    },
}
