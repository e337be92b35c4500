use crate::models::check_type::CheckType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for wsflow
/// Launcher workflow for the Wantedspace attendance API, plus a live stream opener
#[derive(Parser)]
#[command(
    name = "wsflow",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance check-in/out and worktime lookups for launcher workflows",
    long_about = None
)]
pub struct Cli {
    /// Configuration file (JSON, or YAML by extension)
    #[arg(global = true, long = "config", env = "WSFLOW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr (WSFLOW_LOG overrides)
    #[arg(global = true, short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Script filter: print the launcher item list for a query
    #[command(disable_help_flag = true)]
    Query {
        /// Free-text query; empty shows the default menu. Leading hyphens
        /// are part of the query, words are joined with a space
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Check in, check out or go away
    Check {
        #[arg(value_enum)]
        kind: CheckType,

        #[arg(long, help = "User email (default: configured user)")]
        email: Option<String>,
    },

    /// Show worktime records for a date
    View {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,

        #[arg(long, help = "Only this user")]
        email: Option<String>,
    },

    /// Edit one day's worktime; only the given fields are changed
    Update {
        #[arg(long, help = "Date to edit (YYYY-MM-DD)")]
        date: String,

        #[arg(long, help = "User email (default: configured user)")]
        email: Option<String>,

        #[arg(long = "in", help = "New clock-in time")]
        start: Option<String>,

        #[arg(long = "out", help = "New clock-out time")]
        end: Option<String>,

        #[arg(long, help = "Memo attached to the day")]
        memo: Option<String>,

        #[arg(
            long = "except",
            value_name = "JSON",
            help = "Work exceptions as a JSON array"
        )]
        exceptions: Option<String>,
    },

    /// Delete one day's worktime
    Delete {
        #[arg(long, help = "Date to delete (YYYY-MM-DD)")]
        date: String,

        #[arg(long, help = "User email")]
        email: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Inspect the configuration file
    Config {
        #[arg(long = "path", help = "Print the resolved configuration path")]
        path: bool,

        #[arg(long = "print", help = "Print the configuration with credentials masked")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration file")]
        check: bool,
    },

    /// Open a live channel in the desktop player
    Stream {
        /// Channel name or URL (default: configured channel)
        channel: Option<String>,

        #[arg(long, short, help = "Rendition label, e.g. 720p60, or 'best'")]
        quality: Option<String>,

        #[arg(long, help = "List available renditions and exit")]
        list: bool,

        #[arg(long = "print-url", help = "Print the playback URL instead of opening it")]
        print_url: bool,
    },
}
