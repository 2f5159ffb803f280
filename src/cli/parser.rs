use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for cardtime
/// CLI front-end for the card time-tracking core
#[derive(Parser)]
#[command(
    name = "cardtime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track time on cards: timers, time ranges, estimates and report export",
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

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Start tracking time on a card
    Start {
        /// Card id to track time on
        card: String,

        /// Member starting the timer (default from config)
        #[arg(long = "member")]
        member: Option<String>,

        /// List the card currently sits in (kept for reporting context)
        #[arg(long = "list", default_value = "")]
        list: String,
    },

    /// Stop tracking time on a card
    Stop {
        /// Card id the timer runs on
        card: String,

        /// Member stopping the timer (default from config)
        #[arg(long = "member")]
        member: Option<String>,

        /// Drop the running timer without recording a time range
        #[arg(long = "discard")]
        discard: bool,
    },

    /// Show tracked time for one card, or all tracked cards
    Status {
        /// Card id (omit for all tracked cards)
        card: Option<String>,
    },

    /// Manage time ranges of a card by hand
    Range {
        /// Card id the range belongs to
        card: String,

        #[command(subcommand)]
        action: RangeAction,
    },

    /// Set or clear a member's effort estimate on a card
    Estimate {
        /// Card id the estimate belongs to
        card: String,

        /// Estimated effort as duration text (e.g. "1d 4h", "2.5h")
        time: Option<String>,

        /// Member the estimate belongs to (default from config)
        #[arg(long = "member")]
        member: Option<String>,

        /// Remove the member's estimate instead of setting one
        #[arg(long = "clear")]
        clear: bool,
    },

    /// Remove all tracked time of a card (ranges and running timers)
    Clear {
        /// Card id to clear
        card: String,
    },

    /// Export report rows for all tracked cards
    Export {
        /// Output format
        #[arg(long = "format", value_enum)]
        format: ExportFormat,

        /// Absolute path of the output file
        #[arg(long = "file")]
        file: String,

        /// Restrict tracked ranges to these member ids (repeatable)
        #[arg(long = "member")]
        members: Vec<String>,

        /// Board metadata JSON file (names for board, lists, members, cards)
        #[arg(long = "meta")]
        meta: Option<String>,

        /// Overwrite the output file if it exists
        #[arg(long = "force")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum RangeAction {
    /// Append a manually entered range
    Add {
        /// Member the range belongs to (default from config)
        #[arg(long = "member")]
        member: Option<String>,

        /// Range start as "YYYY-MM-DD HH:MM" local time
        #[arg(long = "start")]
        start: String,

        /// Range end as "YYYY-MM-DD HH:MM" local time
        #[arg(long = "end")]
        end: String,

        /// Free-text comment
        #[arg(long = "comment", default_value = "")]
        comment: String,
    },

    /// Edit the range at the given index (as shown by status)
    Edit {
        /// Range index within the card
        index: usize,

        /// New start as "YYYY-MM-DD HH:MM" local time
        #[arg(long = "start")]
        start: Option<String>,

        /// New end as "YYYY-MM-DD HH:MM" local time
        #[arg(long = "end")]
        end: Option<String>,

        /// New comment
        #[arg(long = "comment")]
        comment: Option<String>,
    },

    /// Delete the range at the given index (as shown by status)
    Del {
        /// Range index within the card
        index: usize,
    },
}
