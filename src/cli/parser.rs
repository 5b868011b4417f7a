use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rBankroll
/// CLI application to record poker sessions and analyse the bankroll
#[derive(Parser)]
#[command(
    name = "rbankroll",
    version = env!("CARGO_PKG_VERSION"),
    about = "A poker bankroll CLI: record sessions and analyse profit, hourly rate and win ratio",
    long_about = None
)]
pub struct Cli {
    /// Override data directory (useful for tests or a second bankroll set)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Override the display currency (ISO code, e.g. EUR)
    #[arg(global = true, long = "currency")]
    pub currency: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by every reporting command.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or A:B)
    #[arg(long, short)]
    pub period: Option<String>,

    /// Only sessions played in this year
    #[arg(long)]
    pub year: Option<i32>,

    /// Only sessions at this location (name)
    #[arg(long)]
    pub location: Option<String>,

    /// Only sessions at these stakes (e.g. 1/3)
    #[arg(long)]
    pub stakes: Option<String>,

    /// Only sessions carrying this tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Session type: cash, tournament or all
    #[arg(long = "type", default_value = "all")]
    pub session_type: String,

    /// Bankroll name, "default" or "all"
    #[arg(long)]
    pub bankroll: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print the internal operation log")]
        print: bool,
    },

    /// Record a cash game or tournament session
    Add {
        /// Date the session started (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        #[arg(long = "start")]
        start: String,

        /// End time (HH:MM); earlier than --start means past midnight
        #[arg(long = "end")]
        end: String,

        /// End date for sessions running over several days (YYYY-MM-DD)
        #[arg(long = "end-date")]
        end_date: Option<String>,

        #[arg(long = "buy-in")]
        buy_in: i64,

        #[arg(long = "cash-out")]
        cash_out: i64,

        /// Tips, rake, travel
        #[arg(long, default_value_t = 0)]
        expenses: i64,

        #[arg(long)]
        location: Option<String>,

        /// Blinds, e.g. 1/3 (cash games)
        #[arg(long)]
        stakes: Option<String>,

        #[arg(long)]
        game: Option<String>,

        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Break length in minutes
        #[arg(long = "break")]
        break_minutes: Option<i64>,

        #[arg(long = "high-hand", default_value_t = 0)]
        high_hand: i64,

        #[arg(long)]
        bounties: Option<i64>,

        #[arg(long)]
        notes: Option<String>,

        /// Record a tournament instead of a cash game
        #[arg(long)]
        tournament: bool,

        #[arg(long, default_value_t = 0, requires = "tournament")]
        rebuys: u32,

        #[arg(long, requires = "tournament")]
        entrants: Option<u32>,

        #[arg(long, requires = "tournament")]
        finish: Option<u32>,

        /// small, medium or large
        #[arg(long, requires = "tournament")]
        size: Option<String>,

        /// standard, turbo or hyper-turbo
        #[arg(long, requires = "tournament")]
        speed: Option<String>,

        /// NAME:PERCENT[:MARKUP], e.g. "Alex:25:1.2"
        #[arg(long = "staker", requires = "tournament")]
        stakers: Vec<String>,

        /// Bankroll name (default ledger when omitted)
        #[arg(long)]
        bankroll: Option<String>,
    },

    /// Record a deposit, withdrawal or expense
    Txn {
        /// Date (YYYY-MM-DD)
        date: String,

        /// deposit, withdrawal or expense
        kind: String,

        amount: i64,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long = "tag")]
        tags: Vec<String>,

        #[arg(long)]
        bankroll: Option<String>,
    },

    /// Manage locations
    Location {
        #[arg(long = "add", value_name = "NAME")]
        add: Option<String>,

        #[arg(long = "list")]
        list: bool,
    },

    /// Manage bankrolls
    Bankroll {
        #[arg(long = "add", value_name = "NAME")]
        add: Option<String>,

        #[arg(long = "list")]
        list: bool,
    },

    /// Delete a session by id (or unique id prefix)
    Del {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// List sessions
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show headline statistics
    Stats {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Totals grouped by weekday, month, year, stakes, location or tag
    Report {
        #[arg(long, default_value = "weekday")]
        by: String,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Cumulative profit series
    Chart {
        /// 1w, 1m, 3m, 6m, 1y, ytd, all, or a period (YYYY, YYYY-MM, A:B)
        #[arg(long, default_value = "all")]
        range: String,

        /// Do not lead the series with a 0 baseline
        #[arg(long = "no-baseline")]
        no_baseline: bool,

        #[arg(long = "type", default_value = "all")]
        session_type: String,

        #[arg(long)]
        bankroll: Option<String>,
    },

    /// Best bucket by hourly rate and its edge over the others
    Best {
        #[arg(long, default_value = "weekday")]
        by: String,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Amounts owed to and paid by stakers
    Staking {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export sessions
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
