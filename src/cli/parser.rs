use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for besseresser
/// Meal-log / symptom-log reconciliation on a SQLite store
#[derive(Parser)]
#[command(
    name = "besseresser",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile meal logs and symptom reports per account and slice the result",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase log verbosity (-v info, -vv debug incl. SQL, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by `view` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// First date to include (YYYY-MM-DD)
    #[arg(long = "from")]
    pub from: Option<String>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(long = "to")]
    pub to: Option<String>,

    /// Meal selector: ALL, OPTION_1 (breakfast), OPTION_2 (lunch), OPTION_3 (dinner)
    #[arg(long = "meal")]
    pub meal: Option<String>,

    /// Symptom selector: ALL, OPTION_1 (no symptom that day), OPTION_2 (symptom that day),
    /// OPTION_3 (symptom on the next day)
    #[arg(long = "symptom")]
    pub symptom: Option<String>,

    /// Minimum average severity (0 = no restriction, 1..=10)
    #[arg(long = "severity")]
    pub severity: Option<i64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database schema and configuration
    Init,

    /// Show the active configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Report whether an account exists and has data
    Check {
        /// Account id (positive integer)
        account: String,
    },

    /// Print the enriched eating view of an account
    View {
        /// Account id (positive integer)
        account: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Show the symptom reports instead (date range only)
        #[arg(long = "symptoms")]
        symptoms: bool,
    },

    /// Export the filtered eating view of an account
    Export {
        /// Account id (positive integer)
        account: String,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long = "format", value_enum, help = "Export format: csv or json")]
        format: ExportFormat,

        #[arg(long = "file", help = "Output file path")]
        file: String,

        #[arg(long = "force", help = "Overwrite the output file if it exists")]
        force: bool,
    },
}
