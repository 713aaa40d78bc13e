use clap::{Parser, Subcommand};

/// Command-line interface definition for convtrack
/// CLI application to record the daily customer conversion rate
#[derive(Parser)]
#[command(
    name = "convtrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute the daily customer conversion rate and append it to a spreadsheet",
    long_about = None
)]
pub struct Cli {
    /// Override the spreadsheet path (.xlsx or .csv)
    #[arg(global = true, long = "file", value_name = "PATH")]
    pub file: Option<String>,

    /// Do not open the spreadsheet after saving
    #[arg(global = true, long = "no-open")]
    pub no_open: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
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

    /// Show customers and conversion rate without saving
    Calc {
        #[arg(long = "morning", allow_hyphen_values = true, help = "Morning count")]
        morning: String,

        #[arg(long = "closing", allow_hyphen_values = true, help = "Closing count")]
        closing: String,

        #[arg(long = "transactions", allow_hyphen_values = true, help = "Number of transactions")]
        transactions: String,
    },

    /// Calculate and append one day's record to the spreadsheet
    Add {
        /// Date as written to the sheet (default: today, MM-DD-YYYY)
        #[arg(long = "date")]
        date: Option<String>,

        /// Day of week: Mon, Tues, Wed, Thurs, Fri, Sat, Sun
        #[arg(long = "day")]
        day: Option<String>,

        #[arg(long = "morning", allow_hyphen_values = true, help = "Morning count")]
        morning: String,

        #[arg(long = "closing", allow_hyphen_values = true, help = "Closing count")]
        closing: String,

        #[arg(long = "transactions", allow_hyphen_values = true, help = "Number of transactions")]
        transactions: String,

        #[arg(
            long = "end-of-day",
            allow_hyphen_values = true,
            help = "End of day sales total (without tax)"
        )]
        end_of_day: String,

        #[arg(long = "comments", default_value = "", help = "Free-text comments")]
        comments: String,
    },

    /// Fill in the daily form interactively
    Entry,
}
