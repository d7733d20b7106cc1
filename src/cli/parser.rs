use clap::{Parser, Subcommand};

/// Command-line interface definition for workbalance
/// CLI application to chart the working-hours balance from a timesheet export
#[derive(Parser)]
#[command(
    name = "workbalance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Chart your working-hours balance from a timesheet spreadsheet export",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path (useful for tests or custom locale profiles)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the trailing-week balance chart from a sheet export
    Chart {
        /// Path to the CSV export of the timesheet
        sheet: String,

        /// Output file for the rendered chart (SVG)
        #[arg(long = "out", default_value = "balance.svg")]
        out: String,

        /// Override the default business-day target hours
        #[arg(long = "target", help = "Target hours per business day (default 8.5)")]
        target: Option<f64>,
    },

    /// Print the trailing-week performance table and balance
    Summary {
        /// Path to the CSV export of the timesheet
        sheet: String,

        /// Override the default business-day target hours
        #[arg(long = "target", help = "Target hours per business day (default 8.5)")]
        target: Option<f64>,
    },

    /// Manage the configuration file (view or initialize)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write the default configuration file")]
        init: bool,
    },
}
