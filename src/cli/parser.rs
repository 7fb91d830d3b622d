use clap::{Parser, Subcommand};

/// Command-line interface definition for bikeshare
/// Explore US bikeshare trip data interactively or from flags
#[derive(Parser)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: popular times, stations, trip durations and user stats",
    long_about = None
)]
pub struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Read configuration from this file instead of ~/.bikeshare/bikeshare.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Defaults to `explore` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive session: choose a city and filters, read the reports, repeat
    Explore,

    /// Print the reports for one selection without prompting
    Report {
        /// Chicago, "New York City" (or nyc), Washington
        #[arg(long)]
        city: String,

        /// month, day, both or all
        #[arg(long = "filter", default_value = "all")]
        filter: String,

        /// January to June (required by --filter month|both)
        #[arg(long)]
        month: Option<String>,

        /// Weekday name, e.g. Monday (required by --filter day|both)
        #[arg(long)]
        day: Option<String>,
    },

    /// Print the first raw rows of a city file
    Raw {
        #[arg(long)]
        city: String,

        /// Number of rows (default: raw_page_size from the configuration)
        #[arg(long, short = 'n', value_parser = parse_row_count)]
        rows: Option<usize>,
    },

    /// Show or create the configuration file
    Config {
        /// Print the effective configuration
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        /// Write the default configuration file
        #[arg(long = "init", help = "Write the default configuration file")]
        init: bool,

        /// Overwrite an existing file with --init
        #[arg(long, short = 'f', requires = "init")]
        force: bool,
    },
}

/// Row counts share the `raw_page_size` rule: at least one row per page.
fn parse_row_count(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{s}' is not a row count")),
    }
}
