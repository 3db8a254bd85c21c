use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

use crate::data_fetcher::Selection;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// FencingTimeLive tournament scraper
///
/// Reads a tournament's event schedule and writes pool sheets, bout orders,
/// elimination tableaus, reconstructed matches and final results to CSV.
///
/// Pass the URL of the tournament's event schedule page, for example
/// https://www.fencingtimelive.com/tournaments/eventSchedule/<ID>
#[derive(Parser, Debug)]
#[command(author = "Boris Bojanov", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory the CSV files are written to. Overrides the configured output directory.
    #[arg(long = "output-dir", short = 'o', global = true, help_heading = "Output")]
    pub output_dir: Option<String>,

    /// Update the site base URL in config.
    #[arg(long = "config", help_heading = "Configuration", value_name = "BASE_URL")]
    pub new_base_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Log at debug level, including every page load and reconstructed match.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Scrape pool sheets and bout orders
    Pools {
        /// Tournament event schedule URL
        url: String,
    },
    /// Scrape elimination tableau entries and the bracket tree
    Tableau {
        /// Tournament event schedule URL
        url: String,
    },
    /// Reconstruct who fenced whom from the elimination tables
    Matches {
        /// Tournament event schedule URL
        url: String,
    },
    /// Scrape final event placings
    Results {
        /// Tournament event schedule URL
        url: String,
    },
    /// Run every pipeline in one pass over the tournament
    All {
        /// Tournament event schedule URL
        url: String,
    },
}

impl Command {
    pub fn url(&self) -> &str {
        match self {
            Command::Pools { url }
            | Command::Tableau { url }
            | Command::Matches { url }
            | Command::Results { url }
            | Command::All { url } => url,
        }
    }

    pub fn selection(&self) -> Selection {
        match self {
            Command::Pools { .. } => Selection::pools(),
            Command::Tableau { .. } => Selection::tableau(),
            Command::Matches { .. } => Selection::matches(),
            Command::Results { .. } => Selection::results(),
            Command::All { .. } => Selection::all(),
        }
    }
}

impl Args {
    /// True when the invocation only reads or edits the configuration.
    pub fn is_config_operation(&self) -> bool {
        self.list_config
            || self.new_base_url.is_some()
            || self.new_log_file_path.is_some()
            || self.clear_log_file_path
    }
}
