//! Application-wide constants and configuration values
//!
//! This module centralizes the site contract (URL shapes, selectors) and the
//! tunables that have configuration overrides.

/// Default site the scraper talks to
pub const DEFAULT_BASE_URL: &str = "https://www.fencingtimelive.com";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// User agent sent with every page request
pub const USER_AGENT: &str = concat!("ftl_scrape/", env!("CARGO_PKG_VERSION"));

/// Tournament name used when the tournament page cannot be read
pub const UNKNOWN_TOURNAMENT: &str = "Unknown_Tournament";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "ftl_scrape.log";

/// Bounded polling for identifiers the site injects after page load
pub mod polling {
    /// Number of page reloads before giving up on pool ids
    pub const POOL_ID_ATTEMPTS: u32 = 20;

    /// Delay between pool id reloads (milliseconds)
    pub const POOL_ID_INTERVAL_MS: u64 = 500;
}

/// Environment variable names
pub mod env_vars {
    /// Override the site base URL
    pub const BASE_URL: &str = "FTL_BASE_URL";

    /// Override the log file path
    pub const LOG_FILE: &str = "FTL_LOG_FILE";

    /// Override the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "FTL_HTTP_TIMEOUT";

    /// Override the directory CSV files are written to
    pub const OUTPUT_DIR: &str = "FTL_OUTPUT_DIR";
}

/// CSS selectors for the FencingTimeLive page structure
pub mod selectors {
    pub const TOURNAMENT_NAME: &str = ".desktop.tournName";
    pub const EVENT_ROW: &str = "tr.clickable-row";
    pub const EVENT_NAME: &str = ".desktop.eventName";
    pub const EVENT_TIME: &str = ".desktop.eventTime";
    pub const POOLS_LINK: &str = "a[href*='/pools/scores/']";
    pub const TABLEAU_LINK: &str = "a[href*='/tableaus/scores/']";
    pub const RESULT_ROW: &str = "table#resultList > tbody > tr";
    pub const POOL_ROW: &str = "table tbody tr";
    pub const CELL: &str = "td";
    pub const HEADER_CELL: &str = "th";
    pub const TABLEAU_ROW: &str = "table.elimTableau tr";
    pub const SEED: &str = ".tseed";
    pub const LAST_NAME: &str = ".tcln";
    pub const FIRST_NAME: &str = ".tcfn";
    pub const AFFILIATION: &str = ".tcaff";
    pub const SCORE: &str = ".tsco";
}

/// File name suffixes for each CSV output
pub mod outputs {
    pub const BOUT_ORDERS: &str = "_bout_orders.csv";
    pub const POOL_SHEETS: &str = "_pool_sheets.csv";
    pub const TABLEAU_RESULTS: &str = "_tableau_results.csv";
    pub const TABLEAU_BRACKET: &str = "_tableau_bracket.csv";
    pub const PAIRED_MATCHES: &str = "_paired_matches.csv";
    pub const FENCING_RESULTS: &str = "_fencing_results.csv";
}
