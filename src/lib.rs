//! FencingTimeLive Tournament Scraper Library
//!
//! This library walks a FencingTimeLive tournament's event schedule and collects
//! pool sheets, bout orders, elimination tableau entries, reconstructed matches
//! and final placings, ready to be written to CSV.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ftl_scrape::data_fetcher::{PageSession, ScrapeOptions, Selection, scrape_tournament};
//! use ftl_scrape::{AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let session = PageSession::new(&config)?;
//!     let options = ScrapeOptions::new(Selection::matches(), config.pool_poll_policy());
//!
//!     let scrape = scrape_tournament(
//!         &session,
//!         "https://www.fencingtimelive.com/tournaments/eventSchedule/ABC123",
//!         &options,
//!     )
//!     .await?;
//!
//!     for record in &scrape.paired_matches {
//!         println!(
//!             "{}: {} vs {} ({})",
//!             record.event, record.matched.fencer_a, record.matched.fencer_b, record.matched.score
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod export;
pub mod logging;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::processors::extract_fencer_matches;
pub use data_fetcher::{PageSession, ScrapeOptions, Selection, TournamentScrape, scrape_tournament};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
