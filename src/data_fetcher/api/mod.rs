pub mod fetch_utils;
pub mod http_client;
pub mod orchestrator;
pub mod poll;
pub mod session;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
pub use fetch_utils::{fetch_json, fetch_text};
pub use http_client::create_http_client_with_timeout;
pub use orchestrator::{ScrapeOptions, Selection, TournamentScrape, scrape_tournament};
pub use poll::PollPolicy;
pub use session::PageSession;
