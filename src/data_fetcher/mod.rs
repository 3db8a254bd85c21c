pub mod api;
pub mod models;
pub mod parsers;
pub mod processors;

pub use api::{PageSession, ScrapeOptions, Selection, TournamentScrape, scrape_tournament};
pub use models::ScrapeContext;
