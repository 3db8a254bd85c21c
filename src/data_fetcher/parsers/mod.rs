//! HTML and JSON extraction for each FencingTimeLive page kind.
//!
//! Parsers take the page body as text and return owned data, so no parsed
//! document is ever held across an await point.

pub mod event;
pub mod pools;
pub mod tableau;
pub mod tournament;

pub use event::{EventPage, parse_event_page};
pub use pools::{PoolDetails, parse_pool_details, parse_pool_ids};
pub use tableau::parse_tableau_fragment;
pub use tournament::{parse_event_links, parse_tournament_name};

use scraper::{ElementRef, Selector};

use crate::error::AppError;

pub(crate) fn selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css).map_err(|e| AppError::selector(css, e.to_string()))
}

/// Direct child elements of `parent` with the given tag name.
pub(crate) fn child_elements<'a>(parent: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == tag)
        .collect()
}
