use scraper::Html;

use super::selector;
use crate::constants::selectors;
use crate::data_fetcher::models::EventLink;
use crate::data_fetcher::processors::element_text;
use crate::error::AppError;

/// Tournament name from the schedule page header, if present and non-empty.
pub fn parse_tournament_name(html: &str) -> Result<Option<String>, AppError> {
    let document = Html::parse_document(html);
    let name_selector = selector(selectors::TOURNAMENT_NAME)?;

    Ok(document
        .select(&name_selector)
        .map(element_text)
        .find(|name| !name.is_empty()))
}

/// Event links from the schedule's clickable rows, in page order.
pub fn parse_event_links(html: &str) -> Result<Vec<EventLink>, AppError> {
    let document = Html::parse_document(html);
    let row_selector = selector(selectors::EVENT_ROW)?;

    Ok(document
        .select(&row_selector)
        .filter_map(|row| row.value().attr("data-href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(EventLink::new)
        .collect())
}
