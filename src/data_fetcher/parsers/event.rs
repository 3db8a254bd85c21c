use scraper::{ElementRef, Html};

use super::{child_elements, selector};
use crate::constants::selectors;
use crate::data_fetcher::models::Placing;
use crate::data_fetcher::processors::element_text;
use crate::error::AppError;

/// What an event page tells us: its title and time, where the pools and
/// tableau live, and the final placings once the event is over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPage {
    pub title: String,
    pub time: String,
    pub pools_link: Option<String>,
    pub tableau_link: Option<String>,
    pub placings: Vec<Placing>,
}

fn first_text(document: &Html, css: &str) -> Result<String, AppError> {
    let sel = selector(css)?;
    Ok(document
        .select(&sel)
        .next()
        .map(element_text)
        .unwrap_or_default())
}

fn first_href(document: &Html, css: &str) -> Result<Option<String>, AppError> {
    let sel = selector(css)?;
    Ok(document
        .select(&sel)
        .filter_map(|link| link.value().attr("href"))
        .map(str::trim)
        .find(|href| !href.is_empty())
        .map(str::to_string))
}

fn placing(row: ElementRef<'_>) -> Option<Placing> {
    let cells: Vec<String> = child_elements(row, "td")
        .into_iter()
        .map(element_text)
        .collect();
    match cells.as_slice() {
        [place, fencer, club, region, ..] => Some(Placing {
            place: place.clone(),
            fencer: fencer.clone(),
            club: club.clone(),
            region: region.clone(),
        }),
        _ => None,
    }
}

pub fn parse_event_page(html: &str) -> Result<EventPage, AppError> {
    let document = Html::parse_document(html);
    let row_selector = selector(selectors::RESULT_ROW)?;

    let placings = document.select(&row_selector).filter_map(placing).collect();

    Ok(EventPage {
        title: first_text(&document, selectors::EVENT_NAME)?,
        time: first_text(&document, selectors::EVENT_TIME)?,
        pools_link: first_href(&document, selectors::POOLS_LINK)?,
        tableau_link: first_href(&document, selectors::TABLEAU_LINK)?,
        placings,
    })
}
