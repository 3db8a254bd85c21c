use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use super::{child_elements, selector};
use crate::constants::selectors;
use crate::data_fetcher::processors::element_text;
use crate::error::AppError;

static IDS_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"var\s+ids\s*=\s*\[([^\]]*)\]").expect("valid pool ids regex"));

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)"|'([^']*)'"#).expect("valid quoted string regex"));

/// Pool ids the pools page injects as `var ids = [...]`.
///
/// Returns an empty list while the script has not been rendered yet.
pub fn parse_pool_ids(html: &str) -> Vec<String> {
    let Some(captures) = IDS_ARRAY.captures(html) else {
        return Vec::new();
    };
    let body = captures.get(1).map(|m| m.as_str()).unwrap_or("");

    QUOTED
        .captures_iter(body)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str().trim().to_string())
        .filter(|id| !id.is_empty())
        .collect()
}

/// A pool details page: the event title and the text of every table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolDetails {
    pub title: String,
    pub rows: Vec<Vec<String>>,
}

pub fn parse_pool_details(html: &str) -> Result<PoolDetails, AppError> {
    let document = Html::parse_document(html);
    let title_selector = selector(selectors::EVENT_NAME)?;
    let row_selector = selector(selectors::POOL_ROW)?;

    let title = document
        .select(&title_selector)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let rows = document
        .select(&row_selector)
        .map(|row| {
            child_elements(row, selectors::CELL)
                .into_iter()
                .map(element_text)
                .collect()
        })
        .collect();

    Ok(PoolDetails { title, rows })
}
