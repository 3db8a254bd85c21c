//! URL building utilities for FencingTimeLive pages and endpoints

use crate::error::AppError;

/// Joins a site-relative path onto the base URL. Absolute URLs pass through.
///
/// # Example
/// ```
/// use ftl_scrape::data_fetcher::api::resolve_url;
///
/// let url = resolve_url("https://www.fencingtimelive.com", "/events/view/ABC").unwrap();
/// assert_eq!(url, "https://www.fencingtimelive.com/events/view/ABC");
/// ```
pub fn resolve_url(base_url: &str, path: &str) -> Result<String, AppError> {
    let path = path.trim();
    if path.is_empty() {
        return Err(AppError::invalid_url(path, "empty path"));
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return Ok(path.to_string());
    }

    let base = base_url.trim_end_matches('/');
    if base.is_empty() {
        return Err(AppError::invalid_url(path, "no base URL to resolve against"));
    }

    if path.starts_with('/') {
        Ok(format!("{base}{path}"))
    } else {
        Ok(format!("{base}/{path}"))
    }
}

/// Last non-empty path segment, ignoring any query string.
///
/// `/pools/scores/E1/R1?x=1` gives `R1`.
pub fn last_path_segment(path: &str) -> &str {
    let without_query = path.split(['?', '#']).next().unwrap_or(path);
    without_query
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("")
}

/// Builds the URL of one pool's details page.
pub fn build_pool_details_url(
    base_url: &str,
    event_id: &str,
    round_id: &str,
    pool_id: &str,
) -> String {
    format!(
        "{}/pools/details/{event_id}/{round_id}/{pool_id}",
        base_url.trim_end_matches('/')
    )
}

/// Builds the URL listing a tableau's trees as JSON.
pub fn build_tableau_trees_url(base_url: &str, event_id: &str, round_id: &str) -> String {
    format!(
        "{}/tableaus/scores/{event_id}/{round_id}/trees",
        base_url.trim_end_matches('/')
    )
}

/// Builds the URL rendering every table of a tableau tree as one HTML fragment.
///
/// With `include_referees` the score cells carry the referee line.
pub fn build_tableau_tables_url(
    base_url: &str,
    event_id: &str,
    round_id: &str,
    tree_guid: &str,
    table_count: u32,
    include_referees: bool,
) -> String {
    format!(
        "{}/tableaus/scores/{event_id}/{round_id}/trees/{tree_guid}/tables/0/{table_count}?refs={}",
        base_url.trim_end_matches('/'),
        u8::from(include_referees)
    )
}
