//! Tournament scrape orchestration
//!
//! Walks a tournament schedule event by event and feeds every selected
//! pipeline. Failures inside one event are logged and the event (or just the
//! failing step) is skipped; only an unreadable schedule page aborts the run.

use tracing::{debug, info, instrument, warn};

use super::poll::PollPolicy;
use super::session::PageSession;
use super::urls::{
    build_pool_details_url, build_tableau_tables_url, build_tableau_trees_url, last_path_segment,
};
use crate::constants::{UNKNOWN_TOURNAMENT, selectors};
use crate::data_fetcher::models::{
    EventLink, EventResult, EventTitle, PairedMatchRecord, PoolResults, ScrapeContext,
    TableauEntry, TableauPage, TableauTree,
};
use crate::data_fetcher::parsers::{
    EventPage, parse_event_links, parse_event_page, parse_pool_details, parse_pool_ids,
    parse_tableau_fragment, parse_tournament_name,
};
use crate::data_fetcher::processors::{
    Bracket, BracketRow, PoolRowContext, classify_pool_row, extract_fencer_matches,
    parse_event_title,
};
use crate::error::AppError;

/// Which pipelines a run feeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub pools: bool,
    pub tableau: bool,
    pub matches: bool,
    pub results: bool,
}

impl Selection {
    pub fn all() -> Self {
        Self {
            pools: true,
            tableau: true,
            matches: true,
            results: true,
        }
    }

    pub fn pools() -> Self {
        Self {
            pools: true,
            ..Self::default()
        }
    }

    pub fn tableau() -> Self {
        Self {
            tableau: true,
            ..Self::default()
        }
    }

    pub fn matches() -> Self {
        Self {
            matches: true,
            ..Self::default()
        }
    }

    pub fn results() -> Self {
        Self {
            results: true,
            ..Self::default()
        }
    }

    /// Both the tableau and the paired-match pipelines read the tableau tables.
    fn needs_tableau(&self) -> bool {
        self.tableau || self.matches
    }
}

/// Per-run knobs for [`scrape_tournament`].
#[derive(Debug, Clone, Copy)]
pub struct ScrapeOptions {
    pub selection: Selection,
    pub pool_poll: PollPolicy,
    /// Ask the tableau endpoint for referee lines in score cells.
    pub include_referees: bool,
}

impl ScrapeOptions {
    pub fn new(selection: Selection, pool_poll: PollPolicy) -> Self {
        Self {
            selection,
            pool_poll,
            include_referees: true,
        }
    }
}

/// Everything collected from one tournament.
#[derive(Debug, Clone)]
pub struct TournamentScrape {
    pub context: ScrapeContext,
    pub pools: PoolResults,
    pub tableau_entries: Vec<TableauEntry>,
    pub bracket_rows: Vec<BracketRow>,
    pub paired_matches: Vec<PairedMatchRecord>,
    pub results: Vec<EventResult>,
    pub events_scraped: usize,
    pub events_skipped: usize,
}

impl TournamentScrape {
    fn new(context: ScrapeContext) -> Self {
        Self {
            context,
            pools: PoolResults::default(),
            tableau_entries: Vec::new(),
            bracket_rows: Vec::new(),
            paired_matches: Vec::new(),
            results: Vec::new(),
            events_scraped: 0,
            events_skipped: 0,
        }
    }
}

/// Scrapes every event of a tournament schedule page.
///
/// # Arguments
/// * `session` - Page session bound to the site's base URL
/// * `tournament_url` - The tournament's event schedule page
/// * `options` - Selected pipelines and polling behavior
///
/// # Returns
/// * `Ok(TournamentScrape)` - Records from every event that could be read
/// * `Err(AppError)` - The schedule page itself could not be loaded or parsed
#[instrument(skip(session, options))]
pub async fn scrape_tournament(
    session: &PageSession,
    tournament_url: &str,
    options: &ScrapeOptions,
) -> Result<TournamentScrape, AppError> {
    let schedule_html = session.get_page(tournament_url).await?;

    let tournament_name = match parse_tournament_name(&schedule_html) {
        Ok(Some(name)) => name,
        Ok(None) => {
            warn!("Tournament name not found on {tournament_url}, using {UNKNOWN_TOURNAMENT}");
            UNKNOWN_TOURNAMENT.to_string()
        }
        Err(e) => {
            warn!("Error reading tournament name: {e}");
            UNKNOWN_TOURNAMENT.to_string()
        }
    };
    let event_links = parse_event_links(&schedule_html)?;
    info!(
        "Tournament '{}' has {} events",
        tournament_name,
        event_links.len()
    );

    let context = ScrapeContext::new(tournament_name, tournament_url, session.base_url());
    let mut scrape = TournamentScrape::new(context);

    for link in &event_links {
        match scrape_event(session, link, options, &mut scrape).await {
            Ok(()) => scrape.events_scraped += 1,
            Err(e) => {
                warn!("Skipping event {}: {}", link.event_id, e);
                scrape.events_skipped += 1;
            }
        }
    }

    info!(
        "Finished '{}': {} events scraped, {} skipped",
        scrape.context.tournament_name, scrape.events_scraped, scrape.events_skipped
    );
    Ok(scrape)
}

async fn scrape_event(
    session: &PageSession,
    link: &EventLink,
    options: &ScrapeOptions,
    scrape: &mut TournamentScrape,
) -> Result<(), AppError> {
    let event_url = scrape.context.absolute_url(&link.path)?;
    let html = session.get_page(&event_url).await?;
    let page = parse_event_page(&html)?;
    let title = parse_event_title(&page.title);
    let label = if page.title.is_empty() {
        link.event_id.clone()
    } else {
        page.title.clone()
    };
    debug!("Event {} is '{}'", link.event_id, label);

    let selection = options.selection;

    if selection.results {
        collect_results(&page, &title, &event_url, scrape);
    }

    if selection.pools {
        match &page.pools_link {
            Some(pools_link) => {
                if let Err(e) = scrape_pools(
                    session,
                    &link.event_id,
                    pools_link,
                    &title,
                    options.pool_poll,
                    scrape,
                )
                .await
                {
                    warn!("Pools for event {} failed: {}", link.event_id, e);
                }
            }
            None => warn!(
                "Skipping pools for event {} due to missing pools page",
                link.event_id
            ),
        }
    }

    if selection.needs_tableau() {
        let Some(tableau_link) = &page.tableau_link else {
            warn!(
                "Skipping tableau for event {} due to missing tableau page",
                link.event_id
            );
            return Ok(());
        };

        match fetch_tableau(
            session,
            &link.event_id,
            tableau_link,
            &label,
            options.include_referees,
        )
        .await
        {
            Ok(Some(tableau)) => collect_tableau(tableau, &label, selection, scrape),
            Ok(None) => warn!("No tableau trees for event {}", link.event_id),
            Err(e) => warn!("Tableau for event {} failed: {}", link.event_id, e),
        }
    }

    Ok(())
}

fn collect_results(
    page: &EventPage,
    title: &EventTitle,
    event_url: &str,
    scrape: &mut TournamentScrape,
) {
    if page.placings.is_empty() {
        debug!("No final placings on {event_url}");
        return;
    }

    let tournament = &scrape.context.tournament_name;
    let results: Vec<EventResult> = page
        .placings
        .iter()
        .cloned()
        .map(|placing| EventResult {
            tournament: tournament.clone(),
            level: title.level.clone(),
            sex: title.sex.clone(),
            weapon: title.weapon.clone(),
            time: page.time.clone(),
            event_url: event_url.to_string(),
            ..EventResult::from_placing(placing)
        })
        .collect();
    scrape.results.extend(results);
}

async fn scrape_pools(
    session: &PageSession,
    event_id: &str,
    pools_link: &str,
    title: &EventTitle,
    poll: PollPolicy,
    scrape: &mut TournamentScrape,
) -> Result<(), AppError> {
    let round_id = last_path_segment(pools_link);

    let pool_ids = poll
        .poll_until_non_empty(move |attempt| async move {
            debug!("Loading pools page {pools_link} (attempt {attempt})");
            let html = session.get_page(pools_link).await?;
            Ok::<_, AppError>(parse_pool_ids(&html))
        })
        .await?;

    if pool_ids.is_empty() {
        warn!("No pools found for event {event_id}");
        return Ok(());
    }
    info!("Event {event_id}: {} pools", pool_ids.len());

    let mut collected = PoolResults::default();
    for pool_id in &pool_ids {
        let url = build_pool_details_url(session.base_url(), event_id, round_id, pool_id);
        let details = match session.get_page(&url).await.and_then(|h| parse_pool_details(&h)) {
            Ok(details) => details,
            Err(e) => {
                warn!("Error scraping pool {pool_id}: {e}");
                continue;
            }
        };
        if details.rows.is_empty() {
            let e = AppError::missing_element(selectors::POOL_ROW, &url);
            warn!("Error scraping pool {pool_id}: {e}");
            continue;
        }

        // The details page repeats the event title; prefer it when present.
        let pool_title = if details.title.is_empty() {
            title.clone()
        } else {
            parse_event_title(&details.title)
        };
        let context = PoolRowContext {
            tournament: &scrape.context.tournament_name,
            title: &pool_title,
            pool_id,
        };

        for cells in &details.rows {
            if let Some(row) = classify_pool_row(cells, &context) {
                collected.push(row);
            }
        }
    }

    debug!(
        "Event {event_id}: {} bout orders, {} pool sheet rows",
        collected.bout_orders.len(),
        collected.pool_sheets.len()
    );
    scrape.pools.bout_orders.extend(collected.bout_orders);
    scrape.pools.pool_sheets.extend(collected.pool_sheets);
    Ok(())
}

async fn fetch_tableau(
    session: &PageSession,
    event_id: &str,
    tableau_link: &str,
    label: &str,
    include_referees: bool,
) -> Result<Option<TableauPage>, AppError> {
    let round_id = last_path_segment(tableau_link);

    let trees_url = build_tableau_trees_url(session.base_url(), event_id, round_id);
    let trees: Vec<TableauTree> = session.get_json(&trees_url).await?;
    let Some(tree) = trees.first() else {
        return Ok(None);
    };
    if trees.len() > 1 {
        debug!(
            "Event {event_id} has {} tableau trees, reading the first",
            trees.len()
        );
    }

    let tables_url = build_tableau_tables_url(
        session.base_url(),
        event_id,
        round_id,
        &tree.guid,
        tree.num_tables,
        include_referees,
    );
    let html = session.get_page(&tables_url).await?;
    parse_tableau_fragment(&html, label).map(Some)
}

fn collect_tableau(
    tableau: TableauPage,
    label: &str,
    selection: Selection,
    scrape: &mut TournamentScrape,
) {
    if selection.matches {
        let matches = extract_fencer_matches(&tableau.matrix);
        debug!("{label}: reconstructed {} matches", matches.len());
        scrape
            .paired_matches
            .extend(matches.into_iter().map(|matched| PairedMatchRecord {
                event: label.to_string(),
                matched,
            }));
    }

    if selection.tableau {
        let bracket = Bracket::build(&tableau.entries);
        scrape.bracket_rows.extend(bracket.rows());
        scrape.tableau_entries.extend(tableau.entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::testing_utils::{
        EventPageFixture, event_page, four_fencer_tableau, pool_details_page, pools_page,
        schedule_page, trees_json,
    };
    use std::time::Duration;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    async fn mount_page(server: &MockServer, page_path: &str, body: String) {
        Mock::given(method("GET"))
            .and(path(page_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(server)
            .await;
    }

    fn fast_options(selection: Selection) -> ScrapeOptions {
        ScrapeOptions::new(selection, PollPolicy::new(2, Duration::from_millis(1)))
    }

    #[test]
    fn test_selection_constructors() {
        assert!(Selection::all().needs_tableau());
        assert!(Selection::matches().needs_tableau());
        assert!(!Selection::pools().needs_tableau());
        assert!(!Selection::results().pools);
    }

    #[tokio::test]
    async fn test_pools_pipeline() {
        let server = MockServer::start().await;
        mount_page(
            &server,
            "/tournaments/eventSchedule/T1",
            schedule_page("Winter Open", &["/events/view/E1"]),
        )
        .await;
        mount_page(
            &server,
            "/events/view/E1",
            event_page(&EventPageFixture {
                title: "Cadet Women's Epee",
                pools_link: Some("/pools/scores/E1/R1"),
                ..Default::default()
            }),
        )
        .await;
        mount_page(&server, "/pools/scores/E1/R1", pools_page(&["P1", "P2"])).await;
        // P2's sheet has no rows yet and is skipped
        mount_page(
            &server,
            "/pools/details/E1/R1/P2",
            pool_details_page("Cadet Women's Epee", &[]),
        )
        .await;
        mount_page(
            &server,
            "/pools/details/E1/R1/P1",
            pool_details_page(
                "Cadet Women's Epee",
                &[
                    &["DOE Jane", "1", "", "V5", "1", "1.00", "5", "2", "+3", ""],
                    &["1", "DOE Jane", "5", "2", "ROE Ann", "2"],
                ],
            ),
        )
        .await;

        let session = PageSession::with_client(create_test_http_client(), &server.uri());
        let scrape = scrape_tournament(
            &session,
            "/tournaments/eventSchedule/T1",
            &fast_options(Selection::pools()),
        )
        .await
        .unwrap();

        assert_eq!(scrape.context.tournament_name, "Winter Open");
        assert_eq!(scrape.events_scraped, 1);
        assert_eq!(scrape.pools.bout_orders.len(), 1);
        assert_eq!(scrape.pools.pool_sheets.len(), 1);

        let sheet = &scrape.pools.pool_sheets[0];
        assert_eq!(sheet.pool_id, "P1");
        assert_eq!(sheet.sex, "Women");
        assert_eq!(sheet.tournament, "Winter Open");
        assert_eq!(sheet.bouts, vec![String::new(), "V5".to_string()]);
        assert!(scrape.tableau_entries.is_empty());
    }

    #[tokio::test]
    async fn test_tableau_and_matches_pipeline() {
        let server = MockServer::start().await;
        mount_page(
            &server,
            "/tournaments/eventSchedule/T1",
            schedule_page("Winter Open", &["/events/view/E1"]),
        )
        .await;
        mount_page(
            &server,
            "/events/view/E1",
            event_page(&EventPageFixture {
                title: "Senior Men Foil",
                tableau_link: Some("/tableaus/scores/E1/R2"),
                ..Default::default()
            }),
        )
        .await;
        mount_page(&server, "/tableaus/scores/E1/R2/trees", trees_json("G1", 3)).await;
        Mock::given(method("GET"))
            .and(path("/tableaus/scores/E1/R2/trees/G1/tables/0/3"))
            .and(query_param("refs", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(four_fencer_tableau()))
            .mount(&server)
            .await;

        let session = PageSession::with_client(create_test_http_client(), &server.uri());
        let selection = Selection {
            tableau: true,
            matches: true,
            ..Selection::default()
        };
        let scrape = scrape_tournament(
            &session,
            "/tournaments/eventSchedule/T1",
            &fast_options(selection),
        )
        .await
        .unwrap();

        assert_eq!(scrape.tableau_entries.len(), 7);
        assert_eq!(scrape.bracket_rows.len(), 7);
        assert_eq!(scrape.paired_matches.len(), 3);
        assert_eq!(scrape.paired_matches[0].event, "Senior Men Foil");
        assert!(scrape.results.is_empty());
    }

    #[tokio::test]
    async fn test_event_without_pools_link_is_not_fatal() {
        let server = MockServer::start().await;
        mount_page(
            &server,
            "/tournaments/eventSchedule/T1",
            schedule_page("Open", &["/events/view/E1", "/events/view/E2"]),
        )
        .await;
        mount_page(
            &server,
            "/events/view/E1",
            event_page(&EventPageFixture {
                title: "Senior Men Foil",
                ..Default::default()
            }),
        )
        .await;
        // E2 is missing entirely and answers 404.

        let session = PageSession::with_client(create_test_http_client(), &server.uri());
        let scrape = scrape_tournament(
            &session,
            "/tournaments/eventSchedule/T1",
            &fast_options(Selection::all()),
        )
        .await
        .unwrap();

        assert_eq!(scrape.events_scraped, 1);
        assert_eq!(scrape.events_skipped, 1);
        assert!(scrape.pools.is_empty());
    }

    #[tokio::test]
    async fn test_results_pipeline_merges_event_context() {
        let server = MockServer::start().await;
        mount_page(
            &server,
            "/tournaments/eventSchedule/T1",
            schedule_page("Open", &["/events/view/E1"]),
        )
        .await;
        mount_page(
            &server,
            "/events/view/E1",
            event_page(&EventPageFixture {
                title: "Cadet Women's Épée",
                time: "Sat 8:00 AM",
                placings: &[["1", "DOE Jane", "EPIC", "Alberta"]],
                ..Default::default()
            }),
        )
        .await;

        let session = PageSession::with_client(create_test_http_client(), &server.uri());
        let scrape = scrape_tournament(
            &session,
            "/tournaments/eventSchedule/T1",
            &fast_options(Selection::results()),
        )
        .await
        .unwrap();

        assert_eq!(scrape.results.len(), 1);
        let result = &scrape.results[0];
        assert_eq!(result.fencer, "DOE Jane");
        assert_eq!(result.weapon, "Epee");
        assert_eq!(result.time, "Sat 8:00 AM");
        assert_eq!(result.tournament, "Open");
        assert_eq!(
            result.event_url,
            format!("{}/events/view/E1", server.uri())
        );
    }

    #[tokio::test]
    async fn test_unreadable_schedule_is_an_error() {
        let server = MockServer::start().await;
        let session = PageSession::with_client(create_test_http_client(), &server.uri());

        let result = scrape_tournament(
            &session,
            "/tournaments/eventSchedule/T1",
            &fast_options(Selection::all()),
        )
        .await;

        assert!(matches!(result, Err(AppError::PageNotFound { .. })));
    }
}
