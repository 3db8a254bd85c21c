//! HTML fixtures shaped like FencingTimeLive pages, for unit and integration tests.

use std::fmt::Write as _;

/// Tournament schedule page with one clickable row per event path.
pub fn schedule_page(tournament: &str, event_paths: &[&str]) -> String {
    let mut rows = String::new();
    for (i, path) in event_paths.iter().enumerate() {
        let _ = write!(
            rows,
            r#"<tr class="clickable-row" data-href="{path}"><td>8:00 AM</td><td>Event {i}</td></tr>"#
        );
    }
    format!(
        r#"<html><head><title>Schedule</title></head><body>
<div class="desktop tournName">{tournament}</div>
<div class="mobile tournName">{tournament}</div>
<table class="table"><thead><tr><th>Time</th><th>Event</th></tr></thead>
<tbody>{rows}</tbody></table>
</body></html>"#
    )
}

/// Inputs for [`event_page`].
#[derive(Debug, Clone, Default)]
pub struct EventPageFixture<'a> {
    pub title: &'a str,
    pub time: &'a str,
    pub pools_link: Option<&'a str>,
    pub tableau_link: Option<&'a str>,
    pub placings: &'a [[&'a str; 4]],
}

/// Event view page with a navigation bar and a final results table.
pub fn event_page(fixture: &EventPageFixture<'_>) -> String {
    let mut nav = String::new();
    if let Some(href) = fixture.pools_link {
        let _ = write!(nav, r#"<li><a href="{href}">Pools</a></li>"#);
    }
    if let Some(href) = fixture.tableau_link {
        let _ = write!(nav, r#"<li><a href="{href}">Tableaus</a></li>"#);
    }

    let mut rows = String::new();
    for [place, fencer, club, region] in fixture.placings {
        let _ = write!(
            rows,
            "<tr><td>{place}</td><td>{fencer}</td><td>{club}</td><td>{region}</td></tr>"
        );
    }

    format!(
        r#"<html><body>
<div class="desktop eventName">{title}</div>
<div class="desktop eventTime">{time}</div>
<ul class="nav">{nav}</ul>
<table id="resultList"><thead><tr><th>Place</th><th>Name</th><th>Club</th><th>Division</th></tr></thead>
<tbody>{rows}</tbody></table>
</body></html>"#,
        title = fixture.title,
        time = fixture.time,
    )
}

/// Pools page carrying the injected `var ids = [...]` script.
pub fn pools_page(pool_ids: &[&str]) -> String {
    let ids = pool_ids
        .iter()
        .map(|id| format!("\"{id}\""))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "<html><body><div id=\"poolsPanel\"></div>\n<script>\n    var ids = [{ids}];\n    loadPools(ids);\n</script></body></html>"
    )
}

/// Pool details page: a title plus one table row per cell list.
pub fn pool_details_page(title: &str, rows: &[&[&str]]) -> String {
    let mut body = String::new();
    for row in rows {
        body.push_str("<tr>");
        for cell in *row {
            let _ = write!(body, "<td>{cell}</td>");
        }
        body.push_str("</tr>");
    }
    format!(
        r#"<html><body>
<div class="desktop eventName">{title}</div>
<table class="table"><tbody>{body}</tbody></table>
</body></html>"#
    )
}

fn fencer_cell(seed: u32, last: &str, first: &str, club: &str, region: &str) -> String {
    format!(
        r#"<td class="tbb"><span class="tseed">({seed})&nbsp;</span><span class="tcln">{last}</span> <span class="tcfn">{first}</span><br><span class="tcaff"><br>{club} / {region} / <span class="flag flagCAN"></span>CAN</span></td>"#
    )
}

fn score_cell(score: &str, referee: &str) -> String {
    format!(
        r#"<td class="tscoref"><span class="tsco">{score}<br><span class="tref">Ref {referee} / <span class="flag flagCAN"></span> CAN</span>&nbsp;</span></td>"#
    )
}

const EMPTY: &str = "<td></td>";

/// A rendered four-fencer elimination table.
///
/// ALPHA beats BRAVO 15-10, DELTA beats CHARLIE 15-12, DELTA wins the final 15-13.
pub fn four_fencer_tableau() -> String {
    let alpha = fencer_cell(1, "ALPHA", "Ann", "EPIC", "Alberta");
    let bravo = fencer_cell(4, "BRAVO", "Bea", "WAT", "Ontario");
    let charlie = fencer_cell(3, "CHARLIE", "Cat", "RAPIERE", "Quebec");
    let delta = fencer_cell(2, "DELTA", "Dee", "EPIC", "Alberta");

    let rows = [
        format!("{alpha}{EMPTY}{EMPTY}"),
        format!("{EMPTY}{alpha}{EMPTY}"),
        format!(
            "{bravo}{}{EMPTY}",
            score_cell("15 - 10", "MANYOKI Daniel WAT / Ontario")
        ),
        format!("{EMPTY}{EMPTY}{delta}"),
        format!("{charlie}{EMPTY}{EMPTY}"),
        format!(
            "{EMPTY}{delta}{}",
            score_cell("15 - 13", "ROSS Michael EPIC / Alberta")
        ),
        format!(
            "{delta}{}{EMPTY}",
            score_cell("15 - 12", "LEE Kim WAT / Ontario")
        ),
    ];

    let mut body = String::new();
    for row in rows {
        let _ = writeln!(body, "<tr>{row}</tr>");
    }

    format!(
        r#"<div class="tableauPanel"><table class="elimTableau">
<tr><th>Table of 4</th><th>Final</th><th>Winner</th></tr>
<tr>{EMPTY}{EMPTY}{EMPTY}</tr>
{body}</table></div>"#
    )
}

/// Body of the `/trees` endpoint for a single tree.
pub fn trees_json(guid: &str, num_tables: u32) -> String {
    format!(r#"[{{"guid":"{guid}","numTables":{num_tables}}}]"#)
}
