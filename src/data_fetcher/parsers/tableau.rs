use scraper::{ElementRef, Html};

use super::{child_elements, selector};
use crate::constants::selectors;
use crate::data_fetcher::models::{TableauEntry, TableauPage};
use crate::data_fetcher::processors::{cell_text, element_lines, element_text};
use crate::error::AppError;

/// The matrix skips the header row and the spacer row beneath it.
const MATRIX_FIRST_ROW: usize = 2;

fn has_class_prefix(cell: ElementRef<'_>, prefix: &str) -> bool {
    cell.value().classes().any(|class| class.starts_with(prefix))
}

fn first_text_in(cell: ElementRef<'_>, css: &str) -> Result<String, AppError> {
    let sel = selector(css)?;
    Ok(cell.select(&sel).next().map(element_text).unwrap_or_default())
}

fn fencer_entry(
    cell: ElementRef<'_>,
    event: &str,
    column: usize,
    rounds: &[String],
) -> Result<TableauEntry, AppError> {
    let seed = first_text_in(cell, selectors::SEED)?
        .trim_matches(|c: char| c == '(' || c == ')' || c.is_whitespace())
        .to_string();

    let affiliation = first_text_in(cell, selectors::AFFILIATION)?;
    let mut parts = affiliation.split('/').map(str::trim);
    let club = parts.next().unwrap_or_default().to_string();
    let region = parts.next().unwrap_or_default().to_string();
    let country = parts.next().unwrap_or_default().to_string();

    Ok(TableauEntry {
        event: event.to_string(),
        round: rounds.get(column).cloned().unwrap_or_default(),
        column,
        seed,
        last_name: first_text_in(cell, selectors::LAST_NAME)?,
        first_name: first_text_in(cell, selectors::FIRST_NAME)?,
        club,
        region,
        country,
        score: String::new(),
        referee: String::new(),
    })
}

/// Score and referee from a `tscoref` cell, when both lines are present.
fn score_and_referee(cell: ElementRef<'_>) -> Result<Option<(String, String)>, AppError> {
    let sel = selector(selectors::SCORE)?;
    let Some(score_element) = cell.select(&sel).next() else {
        return Ok(None);
    };

    let lines = element_lines(score_element);
    let [score, referee, ..] = lines.as_slice() else {
        return Ok(None);
    };

    let referee = referee
        .strip_prefix("Ref")
        .unwrap_or(referee.as_str())
        .split('/')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" / ");

    Ok(Some((score.clone(), referee)))
}

/// Parses the rendered elimination tables of one tableau.
///
/// Round labels come from the header row. Fencer cells (`tbb*`) become
/// entries tagged with their column; a score cell (`tscoref*`) fills in the
/// score and referee of the entry parsed just before it. The cell matrix for
/// match reconstruction is built from the rows after the spacer row.
pub fn parse_tableau_fragment(html: &str, event: &str) -> Result<TableauPage, AppError> {
    let document = Html::parse_document(html);
    let row_selector = selector(selectors::TABLEAU_ROW)?;
    let rows: Vec<ElementRef<'_>> = document.select(&row_selector).collect();

    let Some(header) = rows.first() else {
        return Ok(TableauPage::default());
    };

    let rounds: Vec<String> = child_elements(*header, selectors::HEADER_CELL)
        .into_iter()
        .map(element_text)
        .collect();

    let mut entries: Vec<TableauEntry> = Vec::new();
    for row in rows.iter().skip(1) {
        for (column, cell) in child_elements(*row, selectors::CELL).into_iter().enumerate() {
            if has_class_prefix(cell, "tbb") {
                entries.push(fencer_entry(cell, event, column, &rounds)?);
            } else if has_class_prefix(cell, "tscoref") {
                if let Some((score, referee)) = score_and_referee(cell)? {
                    if let Some(last) = entries.last_mut() {
                        last.score = score;
                        last.referee = referee;
                    }
                }
            }
        }
    }

    let matrix = rows
        .iter()
        .skip(MATRIX_FIRST_ROW)
        .map(|row| {
            child_elements(*row, selectors::CELL)
                .into_iter()
                .map(cell_text)
                .collect()
        })
        .collect();

    tracing::debug!(
        "Parsed tableau for event {event}: {} rounds, {} entries",
        rounds.len(),
        entries.len()
    );

    Ok(TableauPage {
        rounds,
        matrix,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::processors::extract_fencer_matches;
    use crate::testing_utils::four_fencer_tableau;

    #[test]
    fn test_round_labels_and_entries() {
        let page = parse_tableau_fragment(&four_fencer_tableau(), "E1").unwrap();

        assert_eq!(page.rounds, vec!["Table of 4", "Final", "Winner"]);
        let names: Vec<String> = page.entries.iter().map(|e| e.fencer_name()).collect();
        assert_eq!(
            names,
            vec![
                "ALPHA Ann",
                "ALPHA Ann",
                "BRAVO Bea",
                "DELTA Dee",
                "CHARLIE Cat",
                "DELTA Dee",
                "DELTA Dee",
            ]
        );

        let first = &page.entries[0];
        assert_eq!(first.seed, "1");
        assert_eq!(first.club, "EPIC");
        assert_eq!(first.region, "Alberta");
        assert_eq!(first.country, "CAN");
        assert_eq!(first.round, "Table of 4");
        assert_eq!(first.event, "E1");
        assert_eq!(page.entries[1].round, "Final");
        assert_eq!(page.entries[3].column, 2);
    }

    #[test]
    fn test_score_cell_attaches_to_previous_entry() {
        let page = parse_tableau_fragment(&four_fencer_tableau(), "E1").unwrap();

        // The score cell follows BRAVO's cell in the same row.
        let bravo = &page.entries[2];
        assert_eq!(bravo.column, 0);
        assert_eq!(bravo.score, "15 - 10");
        assert_eq!(bravo.referee, "MANYOKI Daniel WAT / Ontario / CAN");
        assert_eq!(page.entries[0].score, "");
    }

    #[test]
    fn test_matrix_feeds_match_reconstruction() {
        let page = parse_tableau_fragment(&four_fencer_tableau(), "E1").unwrap();

        assert_eq!(page.matrix.len(), 7);
        let matches = extract_fencer_matches(&page.matrix);

        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].fencer_a, "(1) ALPHA Ann / EPIC / Alberta / CAN");
        assert_eq!(matches[0].fencer_b, "(4) BRAVO Bea / WAT / Ontario / CAN");
        assert_eq!(
            matches[0].score,
            "15 - 10 / Ref MANYOKI Daniel WAT / Ontario / CAN"
        );
        assert!(matches[1].score.starts_with("15 - 12"));
        assert!(matches[2].fencer_a.contains("ALPHA Ann"));
        assert!(matches[2].fencer_b.contains("DELTA Dee"));
        assert!(matches[2].score.starts_with("15 - 13"));
    }

    #[test]
    fn test_empty_fragment() {
        let page = parse_tableau_fragment("<div>No tableau</div>", "E1").unwrap();
        assert_eq!(page, TableauPage::default());
    }
}
