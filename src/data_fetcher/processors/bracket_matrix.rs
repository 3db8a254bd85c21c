use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::data_fetcher::models::MatchTuple;

static SCORE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s*-\s*\d+").expect("valid score regex"));

/// Returns true when `text` contains a bout score such as `15 - 10`.
///
/// The match is a search, not a full match: score cells also carry the
/// referee line, so `"15-10 / Ref DOE Jane"` is a score cell.
///
/// # Examples
///
/// ```rust
/// use ftl_scrape::data_fetcher::processors::looks_like_score;
///
/// assert!(looks_like_score("15 - 10"));
/// assert!(!looks_like_score("BYE"));
/// ```
pub fn looks_like_score(text: &str) -> bool {
    SCORE_PATTERN.is_match(text)
}

fn cell(matrix: &[Vec<String>], row: usize, col: usize) -> &str {
    matrix
        .get(row)
        .and_then(|cells| cells.get(col))
        .map(String::as_str)
        .unwrap_or("")
}

/// Reconstructs who fenced whom from the cell grid of an elimination table.
///
/// For every column except the last, non-empty cells are paired in row
/// order. Each paired row is claimed and never paired again, in this or any
/// later column. The score of a pair is the first cell in the next column,
/// between the two paired rows inclusive, that looks like a score.
///
/// # Arguments
///
/// * `matrix` - Cell text, one inner vector per table row. Rows may be
///   ragged; missing cells read as empty.
///
/// # Returns
///
/// Match tuples in discovery order. A pair without a score cell gets an
/// empty score. An unpaired name left at the bottom of a column is dropped.
///
/// # Examples
///
/// ```rust
/// use ftl_scrape::data_fetcher::processors::extract_fencer_matches;
///
/// let grid = vec![
///     vec!["SMITH John".to_string(), "".to_string()],
///     vec!["".to_string(), "15 - 10".to_string()],
///     vec!["DOE Jane".to_string(), "".to_string()],
/// ];
/// let matches = extract_fencer_matches(&grid);
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].score, "15 - 10");
/// ```
pub fn extract_fencer_matches(matrix: &[Vec<String>]) -> Vec<MatchTuple> {
    let width = matrix.iter().map(Vec::len).max().unwrap_or(0);
    if matrix.len() < 2 || width < 2 {
        return Vec::new();
    }

    let mut matches = Vec::new();
    let mut claimed: HashSet<usize> = HashSet::new();

    for col in 0..width - 1 {
        let mut pending: Vec<(usize, &str)> = Vec::with_capacity(2);

        for row in 0..matrix.len() {
            if claimed.contains(&row) {
                continue;
            }
            let text = cell(matrix, row, col).trim();
            if text.is_empty() {
                continue;
            }
            pending.push((row, text));

            if let [(first_row, fencer_a), (second_row, fencer_b)] = pending[..] {
                claimed.insert(first_row);
                claimed.insert(second_row);

                let score = (first_row..=second_row)
                    .map(|r| cell(matrix, r, col + 1).trim())
                    .find(|text| looks_like_score(text))
                    .unwrap_or("");

                tracing::debug!(
                    "Paired rows {first_row} and {second_row} in column {col}: {fencer_a} vs {fencer_b} ({score})"
                );
                matches.push(MatchTuple::new(fencer_a, fencer_b, score));
                pending.clear();
            }
        }

        if let [(row, name)] = pending[..] {
            tracing::debug!("Dropping unpaired name '{name}' at row {row}, column {col}");
        }
    }

    matches
}
