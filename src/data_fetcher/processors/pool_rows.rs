use crate::data_fetcher::models::{BoutOrderRecord, EventTitle, PoolRow, PoolSheetRecord};

/// Cells on a pool-sheet row that are not bouts: name, position, and six trailing stats.
const POOL_SHEET_FRINGE: usize = 8;
const BOUT_ORDER_WIDTH: usize = 6;
const NOISE_BELOW: usize = 4;

/// Where a pool row came from, copied onto every pool-sheet record.
#[derive(Debug, Clone, Copy)]
pub struct PoolRowContext<'a> {
    pub tournament: &'a str,
    pub title: &'a EventTitle,
    pub pool_id: &'a str,
}

/// Classifies one `<tr>` of a pool details page by its cell count.
///
/// - fewer than 4 cells: layout noise, skipped silently
/// - exactly 6 cells: a bout-order row
/// - more than 6 cells: a pool-sheet row with `cells - 8` bouts
/// - 4 or 5 cells: unexpected, skipped with a warning
///
/// Pool-sheet rows whose position cell is not an integer are skipped with a
/// warning.
pub fn classify_pool_row(cells: &[String], context: &PoolRowContext<'_>) -> Option<PoolRow> {
    match cells.len() {
        n if n < NOISE_BELOW => None,
        BOUT_ORDER_WIDTH => Some(PoolRow::BoutOrder(bout_order_record(cells))),
        n if n > BOUT_ORDER_WIDTH => pool_sheet_record(cells, context).map(PoolRow::PoolSheet),
        n => {
            tracing::warn!(
                "Skipping row with unexpected number of columns ({n}) in pool {}",
                context.pool_id
            );
            None
        }
    }
}

fn bout_order_record(cells: &[String]) -> BoutOrderRecord {
    BoutOrderRecord {
        right_pool_position: cells[0].clone(),
        right_fencer: cells[1].clone(),
        right_touches_scored: cells[2].clone(),
        left_touches_scored: cells[3].clone(),
        left_fencer: cells[4].clone(),
        left_pool_position: cells[5].clone(),
    }
}

fn pool_sheet_record(cells: &[String], context: &PoolRowContext<'_>) -> Option<PoolSheetRecord> {
    let fencer = cells[0].clone();
    let pool_position = cells[1].clone();

    let position: usize = match pool_position.parse() {
        Ok(position) => position,
        Err(_) => {
            tracing::warn!(
                "Skipping pool {} row for '{fencer}': pool position '{pool_position}' is not a number",
                context.pool_id
            );
            return None;
        }
    };

    let pool_size = cells.len().saturating_sub(POOL_SHEET_FRINGE);
    let own_index = position.checked_sub(1);
    let bouts = cells[2..2 + pool_size]
        .iter()
        .enumerate()
        .map(|(i, bout)| {
            if Some(i) == own_index {
                String::new()
            } else {
                bout.clone()
            }
        })
        .collect();

    let tail = &cells[cells.len() - 5..];

    Some(PoolSheetRecord {
        tournament: context.tournament.to_string(),
        level: context.title.level.clone(),
        sex: context.title.sex.clone(),
        weapon: context.title.weapon.clone(),
        pool_id: context.pool_id.to_string(),
        fencer,
        pool_position,
        bouts,
        victories: tail[0].clone(),
        victories_per_match: tail[1].clone(),
        touches_scored: tail[2].clone(),
        touches_received: tail[3].clone(),
        indicator: tail[4].clone(),
    })
}
