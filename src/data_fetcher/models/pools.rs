use crate::export::CsvRecord;

/// One bout from a pool's bout order table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoutOrderRecord {
    pub right_pool_position: String,
    pub right_fencer: String,
    pub right_touches_scored: String,
    pub left_touches_scored: String,
    pub left_fencer: String,
    pub left_pool_position: String,
}

impl CsvRecord for BoutOrderRecord {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Fencer Right Pool Position", self.right_pool_position.clone()),
            ("Fencer Right", self.right_fencer.clone()),
            ("Fencer Right Touches Scored", self.right_touches_scored.clone()),
            ("Fencer Left Touches Scored", self.left_touches_scored.clone()),
            ("Fencer Left", self.left_fencer.clone()),
            ("Fencer Left Pool Position", self.left_pool_position.clone()),
        ]
    }
}

/// One fencer's line on a pool sheet.
///
/// `bouts` holds the result against each pool position in order, with an
/// empty string at the fencer's own position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolSheetRecord {
    pub tournament: String,
    pub level: String,
    pub sex: String,
    pub weapon: String,
    pub pool_id: String,
    pub fencer: String,
    pub pool_position: String,
    pub bouts: Vec<String>,
    pub victories: String,
    pub victories_per_match: String,
    pub touches_scored: String,
    pub touches_received: String,
    pub indicator: String,
}

impl PoolSheetRecord {
    pub fn number_of_bouts(&self) -> usize {
        self.bouts.len()
    }

    /// The bout list as a JSON array, e.g. `["","V5","D2"]`.
    pub fn bouts_json(&self) -> String {
        serde_json::to_string(&self.bouts).unwrap_or_default()
    }
}

impl CsvRecord for PoolSheetRecord {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Tournament", self.tournament.clone()),
            ("Level", self.level.clone()),
            ("Sex", self.sex.clone()),
            ("Weapon", self.weapon.clone()),
            ("Pool ID", self.pool_id.clone()),
            ("Fencer", self.fencer.clone()),
            ("Bouts list", self.bouts_json()),
            ("Number of Bouts", self.number_of_bouts().to_string()),
            ("Pool Position", self.pool_position.clone()),
            ("Victories", self.victories.clone()),
            ("Victories / Matches", self.victories_per_match.clone()),
            ("Touches Scored", self.touches_scored.clone()),
            ("Touches Received", self.touches_received.clone()),
            ("Indicators", self.indicator.clone()),
        ]
    }
}

/// A classified row from a pool details table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolRow {
    BoutOrder(BoutOrderRecord),
    PoolSheet(PoolSheetRecord),
}

/// Accumulated pool records across every pool of a tournament.
#[derive(Debug, Clone, Default)]
pub struct PoolResults {
    pub bout_orders: Vec<BoutOrderRecord>,
    pub pool_sheets: Vec<PoolSheetRecord>,
}

impl PoolResults {
    pub fn push(&mut self, row: PoolRow) {
        match row {
            PoolRow::BoutOrder(record) => self.bout_orders.push(record),
            PoolRow::PoolSheet(record) => self.pool_sheets.push(record),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bout_orders.is_empty() && self.pool_sheets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_sheet_fields_encode_bouts_as_json() {
        let record = PoolSheetRecord {
            fencer: "SMITH John".to_string(),
            pool_position: "1".to_string(),
            bouts: vec!["".to_string(), "V5".to_string(), "D3".to_string()],
            ..Default::default()
        };

        let fields = record.fields();
        let bouts = fields.iter().find(|(k, _)| *k == "Bouts list").unwrap();
        assert_eq!(bouts.1, r#"["","V5","D3"]"#);
        let count = fields.iter().find(|(k, _)| *k == "Number of Bouts").unwrap();
        assert_eq!(count.1, "3");
    }

    #[test]
    fn test_pool_results_push_sorts_by_kind() {
        let mut results = PoolResults::default();
        assert!(results.is_empty());

        results.push(PoolRow::BoutOrder(BoutOrderRecord::default()));
        results.push(PoolRow::PoolSheet(PoolSheetRecord::default()));
        results.push(PoolRow::BoutOrder(BoutOrderRecord::default()));

        assert_eq!(results.bout_orders.len(), 2);
        assert_eq!(results.pool_sheets.len(), 1);
    }

    #[test]
    fn test_bout_order_has_six_fields() {
        assert_eq!(BoutOrderRecord::default().fields().len(), 6);
    }
}
