use serde::{Deserialize, Serialize};

use crate::export::CsvRecord;

/// Cell text of an elimination table: one row per bracket row, one column per round.
pub type TableauMatrix = Vec<Vec<String>>;

/// Two fencers who met in the same round and the score found next to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTuple {
    pub fencer_a: String,
    pub fencer_b: String,
    /// Score and referee text; empty when no score cell was found.
    pub score: String,
}

impl MatchTuple {
    pub fn new(
        fencer_a: impl Into<String>,
        fencer_b: impl Into<String>,
        score: impl Into<String>,
    ) -> Self {
        Self {
            fencer_a: fencer_a.into(),
            fencer_b: fencer_b.into(),
            score: score.into(),
        }
    }
}

/// A match tuple tagged with the event it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedMatchRecord {
    pub event: String,
    pub matched: MatchTuple,
}

impl CsvRecord for PairedMatchRecord {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Event", self.event.clone()),
            ("Fencer A", self.matched.fencer_a.clone()),
            ("Fencer B", self.matched.fencer_b.clone()),
            ("Score and Referee", self.matched.score.clone()),
        ]
    }
}

/// A fencer's appearance in one round of the tableau.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableauEntry {
    pub event: String,
    pub round: String,
    /// Column of the table the entry was found in; the round index.
    pub column: usize,
    pub seed: String,
    pub last_name: String,
    pub first_name: String,
    pub club: String,
    pub region: String,
    pub country: String,
    pub score: String,
    pub referee: String,
}

impl TableauEntry {
    pub fn fencer_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
            .trim()
            .to_string()
    }
}

impl CsvRecord for TableauEntry {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Event", self.event.clone()),
            ("Round", self.round.clone()),
            ("Seed", self.seed.clone()),
            ("Last Name", self.last_name.clone()),
            ("First Name", self.first_name.clone()),
            ("Club", self.club.clone()),
            ("Region", self.region.clone()),
            ("Country", self.country.clone()),
            ("Score", self.score.clone()),
            ("Referee", self.referee.clone()),
        ]
    }
}

/// Tree metadata from `/tableaus/scores/{event}/{rid}/trees`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableauTree {
    pub guid: String,
    #[serde(rename = "numTables")]
    pub num_tables: u32,
    #[serde(default)]
    pub name: Option<String>,
}

/// Everything extracted from one rendered elimination table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableauPage {
    pub rounds: Vec<String>,
    pub matrix: TableauMatrix,
    pub entries: Vec<TableauEntry>,
}
