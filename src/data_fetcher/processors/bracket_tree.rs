use std::collections::BTreeMap;
use std::fmt;

use crate::data_fetcher::models::TableauEntry;
use crate::export::CsvRecord;

/// Position of a slot in the bracket: round 0 is the first column of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchId {
    pub round: usize,
    pub slot: usize,
}

impl MatchId {
    pub fn new(round: usize, slot: usize) -> Self {
        Self { round, slot }
    }

    /// The slot this one feeds into in the next round.
    pub fn next(self) -> Self {
        Self::new(self.round + 1, self.slot / 2)
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}-{}", self.round, self.slot)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BracketSlot {
    pub id: MatchId,
    pub entry: TableauEntry,
    /// Non-owning link to the slot the winner advances to.
    pub parent: Option<MatchId>,
    pub children: Vec<MatchId>,
}

/// Elimination bracket stored as an arena of slots keyed by [`MatchId`].
#[derive(Debug, Clone, Default)]
pub struct Bracket {
    slots: BTreeMap<MatchId, BracketSlot>,
}

impl Bracket {
    /// Builds the bracket from tableau entries in table order.
    ///
    /// Entries are grouped by table column; the k-th entry of the c-th
    /// non-empty column becomes slot `(c, k)` and is linked to `(c + 1, k / 2)`
    /// when that slot exists.
    pub fn build(entries: &[TableauEntry]) -> Self {
        let mut columns: BTreeMap<usize, Vec<&TableauEntry>> = BTreeMap::new();
        for entry in entries {
            columns.entry(entry.column).or_default().push(entry);
        }

        let mut slots = BTreeMap::new();
        for (round, column) in columns.values().enumerate() {
            for (slot, entry) in column.iter().enumerate() {
                let id = MatchId::new(round, slot);
                slots.insert(
                    id,
                    BracketSlot {
                        id,
                        entry: (*entry).clone(),
                        parent: None,
                        children: Vec::new(),
                    },
                );
            }
        }

        let ids: Vec<MatchId> = slots.keys().copied().collect();
        for id in ids {
            let next = id.next();
            if let Some(parent) = slots.get_mut(&next) {
                parent.children.push(id);
                if let Some(child) = slots.get_mut(&id) {
                    child.parent = Some(next);
                }
            }
        }

        tracing::debug!("Built bracket with {} slots", slots.len());
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: MatchId) -> Option<&BracketSlot> {
        self.slots.get(&id)
    }

    pub fn parent_of(&self, id: MatchId) -> Option<&BracketSlot> {
        self.get(id)
            .and_then(|slot| slot.parent)
            .and_then(|parent| self.get(parent))
    }

    pub fn children_of(&self, id: MatchId) -> Vec<&BracketSlot> {
        self.get(id)
            .map(|slot| slot.children.iter().filter_map(|c| self.get(*c)).collect())
            .unwrap_or_default()
    }

    /// Slot ids from `id` up to the last round it connects to, inclusive.
    pub fn path_to_root(&self, id: MatchId) -> Vec<MatchId> {
        let mut path = Vec::new();
        let mut current = self.get(id);
        while let Some(slot) = current {
            path.push(slot.id);
            current = slot.parent.and_then(|parent| self.get(parent));
        }
        path
    }

    /// The slot of the last round, when the bracket narrows to a single one.
    pub fn final_slot(&self) -> Option<&BracketSlot> {
        let last_round = self.slots.keys().map(|id| id.round).max()?;
        let mut finals = self.slots.values().filter(|s| s.id.round == last_round);
        match (finals.next(), finals.next()) {
            (Some(slot), None) => Some(slot),
            _ => None,
        }
    }

    pub fn slots(&self) -> impl Iterator<Item = &BracketSlot> {
        self.slots.values()
    }

    pub fn rows(&self) -> Vec<BracketRow> {
        self.slots
            .values()
            .map(|slot| BracketRow {
                event: slot.entry.event.clone(),
                match_id: slot.id.to_string(),
                seed: slot.entry.seed.clone(),
                fencer: slot.entry.fencer_name(),
                club: slot.entry.club.clone(),
                score: slot.entry.score.clone(),
                referee: slot.entry.referee.clone(),
                next_match_id: slot.parent.map(|p| p.to_string()).unwrap_or_default(),
            })
            .collect()
    }
}

/// One exported line of the bracket tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketRow {
    pub event: String,
    pub match_id: String,
    pub seed: String,
    pub fencer: String,
    pub club: String,
    pub score: String,
    pub referee: String,
    pub next_match_id: String,
}

impl CsvRecord for BracketRow {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Event", self.event.clone()),
            ("Match ID", self.match_id.clone()),
            ("Seed", self.seed.clone()),
            ("Fencer", self.fencer.clone()),
            ("Club", self.club.clone()),
            ("Score", self.score.clone()),
            ("Referee", self.referee.clone()),
            ("Next Match ID", self.next_match_id.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(column: usize, last_name: &str) -> TableauEntry {
        TableauEntry {
            event: "E1".to_string(),
            column,
            last_name: last_name.to_string(),
            ..Default::default()
        }
    }

    /// Eight fencers in column 0, four in column 2, two in column 4, one winner in column 6.
    fn eight_fencer_bracket() -> Bracket {
        let mut entries = Vec::new();
        for name in ["A", "B", "C", "D", "E", "F", "G", "H"] {
            entries.push(entry(0, name));
        }
        for name in ["A", "D", "E", "H"] {
            entries.push(entry(2, name));
        }
        for name in ["A", "H"] {
            entries.push(entry(4, name));
        }
        entries.push(entry(6, "H"));
        Bracket::build(&entries)
    }

    #[test]
    fn test_parent_of_first_round_slot() {
        let bracket = eight_fencer_bracket();

        let parent = bracket.parent_of(MatchId::new(0, 3)).unwrap();
        assert_eq!(parent.id, MatchId::new(1, 1));
        assert_eq!(parent.entry.last_name, "D");
    }

    #[test]
    fn test_final_has_no_parent() {
        let bracket = eight_fencer_bracket();

        let final_slot = bracket.final_slot().unwrap();
        assert_eq!(final_slot.id, MatchId::new(3, 0));
        assert!(final_slot.parent.is_none());
        assert!(bracket.parent_of(final_slot.id).is_none());
    }

    #[test]
    fn test_path_to_root_ends_at_final() {
        let bracket = eight_fencer_bracket();

        let path = bracket.path_to_root(MatchId::new(0, 6));
        assert_eq!(
            path,
            vec![
                MatchId::new(0, 6),
                MatchId::new(1, 3),
                MatchId::new(2, 1),
                MatchId::new(3, 0),
            ]
        );
    }

    #[test]
    fn test_children_are_linked_both_ways() {
        let bracket = eight_fencer_bracket();

        let children: Vec<MatchId> = bracket
            .children_of(MatchId::new(1, 0))
            .iter()
            .map(|slot| slot.id)
            .collect();
        assert_eq!(children, vec![MatchId::new(0, 0), MatchId::new(0, 1)]);
        assert!(bracket.children_of(MatchId::new(0, 0)).is_empty());
        assert_eq!(bracket.len(), 15);
    }

    #[test]
    fn test_rows_carry_next_match_id() {
        let bracket = eight_fencer_bracket();
        let rows = bracket.rows();

        assert_eq!(rows.len(), 15);
        assert_eq!(rows[0].match_id, "R0-0");
        assert_eq!(rows[0].next_match_id, "R1-0");
        let last = rows.last().unwrap();
        assert_eq!(last.match_id, "R3-0");
        assert_eq!(last.next_match_id, "");
        assert_eq!(last.fencer, "H");
    }

    #[test]
    fn test_empty_bracket() {
        let bracket = Bracket::build(&[]);
        assert!(bracket.is_empty());
        assert!(bracket.final_slot().is_none());
        assert!(bracket.path_to_root(MatchId::new(0, 0)).is_empty());
    }
}
