use crate::export::CsvRecord;

/// One row of an event's final placings table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placing {
    pub place: String,
    pub fencer: String,
    pub club: String,
    pub region: String,
}

/// A fencer's final placing in one event, with the event's context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventResult {
    pub place: String,
    pub fencer: String,
    pub club: String,
    pub region: String,
    pub tournament: String,
    pub level: String,
    pub sex: String,
    pub weapon: String,
    pub time: String,
    pub event_url: String,
}

impl EventResult {
    pub fn from_placing(placing: Placing) -> Self {
        Self {
            place: placing.place,
            fencer: placing.fencer,
            club: placing.club,
            region: placing.region,
            ..Default::default()
        }
    }
}

impl CsvRecord for EventResult {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Place", self.place.clone()),
            ("Fencer", self.fencer.clone()),
            ("Club", self.club.clone()),
            ("Region", self.region.clone()),
            ("Tournament", self.tournament.clone()),
            ("Level", self.level.clone()),
            ("Sex", self.sex.clone()),
            ("Weapon", self.weapon.clone()),
            ("Time", self.time.clone()),
            ("Event URL", self.event_url.clone()),
        ]
    }
}
