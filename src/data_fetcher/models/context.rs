use crate::data_fetcher::api::urls::{last_path_segment, resolve_url};
use crate::error::AppError;

/// Tournament-level context threaded through every pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeContext {
    pub tournament_name: String,
    pub tournament_url: String,
    pub base_url: String,
}

impl ScrapeContext {
    pub fn new(
        tournament_name: impl Into<String>,
        tournament_url: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            tournament_name: tournament_name.into(),
            tournament_url: tournament_url.into(),
            base_url: base_url.into(),
        }
    }

    /// Resolves a site-relative path such as `/events/view/ABC` against the base URL.
    pub fn absolute_url(&self, path: &str) -> Result<String, AppError> {
        resolve_url(&self.base_url, path)
    }
}

/// Level, sex and weapon parsed from an event title like "Cadet Women's Epee".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTitle {
    pub level: String,
    pub sex: String,
    pub weapon: String,
}

/// A `data-href` from the tournament schedule, e.g. `/events/view/B842E0E2...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLink {
    pub path: String,
    pub event_id: String,
}

impl EventLink {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let event_id = last_path_segment(&path).to_string();
        Self { path, event_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_link_takes_last_segment_as_id() {
        let link = EventLink::new("/events/view/B842E0E22FA947FEA4EF37DF113A2FB6");
        assert_eq!(link.event_id, "B842E0E22FA947FEA4EF37DF113A2FB6");
        assert_eq!(link.path, "/events/view/B842E0E22FA947FEA4EF37DF113A2FB6");
    }

    #[test]
    fn test_absolute_url() {
        let ctx = ScrapeContext::new(
            "Winter Open",
            "https://www.fencingtimelive.com/tournaments/eventSchedule/X",
            "https://www.fencingtimelive.com",
        );
        assert_eq!(
            ctx.absolute_url("/events/view/ABC").unwrap(),
            "https://www.fencingtimelive.com/events/view/ABC"
        );
    }
}
