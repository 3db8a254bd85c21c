use crate::data_fetcher::models::EventTitle;

/// Maps French weapon names to English. Anything else is returned unchanged.
pub fn convert_french_to_english(weapon: &str) -> String {
    match weapon {
        "épée" => "epee".to_string(),
        "Épée" => "Epee".to_string(),
        other => other.to_string(),
    }
}

fn strip_possessive(token: &str) -> &str {
    token
        .split(['\'', '’'])
        .next()
        .unwrap_or(token)
}

/// Splits an event title such as `"Cadet Women's Épée"` into level, sex and weapon.
///
/// Titles are split on whitespace and read positionally. With exactly three
/// tokens the possessive is trimmed from the sex token. Two-token titles
/// carry no sex (`"Veteran Foil"`), and a lone token is taken as the level.
/// Tokens past the third are ignored.
pub fn parse_event_title(title: &str) -> EventTitle {
    let tokens: Vec<&str> = title.split_whitespace().collect();

    match tokens.as_slice() {
        [] => EventTitle::default(),
        [level] => EventTitle {
            level: level.to_string(),
            ..Default::default()
        },
        [level, weapon] => EventTitle {
            level: level.to_string(),
            sex: String::new(),
            weapon: convert_french_to_english(weapon),
        },
        [level, sex, weapon] => EventTitle {
            level: level.to_string(),
            sex: strip_possessive(sex).to_string(),
            weapon: convert_french_to_english(weapon),
        },
        [level, sex, weapon, ..] => {
            tracing::debug!("Event title '{title}' has more than three tokens");
            EventTitle {
                level: level.to_string(),
                sex: sex.to_string(),
                weapon: convert_french_to_english(weapon),
            }
        }
    }
}
