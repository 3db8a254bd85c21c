use ftl_scrape::{
    data_fetcher::models::{EventResult, Placing, PoolSheetRecord, TableauEntry},
    data_fetcher::processors::Bracket,
    export::{output_file, save_records},
};
use tempfile::tempdir;

fn pool_sheet(fencer: &str, position: usize, pool_size: usize) -> PoolSheetRecord {
    let bouts = (0..pool_size)
        .map(|i| {
            if i + 1 == position {
                String::new()
            } else {
                format!("V{}", i + 1)
            }
        })
        .collect();
    PoolSheetRecord {
        tournament: "Winter Open".to_string(),
        level: "Cadet".to_string(),
        sex: "Women".to_string(),
        weapon: "Epee".to_string(),
        pool_id: "P1".to_string(),
        fencer: fencer.to_string(),
        pool_position: position.to_string(),
        bouts,
        victories: "3".to_string(),
        victories_per_match: "0.75".to_string(),
        touches_scored: "18".to_string(),
        touches_received: "12".to_string(),
        indicator: "+6".to_string(),
    }
}

/// Pool sheet rows read back from disk keep their column order and bout lists
#[test]
fn test_pool_sheets_read_back() {
    let dir = tempdir().unwrap();
    let records: Vec<PoolSheetRecord> = ["ALPHA Ann", "BRAVO Bea", "CHARLIE Cat", "DELTA Dee"]
        .iter()
        .enumerate()
        .map(|(i, name)| pool_sheet(name, i + 1, 4))
        .collect();

    let path = output_file(dir.path(), "Winter Open", "_pool_sheets.csv");
    let written = save_records(&path, &records).unwrap();
    assert_eq!(written.as_deref(), Some(path.as_path()));

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[6], "Bouts list");
    assert_eq!(&headers[7], "Number of Bouts");

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 4);
    for (i, row) in rows.iter().enumerate() {
        let bouts: Vec<String> = serde_json::from_str(&row[6]).unwrap();
        assert_eq!(bouts.len(), 4);
        assert_eq!(bouts[i], "", "own position must be blank");
        assert_eq!(&row[7], "4");
        assert_eq!(&row[8], &(i + 1).to_string());
    }
}

/// Text with commas and quotes survives CSV quoting
#[test]
fn test_results_with_commas_round_trip() {
    let dir = tempdir().unwrap();
    let result = EventResult {
        tournament: "Open, Day 1".to_string(),
        time: "Saturday, March 1".to_string(),
        ..EventResult::from_placing(Placing {
            place: "1".to_string(),
            fencer: "O'NEIL \"Sam\"".to_string(),
            club: "EPIC".to_string(),
            region: "Alberta".to_string(),
        })
    };

    let path = dir.path().join("results.csv");
    save_records(&path, std::slice::from_ref(&result)).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[1], "O'NEIL \"Sam\"");
    assert!(row.iter().any(|field| field == "Open, Day 1"));
    assert!(row.iter().any(|field| field == "Saturday, March 1"));
}

/// Bracket rows link every non-final slot to the match it feeds
#[test]
fn test_bracket_rows_export() {
    let entries: Vec<TableauEntry> = ["A", "B", "C", "D", "A", "D", "D"]
        .iter()
        .zip([0, 0, 0, 0, 1, 1, 2])
        .map(|(name, column)| TableauEntry {
            event: "Senior Men Foil".to_string(),
            column,
            last_name: name.to_string(),
            ..Default::default()
        })
        .collect();

    let bracket = Bracket::build(&entries);
    let rows = bracket.rows();
    assert_eq!(rows.len(), 7);

    let dir = tempdir().unwrap();
    let path = dir.path().join("bracket.csv");
    save_records(&path, &rows).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    let next_index = headers.iter().position(|h| h == "Next Match ID").unwrap();
    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();

    let unlinked = records.iter().filter(|r| r[next_index].is_empty()).count();
    assert_eq!(unlinked, 1, "only the winner slot has no next match");
}

/// Nothing is created for an empty record list
#[test]
fn test_empty_records_write_no_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("empty.csv");

    let written = save_records::<PoolSheetRecord>(&path, &[]).unwrap();

    assert!(written.is_none());
    assert!(!path.exists());
}
