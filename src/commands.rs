use crate::cli::{Args, Command};
use crate::config::Config;
use crate::constants::outputs;
use crate::data_fetcher::{
    PageSession, ScrapeOptions, Selection, TournamentScrape, scrape_tournament,
};
use crate::error::AppError;
use crate::export::{CsvRecord, output_file, save_records};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Handles the --list-config command.
///
/// Prints the config file location and current settings.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// Edits the stored config file in place. Environment overrides are not
/// written back, and a file that fails to parse is reported instead of
/// being replaced with defaults.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_file(&Config::get_config_path(), args).await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Applies the config-editing flags of `args` to the file at `path`.
///
/// A missing file starts from the defaults.
pub async fn update_config_file(path: &str, args: &Args) -> Result<Config, AppError> {
    let mut config = if Path::new(path).exists() {
        Config::load_from_path(path).await?
    } else {
        Config::default()
    };

    apply_config_updates(&mut config, args);
    config.validate()?;
    config.save_to_path(path).await?;

    Ok(config)
}

/// Applies the config-editing flags of `args` to `config`.
pub fn apply_config_updates(config: &mut Config, args: &Args) {
    if let Some(new_base_url) = &args.new_base_url {
        config.base_url = crate::config::validation::normalize_base_url(new_base_url);
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }
}

/// Handles the scrape subcommands.
///
/// Walks every event of the tournament, then writes one CSV per record kind
/// the subcommand selected. A tournament that yields nothing writes no files.
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - The CSV files that were written
/// * `Err(AppError)` - The schedule page failed, or a file could not be written
pub async fn handle_scrape_command(
    command: &Command,
    args: &Args,
    config: &Config,
) -> Result<Vec<PathBuf>, AppError> {
    let session = PageSession::new(config)?;
    let selection = command.selection();
    let options = ScrapeOptions::new(selection, config.pool_poll_policy());

    let scrape = scrape_tournament(&session, command.url(), &options).await?;
    info!(
        "Scraped {} events of '{}' ({} skipped)",
        scrape.events_scraped, scrape.context.tournament_name, scrape.events_skipped
    );

    let output_dir = args
        .output_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.output_path());

    let written = write_outputs(&scrape, selection, &output_dir)?;
    if written.is_empty() {
        warn!("Nothing to write for '{}'", scrape.context.tournament_name);
    }
    for path in &written {
        println!("{}", path.display());
    }

    Ok(written)
}

/// Writes the selected record kinds of `scrape` under `output_dir`.
///
/// File names start with the sanitized tournament name. Empty record
/// kinds are skipped.
pub fn write_outputs(
    scrape: &TournamentScrape,
    selection: Selection,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, AppError> {
    let tournament = scrape.context.tournament_name.as_str();
    let mut written = Vec::new();

    if selection.pools {
        save_kind(
            output_dir,
            tournament,
            outputs::BOUT_ORDERS,
            &scrape.pools.bout_orders,
            &mut written,
        )?;
        save_kind(
            output_dir,
            tournament,
            outputs::POOL_SHEETS,
            &scrape.pools.pool_sheets,
            &mut written,
        )?;
    }
    if selection.tableau {
        save_kind(
            output_dir,
            tournament,
            outputs::TABLEAU_RESULTS,
            &scrape.tableau_entries,
            &mut written,
        )?;
        save_kind(
            output_dir,
            tournament,
            outputs::TABLEAU_BRACKET,
            &scrape.bracket_rows,
            &mut written,
        )?;
    }
    if selection.matches {
        save_kind(
            output_dir,
            tournament,
            outputs::PAIRED_MATCHES,
            &scrape.paired_matches,
            &mut written,
        )?;
    }
    if selection.results {
        save_kind(
            output_dir,
            tournament,
            outputs::FENCING_RESULTS,
            &scrape.results,
            &mut written,
        )?;
    }

    Ok(written)
}

fn save_kind<R: CsvRecord>(
    output_dir: &Path,
    tournament: &str,
    suffix: &str,
    records: &[R],
    written: &mut Vec<PathBuf>,
) -> Result<(), AppError> {
    let path = output_file(output_dir, tournament, suffix);
    if let Some(path) = save_records(&path, records)? {
        written.push(path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{
        BoutOrderRecord, MatchTuple, PairedMatchRecord, PoolSheetRecord, ScrapeContext,
    };
    use crate::constants::env_vars;
    use clap::Parser;
    use serial_test::serial;
    use tempfile::tempdir;

    fn scrape_with_pools_and_matches() -> TournamentScrape {
        let mut scrape = TournamentScrape {
            context: ScrapeContext::new(
                "Ontario Cup 1: Cadet",
                "https://example.test/tournaments/eventSchedule/T1",
                "https://example.test",
            ),
            pools: Default::default(),
            tableau_entries: Vec::new(),
            bracket_rows: Vec::new(),
            paired_matches: Vec::new(),
            results: Vec::new(),
            events_scraped: 1,
            events_skipped: 0,
        };
        scrape.pools.bout_orders.push(BoutOrderRecord {
            right_pool_position: "1".to_string(),
            right_fencer: "ALPHA Ann".to_string(),
            ..Default::default()
        });
        scrape.pools.pool_sheets.push(PoolSheetRecord {
            fencer: "ALPHA Ann".to_string(),
            pool_position: "1".to_string(),
            ..Default::default()
        });
        scrape.paired_matches.push(PairedMatchRecord {
            event: "Cadet Women's Epee".to_string(),
            matched: MatchTuple::new("ALPHA Ann", "BRAVO Bea", "15 - 10"),
        });
        scrape
    }

    #[test]
    fn test_write_outputs_respects_selection() {
        let dir = tempdir().unwrap();
        let scrape = scrape_with_pools_and_matches();

        let written = write_outputs(&scrape, Selection::pools(), dir.path()).unwrap();

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "Ontario_Cup_1_Cadet_bout_orders.csv".to_string(),
                "Ontario_Cup_1_Cadet_pool_sheets.csv".to_string(),
            ]
        );
    }

    #[test]
    fn test_write_outputs_skips_empty_kinds() {
        let dir = tempdir().unwrap();
        let scrape = scrape_with_pools_and_matches();

        let written = write_outputs(&scrape, Selection::all(), dir.path()).unwrap();

        // No tableau entries, bracket rows or results in this scrape
        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|p| p.exists()));
        assert!(
            written
                .iter()
                .any(|p| p.to_string_lossy().ends_with(outputs::PAIRED_MATCHES))
        );
    }

    #[test]
    fn test_apply_config_updates() {
        let mut config = Config::default();
        let args = Args::try_parse_from([
            "ftl_scrape",
            "--config",
            "example.test/",
            "--set-log-file",
            "/tmp/ftl.log",
        ])
        .unwrap();

        apply_config_updates(&mut config, &args);

        assert_eq!(config.base_url, "https://example.test");
        assert_eq!(config.log_file_path.as_deref(), Some("/tmp/ftl.log"));
    }

    #[test]
    fn test_clear_log_file_path() {
        let mut config = Config {
            log_file_path: Some("/tmp/ftl.log".to_string()),
            ..Config::default()
        };
        let args = Args::try_parse_from(["ftl_scrape", "--clear-log-file"]).unwrap();

        apply_config_updates(&mut config, &args);

        assert!(config.log_file_path.is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_update_config_file_ignores_env_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path = path.to_string_lossy().to_string();
        Config {
            base_url: "https://stored.test".to_string(),
            ..Config::default()
        }
        .save_to_path(&path)
        .await
        .unwrap();

        let log_path = dir.path().join("ftl.log").to_string_lossy().to_string();
        let args =
            Args::try_parse_from(["ftl_scrape", "--set-log-file", log_path.as_str()]).unwrap();

        unsafe {
            std::env::set_var(env_vars::BASE_URL, "https://override.test");
            std::env::set_var(env_vars::OUTPUT_DIR, "/tmp/override");
        }
        let result = update_config_file(&path, &args).await;
        unsafe {
            std::env::remove_var(env_vars::BASE_URL);
            std::env::remove_var(env_vars::OUTPUT_DIR);
        }
        result.unwrap();

        let saved = Config::load_from_path(&path).await.unwrap();
        assert_eq!(saved.base_url, "https://stored.test");
        assert_eq!(saved.output_dir, ".");
        assert_eq!(saved.log_file_path, Some(log_path));
    }

    #[tokio::test]
    async fn test_update_config_file_keeps_unreadable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = [not toml").unwrap();
        let path = path.to_string_lossy().to_string();
        let args = Args::try_parse_from(["ftl_scrape", "--clear-log-file"]).unwrap();

        let result = update_config_file(&path, &args).await;

        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "base_url = [not toml"
        );
    }

    #[tokio::test]
    async fn test_update_config_file_starts_from_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let path = path.to_string_lossy().to_string();
        let args = Args::try_parse_from(["ftl_scrape", "--config", "mirror.test"]).unwrap();

        let config = update_config_file(&path, &args).await.unwrap();

        assert_eq!(config.base_url, "https://mirror.test");
        assert_eq!(Config::load_from_path(&path).await.unwrap(), config);
    }
}
