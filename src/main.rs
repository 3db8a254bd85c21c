// src/main.rs
use clap::{CommandFactory, Parser};
use ftl_scrape::cli::Args;
use ftl_scrape::commands::{
    handle_config_update_command, handle_list_config_command, handle_scrape_command,
};
use ftl_scrape::config::Config;
use ftl_scrape::error::AppError;
use ftl_scrape::logging::setup_logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let args = Args::parse();

    // Set up logging to both console and file
    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::debug!("Logging to {log_file_path}");

    // Handle configuration operations
    if args.list_config {
        return handle_list_config_command().await;
    }

    if args.new_base_url.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
    {
        return handle_config_update_command(&args).await;
    }

    let Some(command) = args.command.clone() else {
        Args::command().print_help()?;
        return Ok(());
    };

    let config = Config::load().await?;
    handle_scrape_command(&command, &args, &config).await?;

    Ok(())
}
