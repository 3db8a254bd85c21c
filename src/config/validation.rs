use crate::error::AppError;
use std::path::Path;

/// Returns the base URL with a scheme and without trailing slashes.
///
/// A bare host such as `www.fencingtimelive.com` becomes
/// `https://www.fencingtimelive.com`.
pub fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") || trimmed.is_empty() {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - Base URL cannot be empty and must carry an http(s) scheme
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
/// - Pool id polling needs at least one attempt
pub fn validate_config(
    base_url: &str,
    log_file_path: &Option<String>,
    pool_poll_attempts: u32,
) -> Result<(), AppError> {
    if base_url.is_empty() {
        return Err(AppError::config_error("Base URL cannot be empty"));
    }

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(AppError::config_error(
            "Base URL must start with http:// or https://",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    if pool_poll_attempts == 0 {
        return Err(AppError::config_error(
            "pool_poll_attempts must be at least 1",
        ));
    }

    Ok(())
}
