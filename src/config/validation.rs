use crate::config::types::Config;
use crate::{ConfigError, ConfigResult};
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_ids(config)?;
    validate_base_url(&config.base_url)?;

    if config.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the game identifiers
fn validate_ids(config: &Config) -> ConfigResult<()> {
    if config.steam_id == 0 {
        return Err(ConfigError::Validation(
            "steam id must be a positive integer".to_string(),
        ));
    }

    if config.galaxy_id == Some(0) {
        return Err(ConfigError::Validation(
            "galaxy id must be a positive integer".to_string(),
        ));
    }

    Ok(())
}

/// Validates the site root the page URLs are built from
fn validate_base_url(base_url: &str) -> ConfigResult<()> {
    let url = Url::parse(base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base URL '{}': {}", base_url, e)))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ConfigError::InvalidUrl(format!(
            "Base URL '{}' must use HTTP or HTTPS",
            base_url
        )));
    }

    Ok(())
}
