//! HTTP fetcher implementation
//!
//! Both pages are fetched with one blocking client, strictly one after the
//! other. There is no retry: any transport failure or non-success status ends
//! the run.

use crate::config::Config;
use crate::{AchievementsError, Result};
use reqwest::blocking::Client;
use scraper::Html;
use std::time::Duration;
use url::Url;

/// Builds the HTTP client used for both page requests
///
/// # Arguments
///
/// * `config` - The run configuration (supplies the user agent)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &Config) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches `url` and parses the body as an HTML document
///
/// DNS failures, refused connections, timeouts and non-2xx statuses all
/// surface as [`AchievementsError::Http`] carrying the URL.
pub fn fetch_document(client: &Client, url: &Url) -> Result<Html> {
    let http_error = |source: reqwest::Error| AchievementsError::Http {
        url: url.to_string(),
        source,
    };

    let response = client
        .get(url.clone())
        .send()
        .and_then(|response| response.error_for_status())
        .map_err(http_error)?;

    tracing::debug!("{} answered {}", url, response.status());

    let body = response.text().map_err(http_error)?;
    Ok(Html::parse_document(&body))
}
