//! The fetch → parse → validate → format → write pipeline
//!
//! Everything runs on the calling thread: the stats page is fetched and
//! parsed, then the info page, then the records are assembled and written.
//! Any failure stops the run before the output file is touched.

use crate::config::{validate, Config};
use crate::output::write_ini;
use crate::records::{english_stats, AchievementRecord, RecordSet, StatRecord};
use crate::steamdb::{build_http_client, fetch_document, parse_info_page, parse_stats_page};
use crate::translation::{join_achievement_translations, EnglishOnly, TranslationProvider};
use crate::{AchievementsError, ConfigError, Result};
use std::path::PathBuf;
use url::Url;

/// Everything scraped for one game, ready to be written
#[derive(Debug, Clone)]
pub struct Extraction {
    pub achievements: RecordSet<AchievementRecord>,
    pub stats: RecordSet<StatRecord>,
}

/// Runs the whole pipeline with the English-only translation provider
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written ini file
/// * `Err(AchievementsError)` - The run failed; no file was written unless the
///   failure happened while writing
pub fn run(config: &Config) -> Result<PathBuf> {
    run_with_translations(config, &EnglishOnly)
}

/// Runs the whole pipeline with a caller-supplied translation provider
pub fn run_with_translations(
    config: &Config,
    provider: &dyn TranslationProvider,
) -> Result<PathBuf> {
    let extraction = extract(config, provider)?;

    let output_path = config.output_path();
    tracing::debug!("writing: {}", output_path.display());
    write_ini(&output_path, &extraction.achievements, &extraction.stats)?;

    tracing::info!(
        "Wrote {} achievements and {} stat sections to {}",
        extraction
            .achievements
            .iter()
            .map(|(_, records)| records.len())
            .sum::<usize>(),
        extraction.stats.len(),
        output_path.display()
    );

    Ok(output_path)
}

/// Fetches and parses both pages without writing anything
pub fn extract(config: &Config, provider: &dyn TranslationProvider) -> Result<Extraction> {
    validate(config)?;

    let client = build_http_client(config).map_err(|source| AchievementsError::Http {
        url: config.base_url.clone(),
        source,
    })?;

    let stats_url = page_url(config.stats_url(), config)?;
    tracing::debug!("query {}", stats_url);
    let stats_page = parse_stats_page(&fetch_document(&client, &stats_url)?, stats_url.as_str())?;
    tracing::debug!("found {} achievements", stats_page.achievements.len());
    tracing::debug!("found {} stats", stats_page.stats.len());

    let info_url = page_url(config.info_url(), config)?;
    tracing::debug!("query {}", info_url);
    let languages = parse_info_page(&fetch_document(&client, &info_url)?, info_url.as_str())?;
    tracing::debug!("found langs: {:?}", languages.iter().collect::<Vec<_>>());

    let translations = provider.translations(&languages);
    let achievements = join_achievement_translations(stats_page.achievements, &translations);
    let stats = english_stats(stats_page.stats);

    Ok(Extraction {
        achievements,
        stats,
    })
}

fn page_url(url: std::result::Result<Url, url::ParseError>, config: &Config) -> Result<Url> {
    url.map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid base URL '{}': {}", config.base_url, e)).into()
    })
}
