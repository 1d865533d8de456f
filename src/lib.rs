//! Steam-Achievements: SteamDB achievement metadata extractor
//!
//! This crate scrapes the SteamDB stats and info pages of a single game and
//! writes the achievement and stat definitions as an ini file consumed by the
//! engine's achievement subsystem.

pub mod config;
pub mod output;
pub mod pipeline;
pub mod records;
pub mod steamdb;
pub mod translation;

use thiserror::Error;

/// Exit status used for every fetch, parse, validation or write failure
pub const FAILURE_EXIT_CODE: u8 = 127;

/// Main error type for Steam-Achievements operations
#[derive(Debug, Error)]
pub enum AchievementsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTML parse error: {message}")]
    HtmlParse { message: String },

    #[error("found NO achievements at {url}")]
    NoAchievements { url: String },

    #[error("Unexpected description format for {name}: {lines:?}")]
    MalformedAchievementText { name: String, lines: Vec<String> },

    #[error("found NO information data at {url}")]
    NoInfoData { url: String },

    #[error("found NO {marker}\nEntries: {keys:?}")]
    MissingMarker { marker: String, keys: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Steam-Achievements operations
pub type Result<T> = std::result::Result<T, AchievementsError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Maps the outcome of a run to the process exit status
pub fn exit_status<T>(result: &Result<T>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => FAILURE_EXIT_CODE,
    }
}

// Re-export commonly used types
pub use config::Config;
pub use records::{AchievementRecord, LanguageSet, RecordSet, StatRecord};
