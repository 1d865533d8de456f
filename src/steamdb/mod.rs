//! SteamDB page handling
//!
//! This module contains everything that touches the statistics site:
//! - Fetching pages with a blocking HTTP client
//! - Rendering table cells to text the way a browser would show them
//! - Parsing achievement and stat rows from the stats page
//! - Validating the info page layout and reading its language list

mod fetcher;
mod info;
mod stats;
mod text;

pub use fetcher::{build_http_client, fetch_document};
pub use info::parse_info_page;
pub use stats::{parse_stats_page, StatsPage};
pub use text::rendered_text;

use crate::AchievementsError;
use scraper::Selector;

/// Compiles one of the fixed CSS selectors used by the page parsers
fn selector(css: &str) -> Result<Selector, AchievementsError> {
    Selector::parse(css).map_err(|e| AchievementsError::HtmlParse {
        message: format!("invalid selector '{}': {:?}", css, e),
    })
}
