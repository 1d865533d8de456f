//! Info page parser
//!
//! The info page carries a two-column key/value table inside `div#info`.
//! The marker label has to be present before anything else on the page is
//! trusted; its absence means the site layout changed.

use super::{rendered_text, selector};
use crate::records::LanguageSet;
use crate::{AchievementsError, Result};
use scraper::{ElementRef, Html};

/// Key whose presence proves the page has the expected layout
const MARKER_LABEL: &str = "Store Release Date";

/// Key holding the comma separated achievement languages
const LANGUAGES_LABEL: &str = "Achievement Languages";

const INFO_CELLS: &str = "div#info > table > tbody > tr > td";

// key, value
const INFO_COLUMNS: usize = 2;

/// Validates the info page and extracts the declared achievement languages
///
/// # Returns
///
/// * `Ok(LanguageSet)` - The declared languages, or `English` when undeclared
/// * `Err(AchievementsError::NoInfoData)` - The key/value table is missing or empty
/// * `Err(AchievementsError::MissingMarker)` - The marker label was never seen;
///   the error lists every key found
pub fn parse_info_page(document: &Html, url: &str) -> Result<LanguageSet> {
    let cells: Vec<ElementRef> = document.select(&selector(INFO_CELLS)?).collect();
    if cells.len() < INFO_COLUMNS {
        return Err(AchievementsError::NoInfoData {
            url: url.to_string(),
        });
    }

    let entries: Vec<(String, String)> = cells
        .chunks_exact(INFO_COLUMNS)
        .map(|row| (rendered_text(row[0]), rendered_text(row[1])))
        .collect();

    let mut is_format_ok = false;
    let mut languages = LanguageSet::fallback();

    for (key, value) in &entries {
        if key == MARKER_LABEL {
            is_format_ok = true;
        }
        if key == LANGUAGES_LABEL {
            languages = LanguageSet::parse(value);
        }
    }

    if !is_format_ok {
        return Err(AchievementsError::MissingMarker {
            marker: MARKER_LABEL.to_string(),
            keys: entries.into_iter().map(|(key, _)| key).collect(),
        });
    }

    Ok(languages)
}
