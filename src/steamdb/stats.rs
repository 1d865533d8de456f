//! Stats page parser
//!
//! The stats page lists achievements as `<tr id="achievement-…">` rows with
//! three cells (api name, title + description, icon) and stats as
//! `<tr id="stat-…">` rows with three cells (api name, display name, default
//! value). Cells are read in document order and grouped back into rows of
//! three; a trailing partial group is ignored.

use super::{rendered_text, selector};
use crate::records::{AchievementRecord, StatRecord};
use crate::{AchievementsError, Result};
use scraper::{ElementRef, Html};

/// Description shown for achievements without one
const NO_DESCRIPTION_PLACEHOLDER: &str = "No description.";

/// Description shown for hidden achievements
const HIDDEN_PLACEHOLDER: &str = "Hidden.";

/// Display name shown for stats without one
const NO_NAME_PLACEHOLDER: &str = "no name";

const ACHIEVEMENT_CELLS: &str = "tr[id^='achievement-'] > td";
const STAT_CELLS: &str = "tr[id^='stat-'] > td";

// name, text, img
const ACHIEVEMENT_COLUMNS: usize = 3;
// name, text, default value
const STAT_COLUMNS: usize = 3;

/// Records extracted from the stats page, in page order
#[derive(Debug, Clone, Default)]
pub struct StatsPage {
    pub achievements: Vec<AchievementRecord>,
    pub stats: Vec<StatRecord>,
}

/// Parses the achievement and stat tables of a stats page
///
/// # Arguments
///
/// * `document` - The fetched stats page
/// * `url` - Where the page came from, for diagnostics
///
/// # Returns
///
/// * `Ok(StatsPage)` - At least one achievement, possibly no stats
/// * `Err(AchievementsError::NoAchievements)` - No achievement rows on the page
/// * `Err(AchievementsError::MalformedAchievementText)` - A title cell did not
///   render to exactly a title line and a description line
pub fn parse_stats_page(document: &Html, url: &str) -> Result<StatsPage> {
    let achievement_cells: Vec<ElementRef> =
        document.select(&selector(ACHIEVEMENT_CELLS)?).collect();
    if achievement_cells.len() < ACHIEVEMENT_COLUMNS {
        return Err(AchievementsError::NoAchievements {
            url: url.to_string(),
        });
    }

    let stat_cells: Vec<ElementRef> = document.select(&selector(STAT_CELLS)?).collect();

    let stats = stat_cells
        .chunks_exact(STAT_COLUMNS)
        .map(|row| parse_stat(row[0], row[1], row[2]))
        .collect();

    let achievements = achievement_cells
        .chunks_exact(ACHIEVEMENT_COLUMNS)
        .map(|row| parse_achievement(row[0], row[1]))
        .collect::<Result<Vec<_>>>()?;

    Ok(StatsPage {
        achievements,
        stats,
    })
}

fn parse_stat(name: ElementRef, description: ElementRef, start: ElementRef) -> StatRecord {
    let mut description = rendered_text(description);
    if description == NO_NAME_PLACEHOLDER {
        description.clear();
    }

    StatRecord {
        name: rendered_text(name),
        description,
        start_value: rendered_text(start),
    }
}

fn parse_achievement(name: ElementRef, text: ElementRef) -> Result<AchievementRecord> {
    let name = rendered_text(name);
    let text = rendered_text(text);
    let lines: Vec<&str> = text.split('\n').collect();

    let (title, description) = match lines.as_slice() {
        [title, description] => (*title, *description),
        _ => {
            return Err(AchievementsError::MalformedAchievementText {
                name,
                lines: lines.iter().map(|line| line.to_string()).collect(),
            })
        }
    };

    let hidden = description == HIDDEN_PLACEHOLDER;
    let description = if hidden || description == NO_DESCRIPTION_PLACEHOLDER {
        String::new()
    } else {
        description.to_string()
    };

    Ok(AchievementRecord {
        name,
        title: title.to_string(),
        description,
        hidden,
    })
}
