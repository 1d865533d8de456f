//! Ini file generation
//!
//! One section per (kind, language) pair, stats sections first:
//!
//! ```text
//! [stats:en]
//! item_0_id=NUM_WINS
//! item_0_comment=Wins
//! item_0_start=0
//! [achievements:en]
//! item_0_id=ACH_WIN
//! item_0_title=Winner
//! item_0_comment=Win a game
//! item_1_id=ACH_SECRET
//! item_1_title=Secret
//! item_1_hidden=true
//! ```

use crate::records::{AchievementRecord, RecordSet, StatRecord};
use crate::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the ini file, replacing any existing file at `output_path`
///
/// # Arguments
///
/// * `output_path` - File to create; its directory must already exist
/// * `achievements` - Achievement records per language
/// * `stats` - Stat records per language
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the file
/// * `Err(AchievementsError::Io)` - Failed to create or write the file
pub fn write_ini(
    output_path: &Path,
    achievements: &RecordSet<AchievementRecord>,
    stats: &RecordSet<StatRecord>,
) -> Result<()> {
    let ini = format_ini(achievements, stats);

    let mut file = File::create(output_path)?;
    file.write_all(ini.as_bytes())?;

    Ok(())
}

/// Formats the record sets as ini text
pub fn format_ini(
    achievements: &RecordSet<AchievementRecord>,
    stats: &RecordSet<StatRecord>,
) -> String {
    let mut ini = String::new();

    for (lang, records) in stats.iter() {
        ini.push_str(&format!("[stats:{}]\n", lang));
        for (i, stat) in records.iter().enumerate() {
            ini.push_str(&format!("item_{}_id={}\n", i, stat.name));
            if !stat.description.is_empty() {
                ini.push_str(&format!("item_{}_comment={}\n", i, stat.description));
            }
            ini.push_str(&format!("item_{}_start={}\n", i, stat.start_value));
        }
    }

    for (lang, records) in achievements.iter() {
        ini.push_str(&format!("[achievements:{}]\n", lang));
        for (i, achievement) in records.iter().enumerate() {
            ini.push_str(&format!("item_{}_id={}\n", i, achievement.name));
            ini.push_str(&format!("item_{}_title={}\n", i, achievement.title));
            if !achievement.description.is_empty() {
                ini.push_str(&format!("item_{}_comment={}\n", i, achievement.description));
            }
            if achievement.hidden {
                ini.push_str(&format!("item_{}_hidden=true\n", i));
            }
        }
    }

    ini
}
