//! Achievement translations
//!
//! Translated titles and descriptions would come from a [`TranslationProvider`]
//! keyed by the language names the info page declares. No source of
//! translations exists yet, so the output stays English-only: the assembler
//! files the English records under `en` and leaves the provider's overrides
//! unused.

use crate::records::{AchievementRecord, LanguageSet, RecordSet, ENGLISH_CODE, FALLBACK_LANGUAGE};
use std::collections::HashMap;

/// Translated text for one achievement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatedText {
    pub title: String,
    pub description: String,
}

/// Declared language name → achievement index → translated text
pub type Translations = HashMap<String, HashMap<usize, TranslatedText>>;

/// Supplies per-language overrides for the English achievement records
pub trait TranslationProvider {
    /// Returns the overrides available for `languages`
    fn translations(&self, languages: &LanguageSet) -> Translations;
}

/// Provider used today: an empty English entry and nothing else
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishOnly;

impl TranslationProvider for EnglishOnly {
    fn translations(&self, _languages: &LanguageSet) -> Translations {
        let mut translations = Translations::new();
        translations.insert(FALLBACK_LANGUAGE.to_string(), HashMap::new());
        translations
    }
}

/// Builds the per-language achievement set
///
/// Always returns exactly one entry: the English records under `en`. Other
/// declared languages and any supplied overrides are dropped.
pub fn join_achievement_translations(
    english: Vec<AchievementRecord>,
    translations: &Translations,
) -> RecordSet<AchievementRecord> {
    let ignored: Vec<&str> = translations
        .iter()
        .filter(|(language, overrides)| *language != FALLBACK_LANGUAGE || !overrides.is_empty())
        .map(|(language, _)| language.as_str())
        .collect();
    if !ignored.is_empty() {
        tracing::debug!("ignoring translations for: {:?}", ignored);
    }

    let mut achievements = RecordSet::new();
    achievements.insert(ENGLISH_CODE, english);
    achievements
}
