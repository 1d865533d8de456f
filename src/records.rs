//! Record types extracted from the SteamDB pages
//!
//! Records keep the order in which their rows appear on the page; a record's
//! position in its list is the index written to the ini file.

/// Language code under which the scraped records are stored
pub const ENGLISH_CODE: &str = "en";

/// Language assumed when the info page declares none
pub const FALLBACK_LANGUAGE: &str = "English";

/// One achievement definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementRecord {
    /// Internal API name (e.g. `ACH_WIN_ONE_GAME`)
    pub name: String,

    /// Display title
    pub title: String,

    /// Display description; empty for "No description." and "Hidden."
    pub description: String,

    /// Set when the page showed the "Hidden." placeholder
    pub hidden: bool,
}

/// One stat definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRecord {
    pub name: String,

    /// Display name; empty for the "no name" placeholder
    pub description: String,

    /// Default value, kept verbatim
    pub start_value: String,
}

/// Languages declared as supported for achievements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSet(Vec<String>);

impl LanguageSet {
    /// Splits an "Achievement Languages" value on comma-space
    pub fn parse(value: &str) -> Self {
        let languages: Vec<String> = value
            .split(", ")
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
            .map(str::to_string)
            .collect();

        if languages.is_empty() {
            Self::fallback()
        } else {
            Self(languages)
        }
    }

    /// The single-entry set used when the page declares nothing
    pub fn fallback() -> Self {
        Self(vec![FALLBACK_LANGUAGE.to_string()])
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for LanguageSet {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Records of one kind, grouped by language code in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet<T> {
    languages: Vec<(String, Vec<T>)>,
}

impl<T> RecordSet<T> {
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
        }
    }

    /// Stores `records` under `code`, replacing any previous entry in place
    pub fn insert(&mut self, code: impl Into<String>, records: Vec<T>) {
        let code = code.into();
        match self.languages.iter_mut().find(|(existing, _)| *existing == code) {
            Some((_, slot)) => *slot = records,
            None => self.languages.push((code, records)),
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, code: &str) -> Option<&[T]> {
        self.languages
            .iter()
            .find(|(existing, _)| existing == code)
            .map(|(_, records)| records.as_slice())
    }

    /// Iterates `(language code, records)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.languages
            .iter()
            .map(|(code, records)| (code.as_str(), records.as_slice()))
    }

    #[cfg(test)]
    pub(crate) fn codes(&self) -> Vec<&str> {
        self.languages.iter().map(|(code, _)| code.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl<T> Default for RecordSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps the English stat records; an empty list yields an empty set
pub fn english_stats(stats: Vec<StatRecord>) -> RecordSet<StatRecord> {
    let mut set = RecordSet::new();
    if !stats.is_empty() {
        set.insert(ENGLISH_CODE, stats);
    }
    set
}
