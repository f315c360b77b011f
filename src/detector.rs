//! Language detection
//!
//! A fixed priority cascade, not a scored classifier: script ranges first, then Latin-script
//! diacritics and whole-word markers, then English.

use regex::Regex;

use crate::tables::markers::{LATIN_MARKERS, SCRIPT_MARKERS};
use crate::tables::Language;

/// Outcome of language detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub language: Language,
    pub region: &'static str,
}

impl Detection {
    fn of(language: Language) -> Self {
        Self {
            language,
            region: language.default_region(),
        }
    }
}

/// Detects the language of a message from its characters and marker words
pub struct LanguageDetector {
    /// One whole-word pattern per entry of `LATIN_MARKERS`, same order
    word_patterns: Vec<Regex>,
}

impl LanguageDetector {
    pub fn new() -> Self {
        let word_patterns = LATIN_MARKERS
            .iter()
            .map(|marker| {
                let alternation = marker
                    .words
                    .iter()
                    .map(|word| regex::escape(word))
                    .collect::<Vec<_>>()
                    .join("|");
                Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
                    .expect("marker words are escaped literals")
            })
            .collect();

        Self { word_patterns }
    }

    /// Classifies `text` into a language and its default region
    pub fn detect(&self, text: &str) -> Detection {
        if let Some(language) = Self::detect_script(text) {
            return Detection::of(language);
        }

        let lower = text.to_lowercase();
        for (marker, words) in LATIN_MARKERS.iter().zip(&self.word_patterns) {
            let has_diacritic = !marker.diacritics.is_empty()
                && lower.chars().any(|c| marker.diacritics.contains(c));
            if has_diacritic || words.is_match(text) {
                return Detection::of(marker.language);
            }
        }

        Detection::of(Language::English)
    }

    fn detect_script(text: &str) -> Option<Language> {
        SCRIPT_MARKERS
            .iter()
            .find(|marker| {
                text.chars().any(|c| {
                    marker
                        .ranges
                        .iter()
                        .any(|&(start, end)| (start..=end).contains(&c))
                })
            })
            .map(|marker| marker.language)
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}
