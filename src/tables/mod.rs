//! Reference tables
//!
//! Static, read-only data consumed by every decoding stage. Each language has exactly one
//! slang table, one glossary and one set of lexical markers; nothing else in the crate keeps
//! its own copy of a keyword list.
//!
//! - `slang` - slang dictionaries per language (English doubles as the internet-slang fallback)
//! - `tones` - weighted tone pattern table
//! - `glossary` - word/phrase glosses per language
//! - `markers` - lexical markers for language detection and explanation rules

use std::fmt;

pub mod glossary;
pub mod markers;
pub mod slang;
pub mod tones;

/// Languages the reference tables know about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Portuguese,
    Italian,
    Japanese,
    Korean,
    Russian,
    Chinese,
    Arabic,
}

impl Language {
    pub const ALL: [Language; 11] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Portuguese,
        Language::Italian,
        Language::Japanese,
        Language::Korean,
        Language::Russian,
        Language::Chinese,
        Language::Arabic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Portuguese => "Portuguese",
            Language::Italian => "Italian",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Russian => "Russian",
            Language::Chinese => "Chinese",
            Language::Arabic => "Arabic",
        }
    }

    /// Region reported when this language is detected
    pub fn default_region(&self) -> &'static str {
        match self {
            Language::English => "General",
            Language::Spanish => "Latin America",
            Language::French => "France",
            Language::German => "Germany",
            Language::Portuguese => "Brazil",
            Language::Italian => "Italy",
            Language::Japanese => "Japan",
            Language::Korean => "South Korea",
            Language::Russian => "Russia",
            Language::Chinese => "China",
            Language::Arabic => "Middle East",
        }
    }

    /// Case-insensitive lookup by display name
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns true when `language` names English, ignoring case
pub fn is_english(language: &str) -> bool {
    Language::from_name(language) == Some(Language::English)
}

const SUPPORTED_LANGUAGES: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Portuguese",
    "Italian",
    "Japanese",
    "Korean",
    "Russian",
    "Chinese",
    "Arabic",
    "Dutch",
    "Polish",
    "Turkish",
    "Hindi",
];

const COMMON_REGIONS: &[&str] = &[
    "United States",
    "United Kingdom",
    "Canada",
    "Australia",
    "Mexico",
    "Spain",
    "Brazil",
    "France",
    "Germany",
    "Italy",
    "Japan",
    "South Korea",
    "Russia",
    "China",
    "India",
    "Middle East",
    "Latin America",
    "Europe",
];

/// Languages a caller may pick as a source override
pub fn supported_languages() -> &'static [&'static str] {
    SUPPORTED_LANGUAGES
}

/// Regions a caller may pick as a region override
pub fn common_regions() -> &'static [&'static str] {
    COMMON_REGIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_lookup_ignores_case() {
        assert_eq!(Language::from_name("spanish"), Some(Language::Spanish));
        assert_eq!(Language::from_name(" KOREAN "), Some(Language::Korean));
        assert_eq!(Language::from_name("Klingon"), None);
    }

    #[test]
    fn test_is_english() {
        assert!(is_english("English"));
        assert!(is_english("english"));
        assert!(!is_english("Spanish"));
        assert!(!is_english("Dutch"));
    }

    #[test]
    fn test_every_table_language_is_supported() {
        for language in Language::ALL {
            assert!(
                supported_languages().contains(&language.name()),
                "{} missing from supported languages",
                language
            );
        }
        assert_eq!(supported_languages().len(), 15);
        assert_eq!(common_regions().len(), 18);
    }
}
