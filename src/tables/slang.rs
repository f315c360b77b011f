//! Slang dictionaries
//!
//! Entries are listed in relevance order; the annotator reports matches in this order.

use crate::types::{FormalityLevel, SlangEntry};

use super::Language;

use FormalityLevel::{Casual, Informal, Vulgar};

/// Static form of a [`SlangEntry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlangDef {
    pub term: &'static str,
    pub meaning: &'static str,
    pub region: &'static str,
    pub formality: FormalityLevel,
    pub notes: Option<&'static str>,
}

impl SlangDef {
    /// First whitespace-delimited token of the term, lower-cased
    pub fn primary_token(&self) -> String {
        self.term
            .split_whitespace()
            .next()
            .unwrap_or(self.term)
            .to_lowercase()
    }

    pub fn to_entry(&self) -> SlangEntry {
        SlangEntry {
            term: self.term.to_string(),
            meaning: self.meaning.to_string(),
            region: self.region.to_string(),
            formality_level: self.formality,
            notes: self.notes.map(str::to_string),
        }
    }
}

const fn def(
    term: &'static str,
    meaning: &'static str,
    region: &'static str,
    formality: FormalityLevel,
    notes: &'static str,
) -> SlangDef {
    SlangDef {
        term,
        meaning,
        region,
        formality,
        notes: Some(notes),
    }
}

const SPANISH: &[SlangDef] = &[
    def("bb", "Baby/babe", "Latin America", Casual, "Common term of endearment"),
    def("hermosa", "Beautiful", "General", Casual, "Romantic compliment"),
    def("papi", "Daddy (flirty)", "Latin America", Informal, "Flirtatious, can be playful or sexual"),
    def("mami", "Mommy (flirty)", "Latin America", Informal, "Flirtatious term for attractive woman"),
    def("guapa", "Hot/pretty", "Spain", Casual, "Common compliment"),
    def("chula", "Cute/pretty", "Mexico", Casual, "Affectionate compliment"),
    def("te quiero", "I love you (casual)", "General", Casual, "Less intense than te amo"),
    def("rica", "Hot/delicious", "Latin America", Informal, "Can be sexual"),
    def("nena", "Babe/girl", "General", Casual, "Affectionate term"),
    def("que linda", "How pretty", "General", Casual, "Compliment"),
];

const FRENCH: &[SlangDef] = &[
    def("bb", "Bébé (baby)", "France", Casual, "Term of endearment"),
    def("ma belle", "My beautiful", "France", Casual, "Romantic compliment"),
    def("coucou", "Hey/hi", "France", Casual, "Friendly greeting"),
    def("bisous", "Kisses", "France", Casual, "Affectionate sign-off"),
    def("ma chérie", "My darling", "France", Casual, "Term of endearment"),
    def("canon", "Hot/gorgeous", "France", Informal, "Slang for attractive"),
    def("mdr", "LOL (mort de rire)", "France", Casual, "Laughing"),
];

const GERMAN: &[SlangDef] = &[
    def("süße", "Sweetie", "Germany", Casual, "Term of endearment"),
    def("schatz", "Treasure/darling", "Germany", Casual, "Affectionate term"),
    def("hübsch", "Pretty", "Germany", Casual, "Compliment"),
    def("geil", "Cool/hot", "Germany", Informal, "Can be sexual in context"),
    def("hallo schöne", "Hello beautiful", "Germany", Casual, "Greeting compliment"),
];

const PORTUGUESE: &[SlangDef] = &[
    def("gata", "Hot girl/babe", "Brazil", Informal, "Flirtatious compliment"),
    def("linda", "Beautiful", "General", Casual, "Common compliment"),
    def("amor", "Love", "General", Casual, "Term of endearment"),
    def("gostosa", "Hot/sexy", "Brazil", Vulgar, "Sexual compliment"),
    def("delícia", "Delicious/hot", "Brazil", Informal, "Flirtatious"),
    def("gatinha", "Kitten/cutie", "Brazil", Casual, "Affectionate"),
    def("oi bb", "Hi baby", "Brazil", Casual, "Casual greeting"),
];

const ITALIAN: &[SlangDef] = &[
    def("bella", "Beautiful", "Italy", Casual, "Common compliment"),
    def("ciao bella", "Hi beautiful", "Italy", Casual, "Friendly/flirty greeting"),
    def("amore", "Love", "Italy", Casual, "Term of endearment"),
    def("tesoro", "Treasure/darling", "Italy", Casual, "Affectionate"),
    def("sei bellissima", "You are gorgeous", "Italy", Casual, "Strong compliment"),
];

const JAPANESE: &[SlangDef] = &[
    def("かわいい", "Cute (kawaii)", "Japan", Casual, "Common compliment"),
    def("すごい", "Amazing (sugoi)", "Japan", Casual, "Expression of admiration"),
    def("綺麗", "Beautiful (kirei)", "Japan", Casual, "Compliment"),
    def("www", "LOL", "Japan", Casual, "Laughing (warai)"),
    def("好き", "I like you (suki)", "Japan", Casual, "Expression of affection"),
];

const KOREAN: &[SlangDef] = &[
    def("예쁘다", "Pretty (yeppeuda)", "South Korea", Casual, "Compliment"),
    def("사랑해", "I love you (saranghae)", "South Korea", Casual, "Expression of love"),
    def("대박", "Amazing (daebak)", "South Korea", Casual, "Excitement"),
    def("ㅋㅋㅋ", "LOL", "South Korea", Casual, "Laughing"),
    def("누나", "Older sister (noona)", "South Korea", Casual, "Term of respect/affection"),
];

const RUSSIAN: &[SlangDef] = &[
    def("красивая", "Beautiful (krasivaya)", "Russia", Casual, "Compliment"),
    def("привет", "Hi (privet)", "Russia", Casual, "Casual greeting"),
    def("милая", "Sweet/cute (milaya)", "Russia", Casual, "Affectionate"),
    def("солнышко", "Sunshine", "Russia", Casual, "Term of endearment"),
];

const ENGLISH: &[SlangDef] = &[
    def("bb", "Baby", "Internet", Casual, "Common abbreviation"),
    def("bae", "Babe/significant other", "Internet", Casual, "Term of endearment"),
    def("lol", "Laughing out loud", "Internet", Casual, "Amusement"),
    def("ngl", "Not gonna lie", "Internet", Casual, "Honesty marker"),
    def("tbh", "To be honest", "Internet", Casual, "Honesty marker"),
    def("lowkey", "Secretly/somewhat", "Internet", Casual, "Modifier"),
    def("highkey", "Obviously/very much", "Internet", Casual, "Modifier"),
    def("simp", "Someone overly devoted", "Internet", Informal, "Can be teasing"),
    def("fire", "Amazing/hot", "Internet", Casual, "Compliment"),
    def("goat", "Greatest of all time", "Internet", Casual, "High praise"),
];

/// Slang table for a language; Chinese and Arabic have none
pub fn slang_table(language: Language) -> &'static [SlangDef] {
    match language {
        Language::English => ENGLISH,
        Language::Spanish => SPANISH,
        Language::French => FRENCH,
        Language::German => GERMAN,
        Language::Portuguese => PORTUGUESE,
        Language::Italian => ITALIAN,
        Language::Japanese => JAPANESE,
        Language::Korean => KOREAN,
        Language::Russian => RUSSIAN,
        Language::Chinese | Language::Arabic => &[],
    }
}

/// English and internet slang, scanned as a fallback for every non-English message
pub fn internet_slang() -> &'static [SlangDef] {
    ENGLISH
}
