//! Lexical markers
//!
//! Script ranges and Latin-script markers drive language detection. The greeting,
//! compliment, love and question lists drive the explanation rules.

use super::Language;

/// Unicode blocks that identify a non-Latin script
pub struct ScriptMarker {
    pub language: Language,
    pub ranges: &'static [(char, char)],
}

/// Checked in order; the first script present in the text wins
pub const SCRIPT_MARKERS: &[ScriptMarker] = &[
    ScriptMarker {
        language: Language::Japanese,
        ranges: &[('\u{3040}', '\u{309F}'), ('\u{30A0}', '\u{30FF}')],
    },
    ScriptMarker {
        language: Language::Korean,
        ranges: &[('\u{AC00}', '\u{D7AF}'), ('\u{1100}', '\u{11FF}')],
    },
    ScriptMarker {
        language: Language::Chinese,
        ranges: &[('\u{4E00}', '\u{9FFF}')],
    },
    ScriptMarker {
        language: Language::Russian,
        ranges: &[('\u{0400}', '\u{04FF}')],
    },
    ScriptMarker {
        language: Language::Arabic,
        ranges: &[('\u{0600}', '\u{06FF}')],
    },
];

/// Diacritics and whole-word markers for a Latin-script language
pub struct LatinMarker {
    pub language: Language,
    /// Any of these characters identifies the language; empty disables the test
    pub diacritics: &'static str,
    pub words: &'static [&'static str],
}

/// Checked in order after every script marker
pub const LATIN_MARKERS: &[LatinMarker] = &[
    LatinMarker {
        language: Language::Spanish,
        diacritics: "áéíóúñ¿¡",
        words: &["hola", "hermosa", "guapa", "papi", "mami", "amor"],
    },
    LatinMarker {
        language: Language::French,
        diacritics: "àâçèéêëîïôùûüœæ",
        words: &["coucou", "bisous", "belle", "chérie"],
    },
    LatinMarker {
        language: Language::German,
        diacritics: "äöüß",
        words: &["schatz", "süße", "hübsch", "geil"],
    },
    LatinMarker {
        language: Language::Portuguese,
        diacritics: "ãõâêô",
        words: &["gata", "linda", "gostosa", "delícia"],
    },
    LatinMarker {
        language: Language::Italian,
        diacritics: "",
        words: &["ciao", "bella", "amore", "tesoro", "bellissima"],
    },
];

pub const GREETINGS: &[&str] = &[
    "hola", "coucou", "salut", "bonjour", "hallo", "oi", "olá", "ciao", "привет", "hi", "hello",
    "hey", "こんにちは", "안녕",
];

pub const COMPLIMENTS: &[&str] = &[
    "hermosa", "linda", "guapa", "bella", "belle", "beautiful", "gorgeous", "pretty", "hot",
    "sexy", "cute", "かわいい", "예쁘다", "красивая", "hübsch", "schön", "gata", "gostosa",
];

pub const LOVE_TERMS: &[&str] = &[
    "te quiero", "te amo", "je t'aime", "love", "amor", "amore", "사랑해", "好き",
];

/// Interrogative words matched as whole words, across languages
pub const QUESTION_WORDS: &[&str] = &[
    "how", "what", "where", "when", "why", "can", "could", "would", "como", "que", "où", "quand",
    "pourquoi",
];
