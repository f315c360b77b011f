//! Bracketed gloss rendering
//!
//! Not a translation: known words and phrases are swapped for `[english hint]` and
//! everything else is left as-is, lower-cased.

use std::collections::HashMap;

use regex::{NoExpand, Regex};

use crate::tables::glossary::glossary;
use crate::tables::{is_english, Language};

/// Renders a message into a rough English gloss
///
/// The decoder takes this as a strategy so another backend can be swapped in without
/// touching the pipeline.
pub trait Translator: Send + Sync {
    fn gloss(&self, text: &str, language: &str) -> String;
}

struct Substitution {
    pattern: Regex,
    replacement: String,
}

/// Glossary-backed [`Translator`]
pub struct GlossaryTranslator {
    substitutions: HashMap<Language, Vec<Substitution>>,
}

impl GlossaryTranslator {
    pub fn new() -> Self {
        let substitutions = Language::ALL
            .iter()
            .map(|&language| (language, Self::compile(language)))
            .collect();

        Self { substitutions }
    }

    /// Longest key first so that phrases are replaced before the words inside them
    fn compile(language: Language) -> Vec<Substitution> {
        let mut entries = glossary(language).to_vec();
        entries.sort_by_key(|(key, _)| std::cmp::Reverse(key.chars().count()));

        entries
            .into_iter()
            .filter_map(|(key, value)| {
                Regex::new(&format!("(?i){}", regex::escape(key)))
                    .ok()
                    .map(|pattern| Substitution {
                        pattern,
                        replacement: format!("[{}]", value),
                    })
            })
            .collect()
    }
}

impl Default for GlossaryTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for GlossaryTranslator {
    fn gloss(&self, text: &str, language: &str) -> String {
        if is_english(language) {
            return text.to_string();
        }

        let mut rendered = text.to_lowercase();
        let substitutions = Language::from_name(language).and_then(|l| self.substitutions.get(&l));

        for substitution in substitutions.into_iter().flatten() {
            if substitution.pattern.is_match(&rendered) {
                rendered = substitution
                    .pattern
                    .replace_all(&rendered, NoExpand(&substitution.replacement))
                    .into_owned();
            }
        }

        rendered
    }
}
