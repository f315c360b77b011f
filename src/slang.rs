//! Slang annotation
//!
//! The language's own table is scanned first. Non-English messages are also scanned against
//! the internet-slang table, skipping terms already found.

use crate::tables::slang::{internet_slang, slang_table};
use crate::tables::Language;
use crate::types::SlangEntry;

#[derive(Debug, Default, Clone, Copy)]
pub struct SlangAnnotator;

impl SlangAnnotator {
    pub fn new() -> Self {
        Self
    }

    /// Matched entries in dictionary order
    ///
    /// `language` is a display name such as "Spanish". Names without a table (including
    /// caller-supplied ones like "Dutch") only get the internet-slang pass.
    pub fn annotate(&self, text: &str, language: &str) -> Vec<SlangEntry> {
        let lower = text.to_lowercase();
        let language = Language::from_name(language);
        let mut found: Vec<SlangEntry> = Vec::new();

        if let Some(language) = language {
            // multi-word terms are matched on their first token only
            found.extend(
                slang_table(language)
                    .iter()
                    .filter(|def| lower.contains(def.primary_token().as_str()))
                    .map(|def| def.to_entry()),
            );
        }

        if language != Some(Language::English) {
            for def in internet_slang() {
                let already_found = found.iter().any(|entry| entry.term == def.term);
                if !already_found && lower.contains(def.term.to_lowercase().as_str()) {
                    found.push(def.to_entry());
                }
            }
        }

        found
    }
}
