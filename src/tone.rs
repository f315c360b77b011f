//! Tone classification
//!
//! Every rule that matches adds its weight to its tone. Tones are ranked by total weight;
//! equal totals keep the order in which the tones were first hit.

use regex::Regex;

use crate::config::{DecoderConfig, ToneRuleConfig};
use crate::error::{DecodeError, DecoderResult};
use crate::tables::tones::{ToneRuleDef, TONE_RULES};
use crate::types::ToneLabel;

#[derive(Debug, Clone)]
pub enum ToneMatcher {
    /// Fires if any keyword is a substring of the lower-cased text
    Keywords(Vec<String>),
    /// Tested against the lower-cased text
    Pattern(Regex),
}

impl ToneMatcher {
    fn is_match(&self, lower: &str) -> bool {
        match self {
            ToneMatcher::Keywords(keywords) => keywords.iter().any(|k| lower.contains(k.as_str())),
            ToneMatcher::Pattern(pattern) => pattern.is_match(lower),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TonePatternRule {
    pub matcher: ToneMatcher,
    pub tone: ToneLabel,
    pub weight: u32,
}

impl TonePatternRule {
    fn from_def(def: &ToneRuleDef) -> Self {
        Self {
            matcher: ToneMatcher::Keywords(def.keywords.iter().map(|k| k.to_lowercase()).collect()),
            tone: def.tone,
            weight: def.weight,
        }
    }

    pub fn from_config(rule: &ToneRuleConfig) -> DecoderResult<Self> {
        let matcher = match (&rule.pattern, &rule.keywords) {
            (Some(pattern), _) => ToneMatcher::Pattern(Regex::new(pattern)?),
            (None, Some(keywords)) => ToneMatcher::Keywords(
                keywords
                    .iter()
                    .filter(|k| !k.is_empty())
                    .map(|k| k.to_lowercase())
                    .collect(),
            ),
            (None, None) => {
                return Err(DecodeError::ConfigError(format!(
                    "tone rule for '{}' needs keywords or a pattern",
                    rule.tone
                )))
            }
        };

        Ok(Self {
            matcher,
            tone: rule.tone,
            weight: rule.weight,
        })
    }
}

pub struct ToneClassifier {
    rules: Vec<TonePatternRule>,
    max_tones: usize,
}

impl ToneClassifier {
    /// Built-in weight table only, top four tones
    pub fn new() -> Self {
        Self {
            rules: TONE_RULES.iter().map(TonePatternRule::from_def).collect(),
            max_tones: crate::config::constants::DEFAULT_MAX_TONES,
        }
    }

    /// Built-in table followed by the configured extra rules
    pub fn from_config(config: &DecoderConfig) -> DecoderResult<Self> {
        let mut classifier = Self::new();
        for rule in &config.extra_tone_rules {
            classifier.rules.push(TonePatternRule::from_config(rule)?);
        }
        classifier.max_tones = config.max_tones.max(1);
        Ok(classifier)
    }

    /// Accumulated weight per tone, in first-hit order
    pub fn scores(&self, text: &str) -> Vec<(ToneLabel, u32)> {
        let lower = text.to_lowercase();
        let mut scores: Vec<(ToneLabel, u32)> = Vec::new();

        for rule in &self.rules {
            if !rule.matcher.is_match(&lower) {
                continue;
            }
            match scores.iter_mut().find(|(tone, _)| *tone == rule.tone) {
                Some((_, total)) => *total += rule.weight,
                None => scores.push((rule.tone, rule.weight)),
            }
        }

        scores
    }

    /// Ranked tone labels; `[Neutral]` when nothing matched
    pub fn classify(&self, text: &str) -> Vec<ToneLabel> {
        let mut scores = self.scores(text);
        if scores.is_empty() {
            return vec![ToneLabel::Neutral];
        }

        // stable: ties stay in first-hit order
        scores.sort_by(|a, b| b.1.cmp(&a.1));
        scores
            .into_iter()
            .take(self.max_tones)
            .map(|(tone, _)| tone)
            .collect()
    }
}

impl Default for ToneClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_is_neutral() {
        let classifier = ToneClassifier::new();
        assert_eq!(classifier.classify("ok"), vec![ToneLabel::Neutral]);
        assert!(classifier.scores("ok").is_empty());
    }

    #[test]
    fn test_weights_accumulate_and_rank() {
        let classifier = ToneClassifier::new();
        assert_eq!(classifier.classify("fuck you idiot"), vec![ToneLabel::Insult]);
        assert_eq!(
            classifier.classify("you're a stupid idiot"),
            vec![ToneLabel::Insult, ToneLabel::Rude]
        );
        assert_eq!(
            classifier.scores("you're a stupid idiot"),
            vec![(ToneLabel::Rude, 3), (ToneLabel::Insult, 4)]
        );
    }

    #[test]
    fn test_ties_keep_first_hit_order() {
        let classifier = ToneClassifier::new();
        // compliment (2) and flirty (2) tie; compliment comes first in the table
        let tones = classifier.classify("beautiful babe");
        assert_eq!(tones, vec![ToneLabel::Compliment, ToneLabel::Flirty]);
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = ToneClassifier::new();
        assert_eq!(classifier.classify("LOL")[0], ToneLabel::Joke);
    }

    #[test]
    fn test_truncates_to_max_tones() {
        let config = DecoderConfig {
            max_tones: 2,
            ..Default::default()
        };
        let classifier = ToneClassifier::from_config(&config).unwrap();
        let tones = classifier.classify("hello beautiful babe, show me more please? lol");
        assert_eq!(tones.len(), 2);

        let unlimited = ToneClassifier::new().classify("hello beautiful babe, show me more please? lol");
        assert_eq!(unlimited.len(), 4);
        assert_eq!(&unlimited[..2], &tones[..]);
    }

    #[test]
    fn test_extra_rules_extend_the_table() {
        let config = DecoderConfig::from_toml_str(
            r#"
            [[extra_tone_rules]]
            pattern = "\\bsus\\b"
            tone = "confused"
            weight = 5
            "#,
        )
        .unwrap();
        let classifier = ToneClassifier::from_config(&config).unwrap();

        assert_eq!(classifier.classify("kinda sus ngl")[0], ToneLabel::Confused);
        assert_eq!(classifier.classify("suspicious"), vec![ToneLabel::Neutral]);
    }
}
