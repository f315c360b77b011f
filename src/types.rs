//! Request/result shapes shared by every stage of the decoder
//!
//! All types serialize as flat camelCase JSON objects so that an outer HTTP layer or a
//! history store can pass them through unchanged.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Language used when a request carries no target language
pub const DEFAULT_TARGET_LANGUAGE: &str = "English";

/// Region reported for a caller-supplied language that carries no region
pub const DEFAULT_REGION: &str = "General";

/// A single message to decode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeRequest {
    pub text: String,
    /// Bypasses language detection when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl DecodeRequest {
    /// Creates a request that relies on automatic language detection
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_source_language(mut self, language: impl Into<String>) -> Self {
        self.source_language = Some(language.into());
        self
    }

    pub fn with_target_language(mut self, language: impl Into<String>) -> Self {
        self.target_language = Some(language.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Target language, falling back to English
    pub fn target_language(&self) -> &str {
        self.target_language
            .as_deref()
            .unwrap_or(DEFAULT_TARGET_LANGUAGE)
    }
}

/// Register of a slang term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormalityLevel {
    Casual,
    Informal,
    Vulgar,
    Neutral,
}

impl FormalityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormalityLevel::Casual => "casual",
            FormalityLevel::Informal => "informal",
            FormalityLevel::Vulgar => "vulgar",
            FormalityLevel::Neutral => "neutral",
        }
    }
}

/// A slang term matched in a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlangEntry {
    pub term: String,
    pub meaning: String,
    pub region: String,
    pub formality_level: FormalityLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Emotional or social register of a message
///
/// Declaration order matches the order used by the tone description table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneLabel {
    Friendly,
    Compliment,
    Flirty,
    Sexual,
    Joke,
    Sarcastic,
    Rude,
    Insult,
    Question,
    Request,
    Neutral,
    Confused,
    Excited,
    Grateful,
}

impl ToneLabel {
    pub const ALL: [ToneLabel; 14] = [
        ToneLabel::Friendly,
        ToneLabel::Compliment,
        ToneLabel::Flirty,
        ToneLabel::Sexual,
        ToneLabel::Joke,
        ToneLabel::Sarcastic,
        ToneLabel::Rude,
        ToneLabel::Insult,
        ToneLabel::Question,
        ToneLabel::Request,
        ToneLabel::Neutral,
        ToneLabel::Confused,
        ToneLabel::Excited,
        ToneLabel::Grateful,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToneLabel::Friendly => "friendly",
            ToneLabel::Compliment => "compliment",
            ToneLabel::Flirty => "flirty",
            ToneLabel::Sexual => "sexual",
            ToneLabel::Joke => "joke",
            ToneLabel::Sarcastic => "sarcastic",
            ToneLabel::Rude => "rude",
            ToneLabel::Insult => "insult",
            ToneLabel::Question => "question",
            ToneLabel::Request => "request",
            ToneLabel::Neutral => "neutral",
            ToneLabel::Confused => "confused",
            ToneLabel::Excited => "excited",
            ToneLabel::Grateful => "grateful",
        }
    }

    /// Phrase completing "This viewer is ..." for a dominant tone
    pub fn description(&self) -> &'static str {
        match self {
            ToneLabel::Friendly => "being friendly and warm",
            ToneLabel::Compliment => "giving you a compliment",
            ToneLabel::Flirty => "being flirtatious and showing romantic interest",
            ToneLabel::Sexual => "making a sexual comment or request",
            ToneLabel::Joke => "joking around or being playful",
            ToneLabel::Sarcastic => "being sarcastic",
            ToneLabel::Rude => "being rude or disrespectful",
            ToneLabel::Insult => "being insulting or offensive",
            ToneLabel::Question => "asking you a question",
            ToneLabel::Request => "making a request or asking for something",
            ToneLabel::Neutral => "making a casual comment",
            ToneLabel::Confused => "expressing confusion",
            ToneLabel::Excited => "expressing excitement and enthusiasm",
            ToneLabel::Grateful => "expressing gratitude and appreciation",
        }
    }
}

impl fmt::Display for ToneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToneLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ToneLabel::ALL
            .iter()
            .copied()
            .find(|tone| tone.as_str() == wanted)
            .ok_or_else(|| format!("unknown tone label '{}'", s))
    }
}

/// Structured interpretation of one message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeResult {
    pub original_text: String,
    pub detected_language: String,
    pub region: String,
    pub plain_explanation: String,
    pub slang_items: Vec<SlangEntry>,
    /// Highest accumulated weight first, never empty
    pub tone_tags: Vec<ToneLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_responses: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl DecodeResult {
    /// Tone with the highest accumulated weight
    pub fn dominant_tone(&self) -> ToneLabel {
        self.tone_tags.first().copied().unwrap_or(ToneLabel::Neutral)
    }
}
