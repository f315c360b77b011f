//! Quick-reply guidance
//!
//! Maps a tone set to the reply actions worth offering, each with a one-line hint.

use serde::{Deserialize, Serialize};

use crate::types::ToneLabel;

const POSITIVE_TONES: &[ToneLabel] = &[
    ToneLabel::Friendly,
    ToneLabel::Compliment,
    ToneLabel::Question,
    ToneLabel::Grateful,
    ToneLabel::Excited,
];

const NEGATIVE_TONES: &[ToneLabel] = &[ToneLabel::Rude, ToneLabel::Insult, ToneLabel::Sexual];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickReply {
    Thank,
    Engage,
    Boundary,
    Ignore,
}

impl QuickReply {
    pub fn guidance(&self) -> &'static str {
        match self {
            QuickReply::Thank => "Smile and acknowledge their compliment with a warm thank you.",
            QuickReply::Engage => "Great opportunity to engage! Ask them a question.",
            QuickReply::Boundary => "Politely but firmly set a boundary. Keep it respectful.",
            QuickReply::Ignore => "It's okay to ignore messages that make you uncomfortable.",
        }
    }
}

/// Actions for a tone set: Thank and Engage, then Boundary, then Ignore (always offered)
pub fn quick_replies(tones: &[ToneLabel]) -> Vec<QuickReply> {
    let mut replies = Vec::with_capacity(4);

    if tones.iter().any(|tone| POSITIVE_TONES.contains(tone)) {
        replies.push(QuickReply::Thank);
        replies.push(QuickReply::Engage);
    }
    if tones.iter().any(|tone| NEGATIVE_TONES.contains(tone)) {
        replies.push(QuickReply::Boundary);
    }
    replies.push(QuickReply::Ignore);

    replies
}

/// Guidance sentences for [`quick_replies`], same order
pub fn suggested_responses(tones: &[ToneLabel]) -> Vec<String> {
    quick_replies(tones)
        .iter()
        .map(|reply| reply.guidance().to_string())
        .collect()
}
