//! Tone pattern weight table
//!
//! Every matching rule adds its weight to its tone. Row order is the tie-break order when two
//! tones end with the same total.

use crate::types::ToneLabel;

/// Static tone rule: any keyword contained in the lower-cased text fires the rule
#[derive(Debug, Clone, Copy)]
pub struct ToneRuleDef {
    pub keywords: &'static [&'static str],
    pub tone: ToneLabel,
    pub weight: u32,
}

pub const TONE_RULES: &[ToneRuleDef] = &[
    // positive
    ToneRuleDef {
        keywords: &[
            "beautiful", "gorgeous", "amazing", "love", "hermosa", "linda", "bella", "kawaii",
            "❤️", "😍", "🥰", "💕",
        ],
        tone: ToneLabel::Compliment,
        weight: 2,
    },
    ToneRuleDef {
        keywords: &["hi", "hello", "hey", "hola", "coucou", "привет", "ciao", "oi"],
        tone: ToneLabel::Friendly,
        weight: 1,
    },
    ToneRuleDef {
        keywords: &["thank", "gracias", "merci", "danke", "obrigado", "arigatou"],
        tone: ToneLabel::Grateful,
        weight: 2,
    },
    // flirty / sexual
    ToneRuleDef {
        keywords: &[
            "sexy", "hot", "bb", "baby", "babe", "papi", "mami", "gostosa", "😘", "😏", "🔥", "💋",
        ],
        tone: ToneLabel::Flirty,
        weight: 2,
    },
    ToneRuleDef {
        keywords: &["show", "naked", "nude", "private", "pvt", "c2c", "cam2cam"],
        tone: ToneLabel::Sexual,
        weight: 3,
    },
    // questions / requests
    ToneRuleDef {
        keywords: &[
            "?", "how", "what", "where", "when", "why", "can you", "could you", "would you",
        ],
        tone: ToneLabel::Question,
        weight: 1,
    },
    ToneRuleDef {
        keywords: &["please", "can i", "want", "need", "give me", "show me"],
        tone: ToneLabel::Request,
        weight: 2,
    },
    // humor
    ToneRuleDef {
        keywords: &[
            "lol", "haha", "lmao", "rofl", "😂", "🤣", "jk", "joke", "mdr", "www", "ㅋㅋ",
        ],
        tone: ToneLabel::Joke,
        weight: 2,
    },
    ToneRuleDef {
        keywords: &["sure", "right", "yeah right", "obviously", "/s"],
        tone: ToneLabel::Sarcastic,
        weight: 1,
    },
    // negative
    ToneRuleDef {
        keywords: &["ugly", "stupid", "dumb", "hate", "worst", "terrible", "fake"],
        tone: ToneLabel::Rude,
        weight: 3,
    },
    ToneRuleDef {
        keywords: &["fuck", "bitch", "whore", "slut", "idiot", "loser"],
        tone: ToneLabel::Insult,
        weight: 4,
    },
    // excitement
    ToneRuleDef {
        keywords: &[
            "omg", "wow", "amazing", "incredible", "!!!", "🎉", "🤩", "daebak", "sugoi",
        ],
        tone: ToneLabel::Excited,
        weight: 2,
    },
];
