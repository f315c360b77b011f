//! Plain-language explanation
//!
//! The explanation is a fixed sequence of `**Heading:** body` blocks separated by blank lines:
//! Translation and Language (non-English only), What they're saying, Tone, Key terms used
//! (only when slang was found), How to respond.
//!
//! Both "What they're saying" and "How to respond" are picked from ordered rule lists; the
//! first rule whose predicate holds wins.

use std::sync::Arc;

use regex::Regex;

use crate::config::constants::DEFAULT_MAX_EXPLAINED_TERMS;
use crate::gloss::{GlossaryTranslator, Translator};
use crate::tables::is_english;
use crate::tables::markers::{COMPLIMENTS, GREETINGS, LOVE_TERMS, QUESTION_WORDS};
use crate::types::{SlangEntry, ToneLabel};

/// Lexical facts about a message that drive the "What they're saying" block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageSignals {
    pub has_greeting: bool,
    pub has_compliment: bool,
    pub has_love: bool,
    pub has_question: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeaningCase {
    GreetingComplimentAffection,
    GreetingCompliment,
    Greeting,
    ComplimentLove,
    Compliment,
    Love,
    Question,
    /// Falls back to the dominant tone's description
    DominantTone,
}

impl MeaningCase {
    fn render(&self, dominant: ToneLabel) -> String {
        let text = match self {
            MeaningCase::GreetingComplimentAffection => {
                "This viewer is greeting you with a compliment. They're saying hello and telling you that you look amazing and expressing affection."
            }
            MeaningCase::GreetingCompliment => {
                "This viewer is greeting you with a compliment. They're saying hello and telling you that you look attractive."
            }
            MeaningCase::Greeting => {
                "This viewer is saying hello and trying to start a conversation with you."
            }
            MeaningCase::ComplimentLove => {
                "This viewer is expressing strong attraction and affection. They're complimenting your appearance and expressing romantic feelings."
            }
            MeaningCase::Compliment => {
                "This viewer is complimenting your appearance. They find you attractive and want you to know it."
            }
            MeaningCase::Love => {
                "This viewer is expressing romantic feelings or strong affection toward you."
            }
            MeaningCase::Question => "This viewer is asking you a question and wants a response.",
            MeaningCase::DominantTone => {
                return format!("This viewer is {}.", dominant.description());
            }
        };
        text.to_string()
    }
}

type MeaningRule = (fn(&MessageSignals) -> bool, MeaningCase);

pub const MEANING_RULES: &[MeaningRule] = &[
    (
        |s| s.has_greeting && s.has_compliment && s.has_love,
        MeaningCase::GreetingComplimentAffection,
    ),
    (
        |s| s.has_greeting && s.has_compliment,
        MeaningCase::GreetingCompliment,
    ),
    (|s| s.has_greeting, MeaningCase::Greeting),
    (
        |s| s.has_compliment && s.has_love,
        MeaningCase::ComplimentLove,
    ),
    (|s| s.has_compliment, MeaningCase::Compliment),
    (|s| s.has_love, MeaningCase::Love),
    (|s| s.has_question, MeaningCase::Question),
    (|_| true, MeaningCase::DominantTone),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCase {
    Sexual,
    Hostile,
    Flirty,
    Compliment,
    Engage,
    Playful,
    Grateful,
    Casual,
}

impl ResponseCase {
    pub fn text(&self) -> &'static str {
        match self {
            ResponseCase::Sexual => "This message has sexual content. Respond based on your comfort level and platform rules. You can acknowledge, redirect, or set a boundary.",
            ResponseCase::Hostile => "This is a negative or disrespectful message. Consider ignoring, blocking, or setting a firm boundary if this behavior continues.",
            ResponseCase::Flirty => "They're being flirty and trying to get your attention. A simple \"thank you\" or playful response works well if you want to engage.",
            ResponseCase::Compliment => "A simple \"thank you\" or acknowledgment is appropriate. They're being positive and supportive.",
            ResponseCase::Engage => "They want something from you. Decide if you want to engage based on what they're asking.",
            ResponseCase::Playful => "They're being playful. A light response or emoji reaction works well.",
            ResponseCase::Grateful => "They're showing appreciation. A warm acknowledgment keeps the positive energy going.",
            ResponseCase::Casual => "This is a casual interaction. Respond naturally based on your mood and the conversation flow.",
        }
    }
}

type ResponseRule = (fn(&[ToneLabel]) -> bool, ResponseCase);

fn has(tones: &[ToneLabel], tone: ToneLabel) -> bool {
    tones.contains(&tone)
}

pub const RESPONSE_RULES: &[ResponseRule] = &[
    (|t| has(t, ToneLabel::Sexual), ResponseCase::Sexual),
    (
        |t| has(t, ToneLabel::Rude) || has(t, ToneLabel::Insult),
        ResponseCase::Hostile,
    ),
    (
        |t| has(t, ToneLabel::Compliment) && has(t, ToneLabel::Flirty),
        ResponseCase::Flirty,
    ),
    (|t| has(t, ToneLabel::Compliment), ResponseCase::Compliment),
    (
        |t| has(t, ToneLabel::Question) || has(t, ToneLabel::Request),
        ResponseCase::Engage,
    ),
    (
        |t| has(t, ToneLabel::Joke) || has(t, ToneLabel::Sarcastic),
        ResponseCase::Playful,
    ),
    (|t| has(t, ToneLabel::Grateful), ResponseCase::Grateful),
    (|_| true, ResponseCase::Casual),
];

pub fn meaning_case(signals: &MessageSignals) -> MeaningCase {
    MEANING_RULES
        .iter()
        .find(|(predicate, _)| predicate(signals))
        .map(|(_, case)| *case)
        .unwrap_or(MeaningCase::DominantTone)
}

pub fn response_case(tones: &[ToneLabel]) -> ResponseCase {
    RESPONSE_RULES
        .iter()
        .find(|(predicate, _)| predicate(tones))
        .map(|(_, case)| *case)
        .unwrap_or(ResponseCase::Casual)
}

/// Assembles the `plainExplanation` string
pub struct ExplanationComposer {
    translator: Arc<dyn Translator>,
    question_words: Regex,
    max_explained_terms: usize,
}

impl ExplanationComposer {
    pub fn new(translator: Arc<dyn Translator>, max_explained_terms: usize) -> Self {
        let question_words = Regex::new(&format!(
            r"(?i)\b(?:{})\b",
            QUESTION_WORDS
                .iter()
                .map(|word| regex::escape(word))
                .collect::<Vec<_>>()
                .join("|")
        ))
        .expect("question words are escaped literals");

        Self {
            translator,
            question_words,
            max_explained_terms,
        }
    }

    pub fn signals(&self, text: &str) -> MessageSignals {
        let lower = text.to_lowercase();
        let contains_any = |markers: &[&str]| markers.iter().any(|m| lower.contains(m));

        MessageSignals {
            has_greeting: contains_any(GREETINGS),
            has_compliment: contains_any(COMPLIMENTS),
            has_love: contains_any(LOVE_TERMS),
            has_question: text.contains('?') || self.question_words.is_match(text),
        }
    }

    pub fn compose(
        &self,
        text: &str,
        language: &str,
        tones: &[ToneLabel],
        slang: &[SlangEntry],
    ) -> String {
        let dominant = tones.first().copied().unwrap_or(ToneLabel::Neutral);
        let mut blocks: Vec<String> = Vec::with_capacity(6);

        if !is_english(language) {
            blocks.push(format!(
                "**Translation:** \"{}\"",
                self.translator.gloss(text, language)
            ));
            blocks.push(format!("**Language:** {}", language));
        }

        let meaning = meaning_case(&self.signals(text)).render(dominant);
        blocks.push(format!("**What they're saying:** {}", meaning));

        blocks.push(Self::tone_block(dominant, tones));

        if !slang.is_empty() {
            let terms = slang
                .iter()
                .take(self.max_explained_terms)
                .map(|entry| match &entry.notes {
                    Some(notes) => format!("\"{}\" means \"{}\" ({})", entry.term, entry.meaning, notes),
                    None => format!("\"{}\" means \"{}\"", entry.term, entry.meaning),
                })
                .collect::<Vec<_>>();
            if !terms.is_empty() {
                blocks.push(format!("**Key terms used:** {}.", terms.join("; ")));
            }
        }

        blocks.push(format!(
            "**How to respond:** {}",
            response_case(tones).text()
        ));

        blocks.join("\n\n")
    }

    /// Dominant tone plus up to two secondary tones
    fn tone_block(dominant: ToneLabel, tones: &[ToneLabel]) -> String {
        let secondary = tones
            .iter()
            .skip(1)
            .take(2)
            .map(ToneLabel::as_str)
            .collect::<Vec<_>>();

        if secondary.is_empty() {
            format!("**Tone:** The overall tone is {}.", dominant)
        } else {
            format!(
                "**Tone:** The overall tone is {} with hints of {}.",
                dominant,
                secondary.join(" and ")
            )
        }
    }
}

impl Default for ExplanationComposer {
    fn default() -> Self {
        Self::new(Arc::new(GlossaryTranslator::new()), DEFAULT_MAX_EXPLAINED_TERMS)
    }
}
