//! Word and phrase glosses per language
//!
//! Keys are lower-case source fragments, values are rough English hints.

use super::Language;

pub type GlossEntry = (&'static str, &'static str);

const SPANISH: &[GlossEntry] = &[
    ("hola", "hello"),
    ("hermosa", "beautiful"),
    ("linda", "pretty/beautiful"),
    ("guapa", "hot/pretty"),
    ("papi", "daddy (flirty)"),
    ("mami", "mommy (flirty)"),
    ("amor", "love"),
    ("te quiero", "I love you (casual)"),
    ("te amo", "I love you (deep)"),
    ("bb", "baby"),
    ("nena", "babe/girl"),
    ("rica", "hot/delicious"),
    ("chula", "cute/pretty"),
    ("que linda", "how pretty"),
    ("eres", "you are"),
    ("muy", "very"),
    ("bonita", "pretty"),
    ("como estas", "how are you"),
    ("bien", "good/well"),
    ("gracias", "thank you"),
    ("por favor", "please"),
    ("quiero", "I want"),
    ("ver", "to see"),
    ("mas", "more"),
    ("hoy", "today"),
    ("ahora", "now"),
];

const FRENCH: &[GlossEntry] = &[
    ("coucou", "hey/hi"),
    ("salut", "hi"),
    ("bonjour", "hello/good day"),
    ("ma belle", "my beautiful"),
    ("ma chérie", "my darling"),
    ("bisous", "kisses"),
    ("bb", "baby"),
    ("canon", "hot/gorgeous"),
    ("mdr", "LOL (laughing)"),
    ("je t'aime", "I love you"),
    ("tu es", "you are"),
    ("très", "very"),
    ("belle", "beautiful"),
    ("jolie", "pretty"),
    ("comment ça va", "how are you"),
    ("bien", "good/well"),
    ("merci", "thank you"),
    ("s'il te plaît", "please"),
    ("je veux", "I want"),
    ("voir", "to see"),
    ("plus", "more"),
];

const GERMAN: &[GlossEntry] = &[
    ("hallo", "hello"),
    ("süße", "sweetie"),
    ("schatz", "treasure/darling"),
    ("hübsch", "pretty"),
    ("geil", "cool/hot"),
    ("schön", "beautiful"),
    ("du bist", "you are"),
    ("sehr", "very"),
    ("danke", "thank you"),
    ("bitte", "please"),
    ("ich will", "I want"),
    ("mehr", "more"),
    ("heute", "today"),
    ("jetzt", "now"),
];

const PORTUGUESE: &[GlossEntry] = &[
    ("oi", "hi"),
    ("olá", "hello"),
    ("gata", "hot girl/babe"),
    ("gatinha", "kitten/cutie"),
    ("linda", "beautiful"),
    ("amor", "love"),
    ("gostosa", "hot/sexy"),
    ("delícia", "delicious/hot"),
    ("bb", "baby"),
    ("você é", "you are"),
    ("muito", "very"),
    ("bonita", "pretty"),
    ("obrigado", "thank you"),
    ("por favor", "please"),
    ("quero", "I want"),
    ("ver", "to see"),
    ("mais", "more"),
];

const ITALIAN: &[GlossEntry] = &[
    ("ciao", "hi/bye"),
    ("bella", "beautiful"),
    ("bellissima", "gorgeous"),
    ("amore", "love"),
    ("tesoro", "treasure/darling"),
    ("sei", "you are"),
    ("molto", "very"),
    ("grazie", "thank you"),
    ("per favore", "please"),
    ("voglio", "I want"),
    ("vedere", "to see"),
    ("più", "more"),
];

const JAPANESE: &[GlossEntry] = &[
    ("かわいい", "cute (kawaii)"),
    ("すごい", "amazing (sugoi)"),
    ("綺麗", "beautiful (kirei)"),
    ("www", "LOL"),
    ("好き", "I like you (suki)"),
    ("こんにちは", "hello"),
    ("ありがとう", "thank you"),
    ("お願い", "please"),
    ("もっと", "more"),
];

const KOREAN: &[GlossEntry] = &[
    ("예쁘다", "pretty (yeppeuda)"),
    ("사랑해", "I love you (saranghae)"),
    ("대박", "amazing (daebak)"),
    ("ㅋㅋㅋ", "LOL"),
    ("누나", "older sister (noona)"),
    ("안녕", "hello"),
    ("감사합니다", "thank you"),
    ("제발", "please"),
    ("더", "more"),
];

const RUSSIAN: &[GlossEntry] = &[
    ("привет", "hi (privet)"),
    ("красивая", "beautiful (krasivaya)"),
    ("милая", "sweet/cute (milaya)"),
    ("солнышко", "sunshine"),
    ("ты", "you"),
    ("очень", "very"),
    ("спасибо", "thank you"),
    ("пожалуйста", "please"),
    ("хочу", "I want"),
    ("больше", "more"),
];

/// Glossary for a language; English, Chinese and Arabic have none
pub fn glossary(language: Language) -> &'static [GlossEntry] {
    match language {
        Language::Spanish => SPANISH,
        Language::French => FRENCH,
        Language::German => GERMAN,
        Language::Portuguese => PORTUGUESE,
        Language::Italian => ITALIAN,
        Language::Japanese => JAPANESE,
        Language::Korean => KOREAN,
        Language::Russian => RUSSIAN,
        Language::English | Language::Chinese | Language::Arabic => &[],
    }
}
