//! Fixed scoring lexicons and pattern tables.
//!
//! These are the built-in rule inputs; user-tunable additions go through
//! `FilterKeyword` instead of editing these tables.

use lazy_static::lazy_static;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// URL path segments that mark opinion/editorial sections.
pub const OPINION_URL_PATTERNS: &[&str] = &[
    "/opinion/",
    "/opinions/",
    "/editorial/",
    "/editorials/",
    "/columnist/",
    "/columnists/",
    "/blog/",
    "/blogs/",
    "/commentary/",
    "/op-ed/",
    "/perspective/",
    "/analysis/",
    "/letter-to-editor/",
    "/letters/",
];

/// Title markers for opinion content.
pub const OPINION_TITLE_PATTERNS: &[&str] = &[
    "opinion:",
    "editorial:",
    "commentary:",
    "op-ed:",
    "column:",
    "analysis:",
    "perspective:",
    "letter to the editor",
    "| opinion",
    "- opinion",
];

/// Sensational keywords with their title-match deduction. A match found only
/// in the summary drops to the low tier instead.
pub const SENSATIONAL_KEYWORDS: &[(&str, i32)] = &[
    // Urgency/shock
    ("breaking:", 15),
    ("breaking news:", 15),
    ("shocking", 15),
    ("bombshell", 15),
    ("explosive", 15),
    ("stunning", 10),
    ("jaw-dropping", 15),
    ("mind-blowing", 15),
    ("unbelievable", 10),
    ("incredible", 10),
    // Conflict exaggeration
    ("slams", 15),
    ("destroys", 15),
    ("eviscerates", 15),
    ("obliterates", 15),
    ("demolishes", 15),
    ("annihilates", 15),
    ("blasts", 10),
    ("rips", 10),
    ("torches", 10),
    ("schools", 10),
    ("wrecks", 10),
    ("crushes", 10),
    // Emotional manipulation
    ("outrage", 10),
    ("fury", 10),
    ("meltdown", 10),
    ("chaos", 5),
    ("firestorm", 10),
    ("backlash erupts", 10),
    ("nightmare", 10),
    ("goes viral", 10),
    ("the internet is", 10),
    ("twitter reacts", 10),
    ("everyone is talking about", 10),
    ("is breaking the internet", 15),
];

/// Deduction for a sensational keyword found only in the summary.
pub const SENSATIONAL_SUMMARY_TIER: i32 = 5;

/// Curiosity-gap phrases; one clickbait family.
pub const CURIOSITY_GAP_PHRASES: &[&str] = &[
    "you won't believe",
    "what happened next",
    "this one trick",
    "doctors hate",
    "the truth about",
    "what they don't want you to know",
];

/// Numbered-list clickbait titles; one clickbait family.
pub static CLICKBAIT_NUMBER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^\d+\s+(?:reasons?|ways?|things?|facts?|secrets?|tricks?|tips?|signs?|mistakes?)",
        r"(?i)^top\s+\d+",
        r"(?i)^\d+\s+.+\s+that\s+will",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static pattern must compile"))
    .collect()
});

/// First-person or editorial framing inside a summary.
pub static OPINION_FRAMING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\bi think\b",
        r"\bi believe\b",
        r"\bin my view\b",
        r"\bin my opinion\b",
        r"\bwe must\b",
        r"\bwe should\b",
        r"\bwe need to\b",
        r"\bit's clear that\b",
        r"\bobviously\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static pattern must compile"))
    .collect()
});

pub static IMPERATIVE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:should|must|need to|have to|ought to)\s+\w+").expect("static pattern")
});

pub static VAGUE_SOURCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\bcritics\s+(?:say|argue|claim|believe)\b",
        r"\bsome\s+(?:say|argue|claim|believe)\b",
        r"\bmany\s+(?:say|argue|claim|believe)\b",
        r"\bexperts\s+(?:say|argue|claim|believe)\b",
        r"\bsources\s+say\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static pattern must compile"))
    .collect()
});

pub static ABSOLUTIST_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\balways\b",
        r"\bnever\b",
        r"\beveryone\b",
        r"\bnobody\b",
        r"\bproves\b",
        r"\bundeniable\b",
        r"\bunquestionable\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static pattern must compile"))
    .collect()
});

pub const EMOTIONAL_WORDS: &[&str] = &[
    "horrific",
    "horrifying",
    "disgusting",
    "outrageous",
    "shocking",
    "amazing",
    "incredible",
    "unbelievable",
    "terrifying",
    "devastating",
    "shameful",
    "despicable",
    "appalling",
    "hideous",
    "atrocious",
    "wonderful",
    "fantastic",
    "brilliant",
    "genius",
];

lazy_static! {
    /// All-caps tokens that are ordinary abbreviations, not shouting.
    pub static ref COMMON_ABBREVIATIONS: HashSet<&'static str> = [
        "US", "USA", "UK", "EU", "UN", "NATO", "FBI", "CIA", "NASA",
        "CEO", "CFO", "CTO", "GDP", "IPO", "AI", "NFL", "NBA", "MLB",
        "COVID", "WHO", "CDC", "FDA", "EPA", "IRS", "DOJ", "DOD",
    ]
    .iter()
    .copied()
    .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicons_nonempty_and_lowercase() {
        for (kw, weight) in SENSATIONAL_KEYWORDS {
            assert_eq!(*kw, kw.to_lowercase());
            assert!((5..=15).contains(weight));
        }
        for pattern in OPINION_URL_PATTERNS {
            assert!(pattern.starts_with('/'));
        }
    }

    #[test]
    fn test_clickbait_patterns_match() {
        assert!(CLICKBAIT_NUMBER_PATTERNS
            .iter()
            .any(|p| p.is_match("10 reasons why cats rule")));
        assert!(CLICKBAIT_NUMBER_PATTERNS
            .iter()
            .any(|p| p.is_match("Top 5 gadgets of 2026")));
        assert!(!CLICKBAIT_NUMBER_PATTERNS
            .iter()
            .any(|p| p.is_match("Senate passes infrastructure bill, 78-12")));
    }
}
