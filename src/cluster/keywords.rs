//! Title keyword extraction for similarity comparison.

use lazy_static::lazy_static;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

lazy_static! {
    /// Common stop words excluded from clustering comparisons, plus the
    /// boilerplate words feeds repeat in every headline.
    static ref STOP_WORDS: HashSet<&'static str> = [
        "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for",
        "of", "with", "by", "from", "as", "is", "are", "was", "were", "be",
        "been", "being", "have", "has", "had", "do", "does", "did", "will",
        "would", "could", "should", "may", "might", "must", "shall", "can",
        "need", "dare", "ought", "used", "it", "its", "this", "that", "these",
        "those", "i", "you", "he", "she", "we", "they", "what", "which",
        "who", "whom", "how", "when", "where", "why", "all", "each", "every",
        "both", "few", "more", "most", "other", "some", "such", "no", "nor",
        "not", "only", "own", "same", "so", "than", "too", "very", "just",
        "also", "now", "new", "says", "said", "after", "before", "over",
        "into", "about", "up", "out", "off", "down", "here", "there", "then",
        "once", "again", "news", "report", "reports", "update", "latest",
        "breaking",
    ]
    .iter()
    .copied()
    .collect();
}

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z]{3,}\b").expect("static pattern must compile"));

/// Significant, stemmed keywords from a title: lowercase, punctuation
/// stripped, stop words removed, stemmed so plural and inflected headline
/// variants compare equal.
pub fn extract_keywords(text: &str) -> HashSet<String> {
    let stemmer = Stemmer::create(Algorithm::English);
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|w| !STOP_WORDS.contains(w))
        .map(|w| stemmer.stem(w).to_string())
        .collect()
}

/// Unstemmed significant keywords, used for human-readable topic labels.
pub fn extract_label_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|w| !STOP_WORDS.contains(w))
        .map(|w| w.to_string())
        .collect()
}

/// Jaccard similarity between two keyword sets. Empty sets never match.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
