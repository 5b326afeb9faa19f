//! Span detection and overlap resolution.

use std::collections::HashSet;
use tracing::debug;

use super::dictionaries::{
    COUNTRIES, EVENTS, GOVERNMENT_SUFFIXES, GOVERNMENT_TERMS, KNOWN_PEOPLE, MILITARY_SUFFIXES,
    MILITARY_TERMS, ORGANIZATIONS, ORGANIZATION_SUFFIXES, PLACES, SKIP_WORDS, TITLES,
};
use super::patterns::{
    ATTRIBUTION_PATTERNS, CAP_SEQUENCE, DATE_MENTION_PATTERNS, DATE_PATTERNS, FIGURE_PATTERNS,
    HEDGING_TERMS, MONEY_PATTERNS, NUMBER_PATTERNS, QUOTE_PATTERN, STATISTICS_PATTERNS,
    TITLE_NAME, VERB_PATTERN,
};
use super::types::{EntityCategory, EntityMatch, FeatureCounts};
use super::TARGET_HIGHLIGHT;

/// Scans display text for entity spans. Stateless; all lookup tables are
/// process-wide immutable statics.
#[derive(Debug, Default)]
pub struct Highlighter;

impl Highlighter {
    pub fn new() -> Self {
        Highlighter
    }

    /// Produce the non-overlapping, categorized span list for one text.
    ///
    /// Candidates come from the dictionary categories, the title+name people
    /// detector, the capitalized-sequence classifier, and the number/verb
    /// pattern classes. When candidates overlap the longer span wins; exact
    /// length ties go to the higher-priority category.
    pub fn highlight(&self, text: &str) -> Vec<EntityMatch> {
        if text.is_empty() {
            return Vec::new();
        }

        let lower = text.to_ascii_lowercase();
        let mut candidates: Vec<EntityMatch> = Vec::new();

        self.collect_dictionary_matches(text, &lower, &mut candidates);
        self.collect_titled_people(text, &mut candidates);
        self.collect_capitalized_sequences(text, &mut candidates);
        self.collect_pattern_matches(text, &mut candidates);

        let resolved = resolve_overlaps(candidates);
        debug!(
            target: TARGET_HIGHLIGHT,
            "Resolved {} spans from text of {} bytes", resolved.len(), text.len()
        );
        resolved
    }

    /// Journalistic-signal counts for the scorer's positive factors.
    pub fn features(&self, text: &str) -> FeatureCounts {
        let lower = text.to_ascii_lowercase();
        FeatureCounts {
            attribution: ATTRIBUTION_PATTERNS
                .iter()
                .map(|p| p.find_iter(text).count())
                .sum(),
            quotes: QUOTE_PATTERN.find_iter(text).count(),
            numbers: FIGURE_PATTERNS
                .iter()
                .map(|p| p.find_iter(text).count())
                .sum(),
            dates: DATE_MENTION_PATTERNS
                .iter()
                .map(|p| p.find_iter(text).count())
                .sum(),
            hedging: HEDGING_TERMS
                .iter()
                .filter(|term| lower.contains(*term))
                .count(),
        }
    }

    fn collect_dictionary_matches(
        &self,
        text: &str,
        lower: &str,
        candidates: &mut Vec<EntityMatch>,
    ) {
        let tables: [(&HashSet<&'static str>, EntityCategory); 7] = [
            (&TITLES, EntityCategory::Titles),
            (&GOVERNMENT_TERMS, EntityCategory::Government),
            (&MILITARY_TERMS, EntityCategory::Military),
            (&ORGANIZATIONS, EntityCategory::Organizations),
            (&COUNTRIES, EntityCategory::Countries),
            (&PLACES, EntityCategory::Places),
            (&EVENTS, EntityCategory::Events),
        ];

        for (table, category) in tables {
            for phrase in table.iter() {
                for (start, _) in lower.match_indices(phrase) {
                    let end = start + phrase.len();
                    if !is_word_bounded(lower, start, end) {
                        continue;
                    }
                    let span_end = possessive_end(text, end);
                    candidates.push(EntityMatch::new(
                        start,
                        span_end,
                        category,
                        text[start..end].to_string(),
                    ));
                }
            }
        }
    }

    fn collect_titled_people(&self, text: &str, candidates: &mut Vec<EntityMatch>) {
        for caps in TITLE_NAME.captures_iter(text) {
            let whole = caps.get(0).expect("match always has group 0");
            let name = caps.get(1).expect("pattern has a name group");
            let span_end = possessive_end(text, whole.end());
            candidates.push(EntityMatch::new(
                whole.start(),
                span_end,
                EntityCategory::People,
                name.as_str().to_string(),
            ));
        }
    }

    fn collect_capitalized_sequences(&self, text: &str, candidates: &mut Vec<EntityMatch>) {
        for m in CAP_SEQUENCE.find_iter(text) {
            let (phrase, span_end) = strip_possessive(text, m.start(), m.end());
            let phrase_lower = phrase.to_ascii_lowercase();
            let words: Vec<&str> = phrase.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }

            // Skip single common words outright
            if words.len() == 1 && SKIP_WORDS.contains(phrase_lower.as_str()) {
                continue;
            }

            let at_sentence_start = m.start() == 0
                || matches!(
                    text.get(m.start().saturating_sub(2)..m.start()),
                    Some(". ") | Some("! ") | Some("? ")
                );

            // A lone capitalized word at sentence start is only an entity if
            // a dictionary recognizes it.
            if at_sentence_start
                && words.len() == 1
                && !COUNTRIES.contains(phrase_lower.as_str())
                && !PLACES.contains(phrase_lower.as_str())
                && !ORGANIZATIONS.contains(phrase_lower.as_str())
            {
                continue;
            }

            if let Some((category, canonical)) =
                classify_sequence(&phrase, &phrase_lower, &words, at_sentence_start)
            {
                candidates.push(EntityMatch::new(m.start(), span_end, category, canonical));
            }
        }
    }

    fn collect_pattern_matches(&self, text: &str, candidates: &mut Vec<EntityMatch>) {
        let classes: [(&[regex::Regex], EntityCategory); 4] = [
            (MONEY_PATTERNS.as_slice(), EntityCategory::Money),
            (STATISTICS_PATTERNS.as_slice(), EntityCategory::Statistics),
            (DATE_PATTERNS.as_slice(), EntityCategory::Dates),
            (NUMBER_PATTERNS.as_slice(), EntityCategory::Numbers),
        ];
        for (patterns, category) in classes {
            for pattern in patterns {
                for m in pattern.find_iter(text) {
                    candidates.push(EntityMatch::new(
                        m.start(),
                        m.end(),
                        category,
                        m.as_str().to_string(),
                    ));
                }
            }
        }

        for m in VERB_PATTERN.find_iter(text) {
            candidates.push(EntityMatch::new(
                m.start(),
                m.end(),
                EntityCategory::Verbs,
                m.as_str().to_string(),
            ));
        }
    }
}

/// Classify a capitalized sequence against the known-entity tables and the
/// structural fallbacks. Returns the category and canonical form, or `None`
/// when the sequence should not be highlighted.
fn classify_sequence(
    phrase: &str,
    phrase_lower: &str,
    words: &[&str],
    at_sentence_start: bool,
) -> Option<(EntityCategory, String)> {
    // Exact dictionary hits first
    if KNOWN_PEOPLE.contains(phrase_lower) {
        return Some((EntityCategory::People, phrase.to_string()));
    }
    if EVENTS.contains(phrase_lower) {
        return Some((EntityCategory::Events, phrase.to_string()));
    }
    if MILITARY_TERMS.contains(phrase_lower) {
        return Some((EntityCategory::Military, phrase.to_string()));
    }
    if GOVERNMENT_TERMS.contains(phrase_lower) {
        return Some((EntityCategory::Government, phrase.to_string()));
    }
    if ORGANIZATIONS.contains(phrase_lower) {
        return Some((EntityCategory::Organizations, phrase.to_string()));
    }
    if COUNTRIES.contains(phrase_lower) {
        return Some((EntityCategory::Countries, phrase.to_string()));
    }
    if PLACES.contains(phrase_lower) {
        return Some((EntityCategory::Places, phrase.to_string()));
    }

    let first_lower = words[0].to_ascii_lowercase();
    if TITLES.contains(first_lower.as_str()) {
        if words.len() > 1 {
            // Title + name highlights as one people span; lookups use the
            // bare name.
            return Some((EntityCategory::People, words[1..].join(" ")));
        }
        return Some((EntityCategory::Titles, phrase.to_string()));
    }

    let word_in = |table: &HashSet<&'static str>| {
        words
            .iter()
            .any(|w| table.contains(w.to_ascii_lowercase().as_str()))
    };
    if word_in(&GOVERNMENT_SUFFIXES) {
        return Some((EntityCategory::Government, phrase.to_string()));
    }
    if word_in(&MILITARY_SUFFIXES) {
        return Some((EntityCategory::Military, phrase.to_string()));
    }
    if word_in(&ORGANIZATION_SUFFIXES) {
        return Some((EntityCategory::Organizations, phrase.to_string()));
    }

    // Two or three capitalized words with no structural keyword usually name
    // a person.
    if (2..=3).contains(&words.len()) {
        let looks_like_name = words
            .iter()
            .all(|w| !SKIP_WORDS.contains(w.to_ascii_lowercase().as_str()));
        if looks_like_name {
            return Some((EntityCategory::People, phrase.to_string()));
        }
    }

    // Mid-sentence capitalization with no dictionary hit is still a proper
    // noun worth linking.
    if !at_sentence_start {
        return Some((EntityCategory::ProperNouns, phrase.to_string()));
    }

    None
}

/// Extend a span over a trailing possessive suffix without including it in
/// the canonical text.
fn possessive_end(text: &str, end: usize) -> usize {
    let rest = &text[end..];
    for suffix in ["'s", "\u{2019}s"] {
        if let Some(after) = rest.strip_prefix(suffix) {
            let bounded = after
                .chars()
                .next()
                .map(|c| !c.is_alphanumeric())
                .unwrap_or(true);
            if bounded {
                return end + suffix.len();
            }
        }
    }
    end
}

/// The capitalized-sequence pattern can swallow an ASCII possessive into the
/// match itself; peel it off the canonical form but keep it in the span.
fn strip_possessive(text: &str, start: usize, end: usize) -> (String, usize) {
    let matched = &text[start..end];
    if let Some(stripped) = matched.strip_suffix("'s") {
        return (stripped.to_string(), end);
    }
    if let Some(stripped) = matched.strip_suffix("\u{2019}s") {
        return (stripped.to_string(), end);
    }
    let span_end = possessive_end(text, end);
    (matched.to_string(), span_end)
}

fn is_word_bounded(lower: &str, start: usize, end: usize) -> bool {
    let before_ok = start == 0
        || lower[..start]
            .chars()
            .next_back()
            .map(|c| !c.is_alphanumeric())
            .unwrap_or(true);
    let after_ok = end == lower.len()
        || lower[end..]
            .chars()
            .next()
            .map(|c| !c.is_alphanumeric())
            .unwrap_or(true);
    before_ok && after_ok
}

/// Longest-match-first selection: longer spans win; exact-length ties go to
/// the category with the higher priority, then the earlier start.
fn resolve_overlaps(mut candidates: Vec<EntityMatch>) -> Vec<EntityMatch> {
    candidates.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then(a.category.priority().cmp(&b.category.priority()))
            .then(a.start.cmp(&b.start))
    });

    let mut accepted: Vec<EntityMatch> = Vec::new();
    for candidate in candidates {
        if candidate.is_empty() {
            continue;
        }
        if accepted.iter().any(|kept| kept.overlaps(&candidate)) {
            continue;
        }
        accepted.push(candidate);
    }

    accepted.sort_by_key(|m| m.start);
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories_of(text: &str) -> Vec<(String, EntityCategory)> {
        Highlighter::new()
            .highlight(text)
            .into_iter()
            .map(|m| (m.canonical.clone(), m.category))
            .collect()
    }

    #[test]
    fn test_title_and_name_merge_into_one_span() {
        let text = "President Xi Jinping visited China's embassy";
        let matches = Highlighter::new().highlight(text);

        let people: Vec<_> = matches
            .iter()
            .filter(|m| m.category == EntityCategory::People)
            .collect();
        assert_eq!(people.len(), 1);
        assert_eq!(&text[people[0].start..people[0].end], "President Xi Jinping");
        assert_eq!(people[0].canonical, "Xi Jinping");

        let country = matches
            .iter()
            .find(|m| m.category == EntityCategory::Countries)
            .expect("China should be recognized");
        assert_eq!(country.canonical, "China");
        // Span covers the possessive, canonical does not
        assert_eq!(&text[country.start..country.end], "China's");
    }

    #[test]
    fn test_spans_never_overlap() {
        let text = "The United Nations said 1,200 troops crossed into Ukraine on Monday, \
                    a 40% increase since 2024.";
        let matches = Highlighter::new().highlight(text);
        for (i, a) in matches.iter().enumerate() {
            for b in matches.iter().skip(i + 1) {
                assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_longer_dictionary_phrase_beats_fragment() {
        let cats = categories_of("The World Health Organization issued guidance");
        assert!(cats
            .iter()
            .any(|(c, cat)| c == "World Health Organization"
                && *cat == EntityCategory::Organizations));
    }

    #[test]
    fn test_structural_suffix_classification() {
        let cats = categories_of("He chairs the Central Military Commission in Beijing");
        assert!(cats
            .iter()
            .any(|(c, cat)| c == "Central Military Commission"
                && *cat == EntityCategory::Government));
        assert!(cats
            .iter()
            .any(|(c, cat)| c == "Beijing" && *cat == EntityCategory::Places));
    }

    #[test]
    fn test_unknown_two_word_run_is_a_person() {
        let cats = categories_of("Officials met Zhang Youxia yesterday");
        assert!(cats
            .iter()
            .any(|(c, cat)| c == "Zhang Youxia" && *cat == EntityCategory::People));
    }

    #[test]
    fn test_number_categories_are_not_clickable() {
        let matches = Highlighter::new().highlight("Revenue hit $4.5 billion, up 12% from May 3");
        assert!(matches.iter().any(|m| m.category == EntityCategory::Money));
        for m in &matches {
            if !m.category.is_clickable() {
                assert!(m.lookup_query().is_none());
            }
        }
    }

    #[test]
    fn test_sentence_start_common_word_skipped() {
        let matches = Highlighter::new().highlight("However the talks collapsed");
        assert!(matches
            .iter()
            .all(|m| m.category != EntityCategory::ProperNouns));
    }

    #[test]
    fn test_verbs_highlighted_without_links() {
        let matches = Highlighter::new().highlight("Lawmakers approved the measure");
        let verb = matches
            .iter()
            .find(|m| m.category == EntityCategory::Verbs)
            .expect("approved is a known verb");
        assert_eq!(verb.canonical, "approved");
        assert!(!verb.clickable);
    }

    #[test]
    fn test_features_counts() {
        let features = Highlighter::new().features(
            "\"We will finish the job,\" the director said Tuesday, according to officials. \
             The project reportedly costs $2.1 million.",
        );
        assert!(features.attribution >= 1);
        assert!(features.quotes >= 1);
        assert!(features.numbers >= 1);
        assert!(features.dates >= 1);
        assert!(features.hedging >= 1);
    }

    #[test]
    fn test_empty_text() {
        assert!(Highlighter::new().highlight("").is_empty());
    }
}
