//! The objectivity scoring rule table.

use serde::Serialize;
use tracing::debug;
use url::Url;

use super::grade::ArticleGrade;
use super::lexicon::{
    ABSOLUTIST_PATTERNS, CLICKBAIT_NUMBER_PATTERNS, COMMON_ABBREVIATIONS, CURIOSITY_GAP_PHRASES,
    EMOTIONAL_WORDS, IMPERATIVE_PATTERN, OPINION_FRAMING_PATTERNS, OPINION_TITLE_PATTERNS,
    OPINION_URL_PATTERNS, SENSATIONAL_KEYWORDS, SENSATIONAL_SUMMARY_TIER, VAGUE_SOURCE_PATTERNS,
};
use crate::article::types::{Article, FilterKeyword, ScoreFactor, Source};
use crate::highlight::Highlighter;
use crate::TARGET_SCORING;

/// Tunable scoring bounds. Category caps keep long text from being punished
/// without bound; the final clamp happens once, at the end.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub max_sensational_deduction: i32,
    pub max_punctuation_deduction: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            max_sensational_deduction: 40,
            max_punctuation_deduction: 15,
        }
    }
}

/// Scoring result: the clamped score, the pre-clamp sum, and the ordered
/// factor breakdown with pre-clamp deltas.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub score: i32,
    pub raw: i32,
    pub breakdown: Vec<ScoreFactor>,
    pub grade: ArticleGrade,
}

/// Cross-source corroboration bonus for a cluster with the given number of
/// distinct sources. Applied after clustering, outside the per-article pass.
pub fn corroboration_bonus(distinct_sources: usize) -> i32 {
    match distinct_sources {
        0 | 1 => 0,
        2 => 2,
        3 => 5,
        _ => 8,
    }
}

/// Computes objectivity scores. Pure and deterministic for a fixed article,
/// source, and keyword snapshot.
#[derive(Debug, Default)]
pub struct ObjectivityScorer {
    config: ScoringConfig,
    highlighter: Highlighter,
}

impl ObjectivityScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        ObjectivityScorer {
            config,
            highlighter: Highlighter::new(),
        }
    }

    /// Score one article against its source and the active keyword snapshot.
    pub fn score(
        &self,
        article: &Article,
        source: &Source,
        keywords: &[FilterKeyword],
    ) -> ScoreReport {
        let title_lower = article.title.to_lowercase();
        let summary_lower = article.summary.to_lowercase();
        let mut breakdown: Vec<ScoreFactor> = Vec::new();

        let push = |factors: &mut Vec<ScoreFactor>, name: &str, delta: i32| {
            if delta != 0 {
                factors.push(ScoreFactor::new(name, delta));
            }
        };

        push(&mut breakdown, "opinion_url", self.check_opinion_url(&article.link));
        push(&mut breakdown, "opinion_title", check_opinion_title(&title_lower));
        push(
            &mut breakdown,
            "sensational_keywords",
            self.check_sensational(&title_lower, &summary_lower),
        );
        self.check_clickbait(&article.title, &title_lower, &mut breakdown);
        push(
            &mut breakdown,
            "excessive_punctuation",
            self.check_punctuation(&article.title),
        );
        push(&mut breakdown, "all_caps", check_all_caps(&article.title));

        for keyword in keywords {
            if !keyword.active || keyword.text.is_empty() {
                continue;
            }
            let needle = keyword.text.to_lowercase();
            if title_lower.contains(&needle) || summary_lower.contains(&needle) {
                breakdown.push(ScoreFactor::new(
                    format!("keyword:{}", keyword.text),
                    keyword.weight,
                ));
            }
        }

        if !article.summary.is_empty() {
            let features = self.highlighter.features(&article.summary);
            push(&mut breakdown, "attribution", if features.attribution > 0 { 5 } else { 0 });
            push(&mut breakdown, "quoted_speech", if features.quotes > 0 { 5 } else { 0 });
            push(&mut breakdown, "numeric_figures", if features.numbers > 0 { 3 } else { 0 });
            push(&mut breakdown, "explicit_dates", if features.dates > 0 { 3 } else { 0 });
            push(&mut breakdown, "hedging_language", if features.hedging > 0 { 2 } else { 0 });

            check_summary_negatives(&article.summary, &summary_lower, &mut breakdown);
        }

        push(&mut breakdown, "source_factual", source.factual.score_modifier());

        let raw = 100 + breakdown.iter().map(|f| f.delta).sum::<i32>();
        let score = raw.clamp(0, 100);
        debug!(
            target: TARGET_SCORING,
            "Scored article {}: raw={}, clamped={}, factors={}",
            article.id,
            raw,
            score,
            breakdown.len()
        );

        ScoreReport {
            score,
            raw,
            breakdown,
            grade: ArticleGrade::for_score(score),
        }
    }

    /// Opinion-section URL check. A fixed deduction, applied once no matter
    /// how many path segments match.
    fn check_opinion_url(&self, link: &str) -> i32 {
        if link.is_empty() {
            return 0;
        }
        let path = match Url::parse(link) {
            Ok(parsed) => parsed.path().to_lowercase(),
            Err(_) => link.to_lowercase(),
        };
        for pattern in OPINION_URL_PATTERNS {
            if path.contains(pattern) {
                return -40;
            }
        }
        0
    }

    fn check_sensational(&self, title_lower: &str, summary_lower: &str) -> i32 {
        let mut total = 0;
        for (keyword, tier) in SENSATIONAL_KEYWORDS {
            if title_lower.contains(keyword) {
                total += tier;
            } else if summary_lower.contains(keyword) {
                total += SENSATIONAL_SUMMARY_TIER;
            }
        }
        -total.min(self.config.max_sensational_deduction)
    }

    /// Clickbait structural families, each counted at most once.
    fn check_clickbait(&self, title: &str, title_lower: &str, breakdown: &mut Vec<ScoreFactor>) {
        if CLICKBAIT_NUMBER_PATTERNS.iter().any(|p| p.is_match(title)) {
            breakdown.push(ScoreFactor::new("clickbait:numbered_list", -20));
        }
        if CURIOSITY_GAP_PHRASES.iter().any(|p| title_lower.contains(p)) {
            breakdown.push(ScoreFactor::new("clickbait:curiosity_gap", -20));
        }
        if title.trim_end().ends_with('?') {
            breakdown.push(ScoreFactor::new("clickbait:rhetorical_question", -20));
        }
    }

    fn check_punctuation(&self, title: &str) -> i32 {
        let mut total = 0;
        if title.contains("!!") {
            total += 10;
        } else if title.matches('!').count() > 1 {
            total += 5;
        }
        if title.contains("??") {
            total += 10;
        } else if title.matches('?').count() > 2 {
            total += 5;
        }
        if title.matches("...").count() > 1 {
            total += 5;
        }
        -total.min(self.config.max_punctuation_deduction)
    }
}

fn check_opinion_title(title_lower: &str) -> i32 {
    for pattern in OPINION_TITLE_PATTERNS {
        if title_lower.contains(pattern) {
            return -35;
        }
    }
    0
}

/// ALL-CAPS tokens, excluding ordinary abbreviations. Independent of the
/// punctuation check even when both fire on the same token.
fn check_all_caps(title: &str) -> i32 {
    let mut caps_words = 0;
    for word in title.split_whitespace() {
        let clean: String = word.chars().filter(|c| c.is_alphanumeric()).collect();
        if clean.chars().count() < 3 {
            continue;
        }
        let has_alpha = clean.chars().any(|c| c.is_alphabetic());
        let all_upper = clean
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| c.is_uppercase());
        if has_alpha && all_upper && !COMMON_ABBREVIATIONS.contains(clean.as_str()) {
            caps_words += 1;
        }
    }
    match caps_words {
        0 => 0,
        1 => -5,
        2 => -10,
        _ => -15,
    }
}

fn check_summary_negatives(summary: &str, summary_lower: &str, breakdown: &mut Vec<ScoreFactor>) {
    if OPINION_FRAMING_PATTERNS.iter().any(|p| p.is_match(summary_lower)) {
        breakdown.push(ScoreFactor::new("opinion_framing", -10));
    }
    if IMPERATIVE_PATTERN.is_match(summary_lower) {
        breakdown.push(ScoreFactor::new("imperative_language", -8));
    }
    if VAGUE_SOURCE_PATTERNS.iter().any(|p| p.is_match(summary_lower)) {
        breakdown.push(ScoreFactor::new("vague_sourcing", -5));
    }
    if EMOTIONAL_WORDS.iter().any(|w| summary_lower.contains(w)) {
        breakdown.push(ScoreFactor::new("emotional_language", -5));
    }
    if ABSOLUTIST_PATTERNS.iter().any(|p| p.is_match(summary_lower)) {
        breakdown.push(ScoreFactor::new("absolutist_language", -5));
    }
    if summary.trim_end().ends_with('?') {
        breakdown.push(ScoreFactor::new("rhetorical_question", -5));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::types::{BiasLabel, FactualLabel};

    fn source(factual: FactualLabel) -> Source {
        Source {
            id: "src".to_string(),
            name: "Test Wire".to_string(),
            bias: BiasLabel::Center,
            factual,
        }
    }

    fn article(title: &str, link: &str, summary: &str) -> Article {
        Article {
            id: "a1".to_string(),
            source_id: "src".to_string(),
            title: title.to_string(),
            link: link.to_string(),
            summary: summary.to_string(),
            author: None,
            published_at: None,
            score: 0,
            breakdown: Vec::new(),
            entities: Vec::new(),
        }
    }

    #[test]
    fn test_hype_opinion_article_scores_near_zero() {
        let scorer = ObjectivityScorer::new();
        let a = article(
            "BREAKING: Official SLAMS new policy!!!",
            "https://example.com/opinion/2026/policy",
            "",
        );
        let report = scorer.score(&a, &source(FactualLabel::High), &[]);
        assert!(report.score <= 15, "expected near-zero, got {}", report.score);
        assert!(report
            .breakdown
            .iter()
            .any(|f| f.factor == "opinion_url" && f.delta == -40));
        assert_eq!(report.grade.letter, "F");
    }

    #[test]
    fn test_neutral_wire_article_scores_high() {
        let scorer = ObjectivityScorer::new();
        let a = article(
            "Senate passes infrastructure bill, 78-12",
            "https://example.com/news/2026/senate-bill",
            "\"We got it done for the American people,\" Senator Maria Ruiz said Tuesday, \
             citing $550 billion in spending approved since 2021.",
        );
        let report = scorer.score(&a, &source(FactualLabel::VeryHigh), &[]);
        assert!(report.score >= 90, "got {}", report.score);
        assert_eq!(report.score, 100);
        // Positives overflow; the clamp happens once at the end
        assert!(report.raw > 100);
        assert!(report
            .breakdown
            .iter()
            .any(|f| f.factor == "quoted_speech" && f.delta == 5));
    }

    #[test]
    fn test_score_bounds_on_empty_input() {
        let scorer = ObjectivityScorer::new();
        let a = article("", "", "");
        let report = scorer.score(&a, &source(FactualLabel::Unknown), &[]);
        assert_eq!(report.score, 100);
        assert!(report.breakdown.is_empty());
    }

    #[test]
    fn test_determinism() {
        let scorer = ObjectivityScorer::new();
        let a = article(
            "Markets fall as chaos spreads",
            "https://example.com/markets",
            "Critics say the plan proves nothing. Everyone should worry.",
        );
        let keywords = vec![FilterKeyword {
            text: "markets".to_string(),
            weight: -7,
            active: true,
        }];
        let first = scorer.score(&a, &source(FactualLabel::Mixed), &keywords);
        let second = scorer.score(&a, &source(FactualLabel::Mixed), &keywords);
        assert_eq!(first.score, second.score);
        assert_eq!(first.breakdown, second.breakdown);
    }

    #[test]
    fn test_custom_keyword_weights_are_signed() {
        let scorer = ObjectivityScorer::new();
        let a = article("City council reviews zoning", "https://example.com/z", "");
        let keywords = vec![
            FilterKeyword {
                text: "zoning".to_string(),
                weight: -25,
                active: true,
            },
            FilterKeyword {
                text: "council".to_string(),
                weight: 10,
                active: true,
            },
            FilterKeyword {
                text: "zoning".to_string(),
                weight: -99,
                active: false,
            },
        ];
        let report = scorer.score(&a, &source(FactualLabel::High), &keywords);
        assert!(report
            .breakdown
            .iter()
            .any(|f| f.factor == "keyword:zoning" && f.delta == -25));
        assert!(report
            .breakdown
            .iter()
            .any(|f| f.factor == "keyword:council" && f.delta == 10));
        // Inactive keywords are ignored
        assert_eq!(
            report
                .breakdown
                .iter()
                .filter(|f| f.factor == "keyword:zoning")
                .count(),
            1
        );
        assert_eq!(report.score, 100 - 25 + 10);
    }

    #[test]
    fn test_punctuation_and_caps_are_independent() {
        let scorer = ObjectivityScorer::new();
        let a = article("THEY LIED!! The truth comes out!!", "https://example.com/t", "");
        let report = scorer.score(&a, &source(FactualLabel::High), &[]);
        assert!(report
            .breakdown
            .iter()
            .any(|f| f.factor == "excessive_punctuation"));
        assert!(report.breakdown.iter().any(|f| f.factor == "all_caps"));
    }

    #[test]
    fn test_opinion_title_marker() {
        let scorer = ObjectivityScorer::new();
        let a = article(
            "Analysis: What the vote really means",
            "https://example.com/news/vote",
            "",
        );
        let report = scorer.score(&a, &source(FactualLabel::High), &[]);
        assert!(report
            .breakdown
            .iter()
            .any(|f| f.factor == "opinion_title" && f.delta == -35));
    }

    #[test]
    fn test_clickbait_families_count_once_each() {
        let scorer = ObjectivityScorer::new();
        let a = article(
            "10 reasons you won't believe the shutdown?",
            "https://example.com/list",
            "",
        );
        let report = scorer.score(&a, &source(FactualLabel::High), &[]);
        let clickbait: Vec<_> = report
            .breakdown
            .iter()
            .filter(|f| f.factor.starts_with("clickbait:"))
            .collect();
        assert_eq!(clickbait.len(), 3);
        assert!(clickbait.iter().all(|f| f.delta == -20));
    }

    #[test]
    fn test_raw_sum_may_go_negative_before_clamp() {
        let scorer = ObjectivityScorer::new();
        let a = article(
            "Opinion: SHOCKING MELTDOWN DESTROYS EVERYTHING!!!",
            "https://example.com/opinion/meltdown",
            "I think everyone must act. Critics say this proves the outrageous truth?",
        );
        let report = scorer.score(&a, &source(FactualLabel::Low), &[]);
        assert_eq!(report.score, 0);
        assert!(report.raw < 0);
    }

    #[test]
    fn test_sensational_cap_bounds_long_text() {
        let scorer = ObjectivityScorer::new();
        let a = article(
            "Bombshell explosive shocking stunning meltdown fury outrage chaos",
            "https://example.com/hype",
            "",
        );
        let report = scorer.score(&a, &source(FactualLabel::High), &[]);
        let sensational = report
            .breakdown
            .iter()
            .find(|f| f.factor == "sensational_keywords")
            .expect("sensational factor expected");
        assert_eq!(sensational.delta, -40);
    }
}
