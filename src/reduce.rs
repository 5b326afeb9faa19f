//! Candidate-set reduction: recency window, then per-source cap.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::debug;

use crate::article::types::Article;
use crate::TARGET_SCORING;

/// Maximum article age admitted into scoring and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecencyWindow {
    Hours6,
    Hours12,
    Hours24,
    Hours48,
    Week,
    All,
}

impl RecencyWindow {
    pub fn hours(&self) -> Option<i64> {
        match self {
            RecencyWindow::Hours6 => Some(6),
            RecencyWindow::Hours12 => Some(12),
            RecencyWindow::Hours24 => Some(24),
            RecencyWindow::Hours48 => Some(48),
            RecencyWindow::Week => Some(168),
            RecencyWindow::All => None,
        }
    }
}

impl FromStr for RecencyWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "6h" | "6" => Ok(RecencyWindow::Hours6),
            "12h" | "12" => Ok(RecencyWindow::Hours12),
            "24h" | "24" => Ok(RecencyWindow::Hours24),
            "48h" | "48" => Ok(RecencyWindow::Hours48),
            "week" | "1week" | "168" => Ok(RecencyWindow::Week),
            "all" | "0" => Ok(RecencyWindow::All),
            other => Err(format!("unknown recency window: {}", other)),
        }
    }
}

/// Maximum articles retained per source after ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceCap {
    Five,
    Ten,
    Fifteen,
    Twenty,
    NoLimit,
}

impl SourceCap {
    pub fn limit(&self) -> Option<usize> {
        match self {
            SourceCap::Five => Some(5),
            SourceCap::Ten => Some(10),
            SourceCap::Fifteen => Some(15),
            SourceCap::Twenty => Some(20),
            SourceCap::NoLimit => None,
        }
    }
}

impl FromStr for SourceCap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "5" => Ok(SourceCap::Five),
            "10" => Ok(SourceCap::Ten),
            "15" => Ok(SourceCap::Fifteen),
            "20" => Ok(SourceCap::Twenty),
            "none" | "nolimit" | "no-limit" | "0" => Ok(SourceCap::NoLimit),
            other => Err(format!("unknown per-source cap: {}", other)),
        }
    }
}

/// Ranking order for the per-source cap: pre-clustering score descending,
/// ties more-recent-first with unknown timestamps after dated ones, then the
/// stable article id.
fn rank_cmp(a: &Article, b: &Article) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| match (a.published_at, b.published_at) {
            (Some(pa), Some(pb)) => pb.cmp(&pa),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.id.cmp(&b.id))
}

/// Apply the recency filter, then the per-source cap. Articles with unknown
/// publish times always pass the recency filter.
pub fn reduce(
    articles: Vec<Article>,
    window: RecencyWindow,
    cap: SourceCap,
    now: DateTime<Utc>,
) -> Vec<Article> {
    let before = articles.len();

    let recent: Vec<Article> = match window.hours() {
        Some(hours) => {
            let cutoff = now - Duration::hours(hours);
            articles
                .into_iter()
                .filter(|a| a.published_at.map(|p| p >= cutoff).unwrap_or(true))
                .collect()
        }
        None => articles,
    };

    let reduced = match cap.limit() {
        Some(limit) => {
            let mut by_source: BTreeMap<String, Vec<Article>> = BTreeMap::new();
            for article in recent {
                by_source
                    .entry(article.source_id.clone())
                    .or_default()
                    .push(article);
            }
            let mut kept = Vec::new();
            for (_, mut group) in by_source {
                group.sort_by(rank_cmp);
                group.truncate(limit);
                kept.extend(group);
            }
            kept.sort_by(rank_cmp);
            kept
        }
        None => {
            let mut kept = recent;
            kept.sort_by(rank_cmp);
            kept
        }
    };

    debug!(
        target: TARGET_SCORING,
        "Volume reduction: {} -> {} articles", before, reduced.len()
    );
    reduced
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn article(id: &str, source: &str, score: i32, age_hours: Option<i64>) -> Article {
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        Article {
            id: id.to_string(),
            source_id: source.to_string(),
            title: format!("title {}", id),
            link: format!("https://example.com/{}", id),
            summary: String::new(),
            author: None,
            published_at: age_hours.map(|h| now - Duration::hours(h)),
            score,
            breakdown: Vec::new(),
            entities: Vec::new(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_recency_window_excludes_old_articles() {
        let articles = vec![
            article("a", "s1", 80, Some(2)),
            article("b", "s1", 90, Some(30)),
            article("c", "s1", 70, None),
        ];
        let kept = reduce(articles, RecencyWindow::Hours24, SourceCap::NoLimit, now());
        let ids: Vec<_> = kept.iter().map(|a| a.id.as_str()).collect();
        assert!(ids.contains(&"a"));
        assert!(!ids.contains(&"b"), "30h-old article must not pass a 24h window");
        // Unknown timestamps always pass
        assert!(ids.contains(&"c"));
    }

    #[test]
    fn test_per_source_cap_keeps_top_scores() {
        let mut articles = Vec::new();
        for i in 0..8 {
            articles.push(article(&format!("a{}", i), "s1", 50 + i, Some(1)));
        }
        articles.push(article("z", "s2", 10, Some(1)));
        let kept = reduce(articles, RecencyWindow::All, SourceCap::Five, now());

        let s1_count = kept.iter().filter(|a| a.source_id == "s1").count();
        assert_eq!(s1_count, 5);
        // The five survivors are the five highest-scoring from s1
        assert!(kept
            .iter()
            .filter(|a| a.source_id == "s1")
            .all(|a| a.score >= 53));
        // The other source is untouched by s1's cap
        assert!(kept.iter().any(|a| a.source_id == "s2"));
    }

    #[test]
    fn test_cap_tie_prefers_more_recent_then_id() {
        let articles = vec![
            article("old", "s1", 80, Some(10)),
            article("new", "s1", 80, Some(1)),
            article("undated", "s1", 80, None),
        ];
        let kept = reduce(articles, RecencyWindow::All, SourceCap::Five, now());
        let ids: Vec<_> = kept.iter().map(|a| a.id.as_str()).collect();
        // All survive (cap not hit) but ranking puts dated-and-recent first,
        // unknown timestamps after all dated articles of the same score
        assert_eq!(ids, vec!["new", "old", "undated"]);
    }

    #[test]
    fn test_empty_input_is_valid() {
        let kept = reduce(Vec::new(), RecencyWindow::Hours6, SourceCap::Five, now());
        assert!(kept.is_empty());
    }

    #[test]
    fn test_window_parsing() {
        assert_eq!("24h".parse::<RecencyWindow>().unwrap(), RecencyWindow::Hours24);
        assert_eq!("week".parse::<RecencyWindow>().unwrap(), RecencyWindow::Week);
        assert_eq!("all".parse::<RecencyWindow>().unwrap(), RecencyWindow::All);
        assert!("yesterday".parse::<RecencyWindow>().is_err());
        assert_eq!("10".parse::<SourceCap>().unwrap(), SourceCap::Ten);
        assert_eq!("none".parse::<SourceCap>().unwrap(), SourceCap::NoLimit);
    }
}
