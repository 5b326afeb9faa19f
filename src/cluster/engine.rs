//! Greedy online cluster assignment and representative election.

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info};

use super::keywords::{extract_keywords, extract_label_keywords, jaccard};
use super::types::{Cluster, ClusterConfig};
use super::DEFAULT_TOPIC;
use crate::article::types::Article;
use crate::highlight::EntityCategory;
use crate::scoring::corroboration_bonus;
use crate::TARGET_CLUSTER;

/// Partitions a candidate set into same-story clusters.
pub struct ClusterEngine {
    config: ClusterConfig,
}

struct Candidate<'a> {
    article: &'a Article,
    title_tokens: HashSet<String>,
    entity_tokens: HashSet<String>,
    published: DateTime<Utc>,
}

struct Assignment {
    members: Vec<usize>,
    representative: usize,
}

impl Default for ClusterEngine {
    fn default() -> Self {
        ClusterEngine {
            config: ClusterConfig::default(),
        }
    }
}

impl ClusterEngine {
    pub fn new(config: ClusterConfig) -> Self {
        ClusterEngine { config }
    }

    /// Partition the candidate set. Every article lands in exactly one
    /// cluster; in the worst case each is its own singleton.
    ///
    /// Articles are processed in a stable order (score descending, then
    /// source id, then article id) and each joins the best-matching existing
    /// cluster, judged against that cluster's representative, or starts a new
    /// one. Unknown publish times are treated as `now`.
    pub fn cluster(&self, articles: &[Article], now: DateTime<Utc>) -> Vec<Cluster> {
        let mut candidates: Vec<Candidate> = articles
            .iter()
            .map(|article| Candidate {
                article,
                title_tokens: extract_keywords(&article.title),
                entity_tokens: entity_tokens(article),
                published: article.effective_published(now),
            })
            .collect();
        candidates.sort_by(|a, b| {
            b.article
                .score
                .cmp(&a.article.score)
                .then_with(|| a.article.source_id.cmp(&b.article.source_id))
                .then_with(|| a.article.id.cmp(&b.article.id))
        });

        let mut assignments: Vec<Assignment> = Vec::new();
        for (idx, candidate) in candidates.iter().enumerate() {
            let mut best: Option<(usize, f64)> = None;
            for (cluster_idx, assignment) in assignments.iter().enumerate() {
                let representative = &candidates[assignment.representative];
                if let Some(sim) = self.similarity(candidate, representative) {
                    if best.map(|(_, s)| sim > s).unwrap_or(true) {
                        best = Some((cluster_idx, sim));
                    }
                }
            }

            match best {
                Some((cluster_idx, sim)) => {
                    let assignment = &mut assignments[cluster_idx];
                    assignment.members.push(idx);
                    // The representative is always the current max-score
                    // member; ties keep the earlier one.
                    let rep_score = candidates[assignment.representative].article.score;
                    if candidate.article.score > rep_score {
                        assignment.representative = idx;
                    }
                    debug!(
                        target: TARGET_CLUSTER,
                        "Article {} joined cluster {} (similarity {:.3})",
                        candidate.article.id,
                        cluster_idx,
                        sim
                    );
                }
                None => {
                    assignments.push(Assignment {
                        members: vec![idx],
                        representative: idx,
                    });
                }
            }
        }

        let mut clusters: Vec<Cluster> = assignments
            .iter()
            .map(|assignment| {
                let member_articles: Vec<&Article> = assignment
                    .members
                    .iter()
                    .map(|&i| candidates[i].article)
                    .collect();
                let distinct_sources: HashSet<&str> = member_articles
                    .iter()
                    .map(|a| a.source_id.as_str())
                    .collect();
                Cluster {
                    id: 0,
                    article_ids: member_articles.iter().map(|a| a.id.clone()).collect(),
                    representative_id: candidates[assignment.representative].article.id.clone(),
                    corroboration_bonus: corroboration_bonus(distinct_sources.len()),
                    topic: topic_label(&member_articles),
                }
            })
            .collect();

        // Rank clusters by the representative's publish time, newest first.
        let rep_published = |cluster: &Cluster| {
            candidates
                .iter()
                .find(|c| c.article.id == cluster.representative_id)
                .map(|c| c.published)
                .unwrap_or(now)
        };
        clusters.sort_by(|a, b| {
            rep_published(b)
                .cmp(&rep_published(a))
                .then_with(|| a.representative_id.cmp(&b.representative_id))
        });
        for (idx, cluster) in clusters.iter_mut().enumerate() {
            cluster.id = idx;
        }

        info!(
            target: TARGET_CLUSTER,
            "Clustered {} articles into {} clusters",
            articles.len(),
            clusters.len()
        );
        clusters
    }

    /// Similarity between a candidate and a cluster representative: title
    /// token overlap, or entity overlap within a bounded publish-time
    /// distance.
    fn similarity(&self, a: &Candidate, b: &Candidate) -> Option<f64> {
        let title_sim = jaccard(&a.title_tokens, &b.title_tokens);
        if title_sim >= self.config.title_threshold {
            return Some(title_sim);
        }

        let entity_sim = jaccard(&a.entity_tokens, &b.entity_tokens);
        if entity_sim >= self.config.entity_threshold {
            let delta_hours = (a.published - b.published).num_hours().abs();
            if delta_hours <= self.config.max_time_delta_hours {
                return Some(entity_sim);
            }
        }

        None
    }
}

/// Distinctive entity and event tokens for the entity-overlap path.
fn entity_tokens(article: &Article) -> HashSet<String> {
    article
        .entities
        .iter()
        .filter(|m| {
            matches!(
                m.category,
                EntityCategory::People
                    | EntityCategory::Government
                    | EntityCategory::Military
                    | EntityCategory::Organizations
                    | EntityCategory::Countries
                    | EntityCategory::Places
                    | EntityCategory::Events
                    | EntityCategory::ProperNouns
            )
        })
        .map(|m| m.canonical.to_lowercase())
        .collect()
}

/// Label a cluster with the title keywords its members share.
fn topic_label(members: &[&Article]) -> String {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for article in members {
        for word in extract_label_keywords(&article.title) {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&String, &usize)> = counts.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let shared: Vec<&str> = ranked
        .iter()
        .take(3)
        .filter(|(_, count)| **count > 1)
        .map(|(word, _)| word.as_str())
        .collect();

    let label = if shared.is_empty() {
        ranked
            .iter()
            .take(2)
            .map(|(word, _)| word.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        shared.join(", ")
    };

    if label.is_empty() {
        DEFAULT_TOPIC.to_string()
    } else {
        title_case(&label)
    }
}

fn title_case(label: &str) -> String {
    label
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::EntityMatch;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
    }

    fn article(id: &str, source: &str, title: &str, score: i32, age_hours: i64) -> Article {
        Article {
            id: id.to_string(),
            source_id: source.to_string(),
            title: title.to_string(),
            link: format!("https://example.com/{}", id),
            summary: String::new(),
            author: None,
            published_at: Some(now() - Duration::hours(age_hours)),
            score,
            breakdown: Vec::new(),
            entities: Vec::new(),
        }
    }

    fn with_entities(mut article: Article, canonicals: &[&str]) -> Article {
        article.entities = canonicals
            .iter()
            .map(|c| EntityMatch::new(0, c.len(), EntityCategory::People, c.to_string()))
            .collect();
        article
    }

    #[test]
    fn test_same_story_from_three_sources_clusters() {
        let articles = vec![
            article("a", "ap", "Senate passes infrastructure bill, 78-12", 95, 1),
            article("b", "bbc", "Infrastructure bill passes Senate after long debate", 90, 2),
            article("c", "npr", "Senate approves sweeping infrastructure bill", 85, 3),
        ];
        let clusters = ClusterEngine::default().cluster(&articles, now());
        assert_eq!(clusters.len(), 1);
        let cluster = &clusters[0];
        assert_eq!(cluster.size(), 3);
        assert_eq!(cluster.representative_id, "a");
        assert_eq!(cluster.corroboration_bonus, 5);
        assert!(cluster.is_cluster());
    }

    #[test]
    fn test_every_article_in_exactly_one_cluster() {
        let articles = vec![
            article("a", "ap", "Senate passes infrastructure bill", 95, 1),
            article("b", "bbc", "Infrastructure bill passes Senate", 90, 2),
            article("c", "npr", "Wildfire spreads across northern California", 80, 1),
            article("d", "wsj", "Quarterly earnings beat expectations", 75, 4),
        ];
        let clusters = ClusterEngine::default().cluster(&articles, now());
        for a in &articles {
            let containing = clusters.iter().filter(|c| c.contains(&a.id)).count();
            assert_eq!(containing, 1, "article {} must be in exactly one cluster", a.id);
        }
        for cluster in &clusters {
            assert!(cluster.contains(&cluster.representative_id));
        }
    }

    #[test]
    fn test_singletons_get_zero_bonus() {
        let articles = vec![
            article("a", "ap", "Wildfire spreads across northern California", 80, 1),
            article("b", "wsj", "Quarterly earnings beat expectations", 75, 2),
        ];
        let clusters = ClusterEngine::default().cluster(&articles, now());
        assert_eq!(clusters.len(), 2);
        for cluster in &clusters {
            assert_eq!(cluster.size(), 1);
            assert_eq!(cluster.corroboration_bonus, 0);
        }
    }

    #[test]
    fn test_idempotent_partition() {
        let articles = vec![
            article("a", "ap", "Senate passes infrastructure bill", 95, 1),
            article("b", "bbc", "Infrastructure bill passes Senate", 90, 2),
            article("c", "npr", "Wildfire spreads across northern California", 80, 1),
        ];
        let engine = ClusterEngine::default();
        let first = engine.cluster(&articles, now());
        let second = engine.cluster(&articles, now());
        assert_eq!(first.len(), second.len());
        for (x, y) in first.iter().zip(second.iter()) {
            assert_eq!(x.article_ids, y.article_ids);
            assert_eq!(x.representative_id, y.representative_id);
        }
    }

    #[test]
    fn test_entity_overlap_path_with_time_gate() {
        let a = with_entities(
            article("a", "ap", "Xi arrives for state visit", 90, 1),
            &["Xi Jinping", "Moscow"],
        );
        let b = with_entities(
            article("b", "bbc", "Chinese leader lands in Russian capital", 85, 3),
            &["Xi Jinping", "Moscow"],
        );
        let clusters = ClusterEngine::default().cluster(&[a.clone(), b.clone()], now());
        assert_eq!(clusters.len(), 1, "entity overlap within the window should merge");

        // Same entities but far apart in time: separate stories
        let c = with_entities(
            article("c", "bbc", "Chinese leader lands in Russian capital", 85, 48),
            &["Xi Jinping", "Moscow"],
        );
        let clusters = ClusterEngine::default().cluster(&[a, c], now());
        assert_eq!(clusters.len(), 2);
    }

    #[test]
    fn test_threshold_is_tunable() {
        let articles = vec![
            article("a", "ap", "Senate passes infrastructure bill", 95, 1),
            article("b", "bbc", "Senate approves sweeping infrastructure bill", 90, 2),
        ];
        let strict = ClusterEngine::new(ClusterConfig {
            title_threshold: 0.95,
            ..ClusterConfig::default()
        });
        assert_eq!(strict.cluster(&articles, now()).len(), 2);

        let loose = ClusterEngine::new(ClusterConfig {
            title_threshold: 0.2,
            ..ClusterConfig::default()
        });
        assert_eq!(loose.cluster(&articles, now()).len(), 1);
    }

    #[test]
    fn test_clusters_ranked_newest_first() {
        let articles = vec![
            article("old", "ap", "Quarterly earnings beat expectations", 90, 20),
            article("new", "bbc", "Wildfire spreads across northern California", 70, 1),
        ];
        let clusters = ClusterEngine::default().cluster(&articles, now());
        assert_eq!(clusters[0].representative_id, "new");
        assert_eq!(clusters[1].representative_id, "old");
        assert_eq!(clusters[0].id, 0);
    }

    #[test]
    fn test_topic_label_from_shared_keywords() {
        let articles = vec![
            article("a", "ap", "Senate passes infrastructure bill", 95, 1),
            article("b", "bbc", "Infrastructure bill passes Senate", 90, 2),
        ];
        let clusters = ClusterEngine::default().cluster(&articles, now());
        let topic = clusters[0].topic.to_lowercase();
        assert!(topic.contains("infrastructure") || topic.contains("senate"));
    }

    #[test]
    fn test_empty_candidate_set() {
        let clusters = ClusterEngine::default().cluster(&[], now());
        assert!(clusters.is_empty());
    }
}
