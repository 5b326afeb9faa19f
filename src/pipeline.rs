//! Stage orchestration: normalize, score, highlight, reduce, cluster.
//!
//! One `run` is independent of every other run: inputs are read-only
//! snapshots, and nothing is retained between invocations. A caller that
//! wants to abort simply discards the result.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::article::normalize::normalize_entry;
use crate::article::types::{Article, FilterKeyword, ScoreFactor, Source};
use crate::cluster::{Cluster, ClusterConfig, ClusterEngine};
use crate::feed::types::RawEntry;
use crate::highlight::Highlighter;
use crate::reduce::{reduce, RecencyWindow, SourceCap};
use crate::scoring::{ArticleGrade, ObjectivityScorer};
use crate::TARGET_SCORING;

/// User-selected parameters for one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineParams {
    pub recency: RecencyWindow,
    pub per_source_cap: SourceCap,
    pub clustering: bool,
}

impl Default for PipelineParams {
    fn default() -> Self {
        PipelineParams {
            recency: RecencyWindow::Hours24,
            per_source_cap: SourceCap::Ten,
            clustering: true,
        }
    }
}

/// A surviving article with its final annotations.
#[derive(Debug, Clone, Serialize)]
pub struct RankedArticle {
    pub article: Article,
    pub grade: ArticleGrade,
    pub cluster_id: usize,
    pub is_representative: bool,
}

/// Final ranked, annotated output of one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineOutput {
    pub clusters: Vec<Cluster>,
    /// Articles grouped by cluster, in cluster rank order; the
    /// representative leads its cluster.
    pub articles: Vec<RankedArticle>,
}

/// The full scoring, clustering, and highlighting pipeline.
#[derive(Default)]
pub struct Pipeline {
    scorer: ObjectivityScorer,
    highlighter: Highlighter,
    engine: ClusterEngine,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cluster_config(config: ClusterConfig) -> Self {
        Pipeline {
            scorer: ObjectivityScorer::new(),
            highlighter: Highlighter::new(),
            engine: ClusterEngine::new(config),
        }
    }

    /// Run the pipeline over raw entries grouped by source.
    ///
    /// `now` anchors recency and time-delta decisions so a run is a pure
    /// function of its arguments.
    pub fn run(
        &self,
        batches: &[(Source, Vec<RawEntry>)],
        keywords: &[FilterKeyword],
        params: &PipelineParams,
        now: DateTime<Utc>,
    ) -> PipelineOutput {
        // Normalize, score, highlight. Rejected entries vanish here.
        let mut articles: Vec<Article> = Vec::new();
        for (source, entries) in batches {
            for entry in entries {
                let Some(mut article) = normalize_entry(entry, source) else {
                    continue;
                };
                let report = self.scorer.score(&article, source, keywords);
                article.score = report.score;
                article.breakdown = report.breakdown;
                article.entities = self.highlighter.highlight(&article.display_text());
                articles.push(article);
            }
        }
        debug!(
            target: TARGET_SCORING,
            "Normalized and scored {} articles from {} sources",
            articles.len(),
            batches.len()
        );

        let survivors = reduce(articles, params.recency, params.per_source_cap, now);

        let clusters = if params.clustering {
            self.engine.cluster(&survivors, now)
        } else {
            singleton_clusters(&survivors, now)
        };

        let output = assemble(survivors, clusters);
        info!(
            target: TARGET_SCORING,
            "Pipeline produced {} articles in {} clusters",
            output.articles.len(),
            output.clusters.len()
        );
        output
    }
}

/// With clustering off every survivor stands alone, ranked newest first.
fn singleton_clusters(articles: &[Article], now: DateTime<Utc>) -> Vec<Cluster> {
    let mut ordered: Vec<&Article> = articles.iter().collect();
    ordered.sort_by(|a, b| {
        b.effective_published(now)
            .cmp(&a.effective_published(now))
            .then_with(|| a.id.cmp(&b.id))
    });
    ordered
        .iter()
        .enumerate()
        .map(|(idx, article)| Cluster {
            id: idx,
            article_ids: vec![article.id.clone()],
            representative_id: article.id.clone(),
            corroboration_bonus: 0,
            topic: String::new(),
        })
        .collect()
}

/// Apply corroboration bonuses and group the output by cluster rank.
fn assemble(survivors: Vec<Article>, clusters: Vec<Cluster>) -> PipelineOutput {
    let mut by_id: HashMap<String, Article> = survivors
        .into_iter()
        .map(|a| (a.id.clone(), a))
        .collect();

    let mut ranked: Vec<RankedArticle> = Vec::new();
    for cluster in &clusters {
        for article_id in &cluster.article_ids {
            let Some(mut article) = by_id.remove(article_id) else {
                continue;
            };
            if cluster.corroboration_bonus > 0 {
                article
                    .breakdown
                    .push(ScoreFactor::new("corroboration", cluster.corroboration_bonus));
                article.score = (article.score + cluster.corroboration_bonus).clamp(0, 100);
            }
            let is_representative = article_id == &cluster.representative_id;
            ranked.push(RankedArticle {
                grade: ArticleGrade::for_score(article.score),
                cluster_id: cluster.id,
                is_representative,
                article,
            });
        }
    }

    // Representative first within each cluster, then by score.
    ranked.sort_by(|a, b| {
        a.cluster_id
            .cmp(&b.cluster_id)
            .then_with(|| b.is_representative.cmp(&a.is_representative))
            .then_with(|| b.article.score.cmp(&a.article.score))
            .then_with(|| a.article.id.cmp(&b.article.id))
    });

    PipelineOutput {
        clusters,
        articles: ranked,
    }
}
