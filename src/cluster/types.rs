use serde::{Deserialize, Serialize};

/// Tunable similarity thresholds. Defaults are sane rather than canonical;
/// the test matrix exercises variations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Minimum title-token Jaccard overlap to join a cluster.
    pub title_threshold: f64,
    /// Minimum entity-token Jaccard overlap for the entity path.
    pub entity_threshold: f64,
    /// Maximum publish-time distance for the entity path, in hours.
    pub max_time_delta_hours: i64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        ClusterConfig {
            title_threshold: 0.3,
            entity_threshold: 0.5,
            max_time_delta_hours: 12,
        }
    }
}

/// A set of articles judged to report the same story, with one elected
/// representative for primary display.
#[derive(Debug, Clone, Serialize)]
pub struct Cluster {
    pub id: usize,
    /// Member article ids, in processing order. Always contains the
    /// representative.
    pub article_ids: Vec<String>,
    pub representative_id: String,
    /// Bonus from multi-source agreement; zero for singletons.
    pub corroboration_bonus: i32,
    pub topic: String,
}

impl Cluster {
    pub fn size(&self) -> usize {
        self.article_ids.len()
    }

    pub fn is_cluster(&self) -> bool {
        self.article_ids.len() > 1
    }

    pub fn contains(&self, article_id: &str) -> bool {
        self.article_ids.iter().any(|id| id == article_id)
    }
}
