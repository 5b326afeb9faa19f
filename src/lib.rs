pub mod article;
pub mod cluster;
pub mod feed;
pub mod highlight;
pub mod logging;
pub mod pipeline;
pub mod reduce;
pub mod scoring;

pub const TARGET_FEED: &str = "feed_parse";
pub const TARGET_SCORING: &str = "scoring";
pub const TARGET_CLUSTER: &str = "clustering";
pub const TARGET_HIGHLIGHT: &str = "highlighting";

pub use article::types::{Article, BiasLabel, FactualLabel, FilterKeyword, Source};
pub use cluster::{Cluster, ClusterConfig};
pub use highlight::{EntityCategory, EntityMatch, Highlighter};
pub use pipeline::{Pipeline, PipelineOutput, PipelineParams};
pub use reduce::{RecencyWindow, SourceCap};
pub use scoring::{ObjectivityScorer, ScoreReport};
