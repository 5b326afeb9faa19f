//! Same-story clustering across sources.
//!
//! A greedy, single-pass partition of the candidate set: deterministic and
//! roughly linear, not globally optimal. The similarity function and the
//! processing order can change without touching the interface.

pub mod engine;
pub mod keywords;
pub mod types;

pub use engine::ClusterEngine;
pub use types::{Cluster, ClusterConfig};

/// Fallback topic label when member titles share no keyword.
pub const DEFAULT_TOPIC: &str = "General";
