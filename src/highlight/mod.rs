//! Entity detection over article display text.
//!
//! Produces the categorized, non-overlapping spans used for visual
//! highlighting and reference lookup, plus the text-feature counts the
//! objectivity scorer consumes.

pub mod dictionaries;
pub mod highlighter;
pub mod patterns;
pub mod types;

pub use highlighter::Highlighter;
pub use types::{EntityCategory, EntityMatch, FeatureCounts};

pub(crate) use crate::TARGET_HIGHLIGHT;

/// Reference domain the lookup query is scoped to.
pub const LOOKUP_DOMAIN: &str = "en.wikipedia.org";
