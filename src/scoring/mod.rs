//! Objectivity scoring.
//!
//! A fixed rule table turns title, link, and summary text plus source
//! metadata into a 0-100 score with a labeled breakdown. Higher scores mean
//! writing closer to neutral factual reporting.

pub mod grade;
pub mod lexicon;
pub mod scorer;

pub use grade::ArticleGrade;
pub use scorer::{corroboration_bonus, ObjectivityScorer, ScoreReport, ScoringConfig};
