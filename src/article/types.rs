use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::highlight::EntityMatch;

/// Political bias rating for a source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiasLabel {
    Left,
    LeftCenter,
    Center,
    RightCenter,
    Right,
    Unknown,
}

impl fmt::Display for BiasLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BiasLabel::Left => write!(f, "Left"),
            BiasLabel::LeftCenter => write!(f, "Left-Center"),
            BiasLabel::Center => write!(f, "Center"),
            BiasLabel::RightCenter => write!(f, "Right-Center"),
            BiasLabel::Right => write!(f, "Right"),
            BiasLabel::Unknown => write!(f, "Unknown"),
        }
    }
}

impl From<&str> for BiasLabel {
    fn from(s: &str) -> Self {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "left" => BiasLabel::Left,
            "left-center" | "lean-left" => BiasLabel::LeftCenter,
            "center" => BiasLabel::Center,
            "right-center" | "lean-right" => BiasLabel::RightCenter,
            "right" => BiasLabel::Right,
            _ => BiasLabel::Unknown,
        }
    }
}

/// Factual-reporting rating for a source. Contributes a fixed score modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactualLabel {
    VeryHigh,
    High,
    MostlyFactual,
    Mixed,
    Low,
    Unknown,
}

impl FactualLabel {
    /// Score modifier applied after all text-derived factors.
    pub fn score_modifier(&self) -> i32 {
        match self {
            FactualLabel::VeryHigh => 5,
            FactualLabel::High => 0,
            FactualLabel::MostlyFactual => -5,
            FactualLabel::Mixed => -10,
            FactualLabel::Low => -15,
            FactualLabel::Unknown => 0,
        }
    }
}

impl fmt::Display for FactualLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactualLabel::VeryHigh => write!(f, "Very High"),
            FactualLabel::High => write!(f, "High"),
            FactualLabel::MostlyFactual => write!(f, "Mostly Factual"),
            FactualLabel::Mixed => write!(f, "Mixed"),
            FactualLabel::Low => write!(f, "Low"),
            FactualLabel::Unknown => write!(f, "Unknown"),
        }
    }
}

impl From<&str> for FactualLabel {
    fn from(s: &str) -> Self {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "very-high" => FactualLabel::VeryHigh,
            "high" => FactualLabel::High,
            "mostly-factual" => FactualLabel::MostlyFactual,
            "mixed" => FactualLabel::Mixed,
            "low" | "very-low" => FactualLabel::Low,
            _ => FactualLabel::Unknown,
        }
    }
}

/// A news source and its metadata ratings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub name: String,
    #[serde(default = "default_bias")]
    pub bias: BiasLabel,
    #[serde(default = "default_factual")]
    pub factual: FactualLabel,
}

fn default_bias() -> BiasLabel {
    BiasLabel::Unknown
}

fn default_factual() -> FactualLabel {
    FactualLabel::Unknown
}

/// User-supplied scoring keyword. A negative weight is a deduction,
/// a positive weight a bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterKeyword {
    pub text: String,
    pub weight: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// One applied scoring factor, in evaluation order. Deltas are pre-clamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreFactor {
    pub factor: String,
    pub delta: i32,
}

impl ScoreFactor {
    pub fn new(factor: impl Into<String>, delta: i32) -> Self {
        ScoreFactor {
            factor: factor.into(),
            delta,
        }
    }
}

/// A normalized article. Identity is stable across runs: the id is a
/// digest prefix of the canonical link.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub id: String,
    pub source_id: String,
    pub title: String,
    pub link: String,
    pub summary: String,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    /// Assigned once per scoring pass.
    pub score: i32,
    pub breakdown: Vec<ScoreFactor>,
    /// Cached per article since the display text does not change.
    pub entities: Vec<EntityMatch>,
}

impl Article {
    /// Effective publish time for recency and ranking purposes.
    /// Unknown timestamps are treated as "now".
    pub fn effective_published(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.published_at.unwrap_or(now)
    }

    /// Title and summary joined, as shown to the reader.
    pub fn display_text(&self) -> String {
        if self.summary.is_empty() {
            self.title.clone()
        } else {
            format!("{}. {}", self.title, self.summary)
        }
    }
}
