use serde::Serialize;
use std::fmt;

use super::LOOKUP_DOMAIN;

/// Entity category enumeration. Declaration order is priority order for
/// overlap tie-breaking: dictionary categories first, then the people
/// detector, then the non-clickable pattern categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum EntityCategory {
    Titles,
    Government,
    Military,
    Organizations,
    Countries,
    Places,
    Events,
    People,
    ProperNouns,
    Money,
    Statistics,
    Dates,
    Numbers,
    Verbs,
}

impl EntityCategory {
    /// Lower value wins on exact-length overlap ties.
    pub fn priority(&self) -> u8 {
        *self as u8
    }

    /// Numeric and verb categories are highlighted but not linked out.
    pub fn is_clickable(&self) -> bool {
        !matches!(
            self,
            EntityCategory::Money
                | EntityCategory::Statistics
                | EntityCategory::Dates
                | EntityCategory::Numbers
                | EntityCategory::Verbs
        )
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityCategory::Titles => "titles",
            EntityCategory::Government => "government",
            EntityCategory::Military => "military",
            EntityCategory::Organizations => "organizations",
            EntityCategory::Countries => "countries",
            EntityCategory::Places => "places",
            EntityCategory::Events => "events",
            EntityCategory::People => "people",
            EntityCategory::ProperNouns => "proper_nouns",
            EntityCategory::Money => "money",
            EntityCategory::Statistics => "statistics",
            EntityCategory::Dates => "dates",
            EntityCategory::Numbers => "numbers",
            EntityCategory::Verbs => "verbs",
        };
        write!(f, "{}", name)
    }
}

/// A located, categorized span of display text.
///
/// `start`/`end` are byte offsets into the text the span was produced from.
/// A trailing possessive is part of the span but not the canonical form.
#[derive(Debug, Clone, Serialize)]
pub struct EntityMatch {
    pub start: usize,
    pub end: usize,
    pub category: EntityCategory,
    /// Matched text with any possessive suffix stripped; used for lookup.
    pub canonical: String,
    pub clickable: bool,
}

impl EntityMatch {
    pub fn new(start: usize, end: usize, category: EntityCategory, canonical: String) -> Self {
        EntityMatch {
            start,
            end,
            category,
            canonical,
            clickable: category.is_clickable(),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn overlaps(&self, other: &EntityMatch) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Reference-lookup query for clickable matches. Resolving the query to a
    /// final target page is the caller's concern.
    pub fn lookup_query(&self) -> Option<String> {
        if self.clickable {
            Some(format!("\"{}\" site:{}", self.canonical, LOOKUP_DOMAIN))
        } else {
            None
        }
    }
}

/// Presence counts for the journalistic signals the scorer rewards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeatureCounts {
    pub attribution: usize,
    pub quotes: usize,
    pub numbers: usize,
    pub dates: usize,
    pub hedging: usize,
}
