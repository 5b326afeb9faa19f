//! Type definitions for the feed module.

use serde::{Deserialize, Serialize};

/// A single feed entry as parsed, before normalization.
#[derive(Debug, Clone, Serialize)]
pub struct RawEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub author: Option<String>,
    /// Publish timestamp as text, any format the feed provided.
    pub published: Option<String>,
}

/// JSON feed structure for parsing
#[derive(Debug, Deserialize)]
pub struct JsonFeed {
    #[serde(default)]
    pub items: Vec<JsonFeedItem>,
}

/// JSON feed item structure
#[derive(Debug, Deserialize)]
pub struct JsonFeedItem {
    pub id: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub date_published: Option<String>,
    #[serde(default)]
    pub authors: Vec<JsonFeedAuthor>,
}

#[derive(Debug, Deserialize)]
pub struct JsonFeedAuthor {
    pub name: Option<String>,
}
