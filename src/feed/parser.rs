//! Feed parsing logic for RSS, Atom, and JSON formats.

use anyhow::Result;
use feed_rs::parser;
use std::io::Cursor;
use tracing::{debug, error};

use super::types::{JsonFeed, RawEntry};
use super::util::cleanup_xml;
use crate::TARGET_FEED;

/// Parse already-fetched feed content into raw entries.
///
/// JSON content types are parsed as JSON Feed; everything else is tried as
/// RSS/Atom, once as-is and once more after XML cleanup. Entries missing both
/// a title and a link are dropped here rather than surfaced as errors.
pub fn parse_feed(text: &str, content_type: Option<&str>) -> Result<Vec<RawEntry>> {
    if let Some(ct) = content_type {
        if ct.contains("json") {
            debug!(target: TARGET_FEED, "Processing as JSON feed");
            return parse_json_feed(text);
        }
    }

    // Parse as XML (RSS/Atom)
    debug!(target: TARGET_FEED, "Processing as XML feed");
    let reader = Cursor::new(text);
    match parser::parse(reader) {
        Ok(feed) => Ok(collect_entries(feed)),
        Err(first_err) => {
            // Try cleaning the XML first
            let cleaned_xml = cleanup_xml(text);

            if cleaned_xml.contains("<rss") || cleaned_xml.contains("<feed") {
                let reader = Cursor::new(&cleaned_xml);
                match parser::parse(reader) {
                    Ok(feed) => {
                        debug!(target: TARGET_FEED, "Feed parsed successfully after XML cleanup");
                        Ok(collect_entries(feed))
                    }
                    Err(second_err) => {
                        error!(
                            target: TARGET_FEED,
                            "Failed to parse feed after cleanup. First error: {}. Second error: {}",
                            first_err,
                            second_err
                        );
                        Err(anyhow::anyhow!("XML parsing error even after cleanup"))
                    }
                }
            } else {
                let preview = if text
                    .chars()
                    .all(|c| c.is_ascii_graphic() || c.is_whitespace())
                {
                    text.chars().take(100).collect::<String>()
                } else {
                    "[binary data]".to_string()
                };
                error!(
                    target: TARGET_FEED,
                    "Content doesn't appear to be RSS or Atom. Preview: {}", preview
                );
                Err(anyhow::anyhow!("Content is not RSS or Atom feed"))
            }
        }
    }
}

fn parse_json_feed(text: &str) -> Result<Vec<RawEntry>> {
    match serde_json::from_str::<JsonFeed>(text) {
        Ok(feed) => {
            let entries = feed
                .items
                .into_iter()
                .filter_map(|item| {
                    let link = item.url.or(item.id);
                    if item.title.is_none() && link.is_none() {
                        return None;
                    }
                    let author = item.authors.into_iter().find_map(|a| a.name);
                    Some(RawEntry {
                        title: item.title,
                        link,
                        summary: item.summary,
                        author,
                        published: item.date_published,
                    })
                })
                .collect();
            Ok(entries)
        }
        Err(err) => {
            error!(target: TARGET_FEED, "Failed to parse JSON feed: {}", err);
            Err(anyhow::anyhow!("JSON parsing error: {}", err))
        }
    }
}

fn collect_entries(feed: feed_rs::model::Feed) -> Vec<RawEntry> {
    feed.entries
        .into_iter()
        .filter_map(|entry| {
            let title = entry
                .title
                .map(|t| t.content)
                .filter(|t| !t.trim().is_empty());
            let link = entry
                .links
                .first()
                .map(|link| link.href.clone())
                .filter(|l| !l.trim().is_empty());
            if title.is_none() && link.is_none() {
                return None;
            }
            let summary = entry
                .summary
                .map(|t| t.content)
                .or_else(|| entry.content.and_then(|c| c.body));
            let author = entry
                .authors
                .into_iter()
                .map(|p| p.name)
                .find(|n| !n.is_empty());
            let published = entry
                .published
                .or(entry.updated)
                .map(|d| d.to_rfc3339());
            Some(RawEntry {
                title,
                link,
                summary,
                author,
                published,
            })
        })
        .collect()
}
