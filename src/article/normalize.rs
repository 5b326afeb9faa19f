//! Turns raw feed entries into canonical [`Article`] records.

use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};
use unicode_normalization::UnicodeNormalization;

use super::types::{Article, Source};
use crate::feed::types::RawEntry;
use crate::feed::util::parse_date;

/// Summaries longer than this are truncated with an ellipsis.
const MAX_SUMMARY_CHARS: usize = 1000;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NUMERIC_ENTITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&#(\d+);").unwrap());

/// Normalize a raw feed entry into an [`Article`], or reject it.
///
/// Rejection (returning `None`) happens only when both title and link are
/// empty after cleaning. Malformed timestamps degrade to unknown rather than
/// failing the entry.
pub fn normalize_entry(entry: &RawEntry, source: &Source) -> Option<Article> {
    let title = clean_text(entry.title.as_deref().unwrap_or(""));
    let link = entry.link.as_deref().unwrap_or("").trim().to_string();

    if title.is_empty() && link.is_empty() {
        return None;
    }

    let mut summary = clean_text(entry.summary.as_deref().unwrap_or(""));
    if summary.chars().count() > MAX_SUMMARY_CHARS {
        summary = summary.chars().take(MAX_SUMMARY_CHARS).collect::<String>() + "...";
    }

    let author = entry
        .author
        .as_deref()
        .map(clean_text)
        .filter(|a| !a.is_empty());

    let published_at = entry.published.as_deref().and_then(parse_date);

    Some(Article {
        id: article_id(&link, &title),
        source_id: source.id.clone(),
        title,
        link,
        summary,
        author,
        published_at,
        score: 0,
        breakdown: Vec::new(),
        entities: Vec::new(),
    })
}

/// Stable identity: digest prefix of the canonical link, falling back to the
/// title when an entry has no link.
fn article_id(link: &str, title: &str) -> String {
    let canonical = if link.is_empty() {
        title.to_string()
    } else {
        match url::Url::parse(link) {
            Ok(parsed) => parsed.to_string(),
            Err(_) => link.to_string(),
        }
    };
    let digest = Sha256::digest(canonical.as_bytes());
    digest
        .iter()
        .take(8)
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Strip markup and entities, collapse whitespace, drop control characters.
fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let decoded = decode_entities(text);
    let stripped = TAG_RE.replace_all(&decoded, " ");
    let no_controls: String = stripped
        .nfc()
        .collect::<String>()
        .chars()
        .filter(|c| !c.is_control())
        .collect();
    WHITESPACE_RE
        .replace_all(&no_controls, " ")
        .trim()
        .to_string()
}

/// Decode the entities that actually show up in feed summaries.
fn decode_entities(text: &str) -> String {
    let named = text
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
        .replace("&ndash;", "\u{2013}")
        .replace("&mdash;", "\u{2014}")
        .replace("&rsquo;", "\u{2019}")
        .replace("&lsquo;", "\u{2018}")
        .replace("&rdquo;", "\u{201d}")
        .replace("&ldquo;", "\u{201c}")
        .replace("&hellip;", "\u{2026}");

    NUMERIC_ENTITY_RE
        .replace_all(&named, |caps: &regex::Captures| {
            caps[1]
                .parse::<u32>()
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_default()
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::types::{BiasLabel, FactualLabel};

    fn source() -> Source {
        Source {
            id: "ap".to_string(),
            name: "Associated Press".to_string(),
            bias: BiasLabel::Center,
            factual: FactualLabel::VeryHigh,
        }
    }

    fn entry(title: &str, link: &str, summary: &str) -> RawEntry {
        RawEntry {
            title: Some(title.to_string()),
            link: Some(link.to_string()),
            summary: Some(summary.to_string()),
            author: None,
            published: None,
        }
    }

    #[test]
    fn test_strips_markup_and_collapses_whitespace() {
        let raw = entry(
            "Senate   passes <b>bill</b>",
            "https://example.com/a",
            "<p>The Senate\n\n approved &amp; sent it on.</p>",
        );
        let article = normalize_entry(&raw, &source()).unwrap();
        assert_eq!(article.title, "Senate passes bill");
        assert_eq!(article.summary, "The Senate approved & sent it on.");
    }

    #[test]
    fn test_rejects_empty_title_and_link() {
        let raw = entry("", "", "some text");
        assert!(normalize_entry(&raw, &source()).is_none());
    }

    #[test]
    fn test_title_only_entry_is_kept() {
        let raw = entry("Headline without link", "", "");
        let article = normalize_entry(&raw, &source()).unwrap();
        assert!(!article.id.is_empty());
    }

    #[test]
    fn test_malformed_timestamp_is_unknown() {
        let mut raw = entry("Title", "https://example.com/b", "");
        raw.published = Some("whenever".to_string());
        let article = normalize_entry(&raw, &source()).unwrap();
        assert!(article.published_at.is_none());
    }

    #[test]
    fn test_long_summary_truncated() {
        let long = "word ".repeat(400);
        let raw = entry("Title", "https://example.com/c", &long);
        let article = normalize_entry(&raw, &source()).unwrap();
        assert!(article.summary.chars().count() <= 1003);
        assert!(article.summary.ends_with("..."));
    }

    #[test]
    fn test_id_is_stable_across_runs() {
        let raw = entry("Title", "https://example.com/story", "");
        let a = normalize_entry(&raw, &source()).unwrap();
        let b = normalize_entry(&raw, &source()).unwrap();
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn test_numeric_entities_decoded() {
        let raw = entry("It&#8217;s done", "https://example.com/d", "");
        let article = normalize_entry(&raw, &source()).unwrap();
        assert_eq!(article.title, "It\u{2019}s done");
    }
}
