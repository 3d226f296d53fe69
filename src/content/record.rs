//! Content record model

use serde::{Deserialize, Serialize};

use super::Metadata;
use crate::helpers::parse_date;

/// A blog post or work project read from one content file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// File name without the content extension, case preserved
    pub slug: String,

    /// Front-matter fields
    pub metadata: Metadata,

    /// Raw MDX body, front matter removed
    pub content: String,
}

impl ContentRecord {
    pub fn new(slug: impl Into<String>, metadata: Metadata, content: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            metadata,
            content: content.into(),
        }
    }
}

/// Sort records newest first by `publishedAt`
///
/// Records whose date does not parse go last. The sort is stable, so equal
/// dates keep their listing order.
pub fn sort_by_published(records: &mut [ContentRecord]) {
    records.sort_by_cached_key(|record| {
        std::cmp::Reverse(parse_date(&record.metadata.published_at).ok())
    });
}

/// Find a record by exact slug
pub fn find_by_slug<'a>(records: &'a [ContentRecord], slug: &str) -> Option<&'a ContentRecord> {
    records.iter().find(|record| record.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(slug: &str, published_at: &str) -> ContentRecord {
        let metadata = Metadata {
            published_at: published_at.to_string(),
            ..Default::default()
        };
        ContentRecord::new(slug, metadata, "")
    }

    fn slugs(records: &[ContentRecord]) -> Vec<&str> {
        records.iter().map(|r| r.slug.as_str()).collect()
    }

    #[test]
    fn test_sort_newest_first() {
        let mut records = vec![
            record("old", "2023-05-01"),
            record("new", "2026-02-24"),
            record("mid", "2025-01-10T08:00:00"),
        ];
        sort_by_published(&mut records);
        assert_eq!(slugs(&records), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_invalid_dates_last_and_stable() {
        let mut records = vec![
            record("undated", ""),
            record("a", "2025-03-03"),
            record("garbage", "soon"),
            record("b", "2025-03-03"),
        ];
        sort_by_published(&mut records);
        assert_eq!(slugs(&records), vec!["a", "b", "undated", "garbage"]);
    }

    #[test]
    fn test_find_by_slug_is_case_sensitive() {
        let records = vec![record("Hello-World", "2025-01-01"), record("other", "")];
        assert!(find_by_slug(&records, "Hello-World").is_some());
        assert!(find_by_slug(&records, "hello-world").is_none());
    }
}
