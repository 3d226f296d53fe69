//! List the entries of a section

use anyhow::Result;
use std::io::Write;

use crate::content::{sort_by_published, ContentRecord};
use crate::helpers::format_date;
use crate::Folio;

/// List a section's entries, newest first
pub fn run<W: Write>(folio: &Folio, section: &str, out: &mut W) -> Result<()> {
    let mut records = folio.entries(section)?;
    sort_by_published(&mut records);

    writeln!(out, "{} ({}):", section, records.len())?;
    for record in &records {
        writeln!(
            out,
            "  {} - {} [{}]",
            display_date(record, folio.config.date.include_relative),
            record.metadata.title,
            record.slug
        )?;
    }

    Ok(())
}

/// Formatted published date, or a placeholder when it does not parse
pub(crate) fn display_date(record: &ContentRecord, include_relative: bool) -> String {
    match format_date(&record.metadata.published_at, include_relative) {
        Ok(date) => date,
        Err(e) => {
            tracing::warn!("{}: {}", record.slug, e);
            "undated".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("folio.yml"),
            "sections:\n  blog: [posts]\ndate:\n  include_relative: false\n",
        )
        .unwrap();
        let posts = tmp.path().join("posts");
        fs::create_dir(&posts).unwrap();
        fs::write(
            posts.join("older.mdx"),
            "---\ntitle: Older\npublishedAt: 2025-03-01\n---\nBody",
        )
        .unwrap();
        fs::write(
            posts.join("newer.mdx"),
            "---\ntitle: Newer\npublishedAt: 2026-01-05\n---\nBody",
        )
        .unwrap();
        fs::write(posts.join("draft.mdx"), "---\ntitle: Draft\n---\nBody").unwrap();
        tmp
    }

    #[test]
    fn test_list_sorted_newest_first() {
        let tmp = site();
        let folio = Folio::new(tmp.path()).unwrap();
        let mut out = Vec::new();
        run(&folio, "blog", &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "blog (3):\n  January 5, 2026 - Newer [newer]\n  March 1, 2025 - Older [older]\n  undated - Draft [draft]\n"
        );
    }

    #[test]
    fn test_list_missing_section_dir() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        let mut out = Vec::new();
        let err = run(&folio, "blog", &mut out).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
