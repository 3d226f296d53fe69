//! Show a single entry

use anyhow::{anyhow, Result};
use std::io::Write;

use super::list::display_date;
use crate::content::find_by_slug;
use crate::Folio;

/// Print the metadata and body of one entry
pub fn run<W: Write>(folio: &Folio, section: &str, slug: &str, out: &mut W) -> Result<()> {
    let records = folio.entries(section)?;
    let record = find_by_slug(&records, slug)
        .ok_or_else(|| anyhow!("No entry '{}' in section '{}'", slug, section))?;
    let meta = &record.metadata;

    writeln!(out, "title:     {}", meta.title)?;
    writeln!(
        out,
        "published: {}",
        display_date(record, folio.config.date.include_relative)
    )?;
    writeln!(out, "summary:   {}", meta.summary)?;
    if !meta.tag.is_empty() {
        writeln!(out, "tag:       {}", meta.tag.values().join(", "))?;
    }
    if !meta.image.is_empty() {
        writeln!(out, "image:     {}", meta.image)?;
    }
    for image in &meta.images {
        writeln!(out, "images:    {}", image)?;
    }
    for member in &meta.team {
        writeln!(out, "team:      {} ({})", member.name, member.role)?;
    }
    for (key, value) in &meta.extra {
        let value = serde_yaml::to_string(value)?;
        writeln!(out, "{}: {}", key, value.trim_end())?;
    }

    writeln!(out)?;
    writeln!(out, "{}", record.content)?;

    Ok(())
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
            "sections:\n  work: [projects]\ndate:\n  include_relative: false\n",
        )
        .unwrap();
        let dir = tmp.path().join("projects");
        fs::create_dir(&dir).unwrap();
        fs::write(
            dir.join("Design-System.mdx"),
            r#"---
title: Design System
publishedAt: 2024-04-08
summary: Tokens and components
tag: Design
team:
  - name: Ada
    role: Engineer
link: https://example.com
---

## Overview
"#,
        )
        .unwrap();
        tmp
    }

    #[test]
    fn test_show_entry() {
        let tmp = site();
        let folio = Folio::new(tmp.path()).unwrap();
        let mut out = Vec::new();
        run(&folio, "work", "Design-System", &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("title:     Design System\n"));
        assert!(out.contains("published: April 8, 2024\n"));
        assert!(out.contains("tag:       Design\n"));
        assert!(out.contains("team:      Ada (Engineer)\n"));
        assert!(out.contains("link: "));
        assert!(out.contains("https://example.com"));
        assert!(out.ends_with("\n## Overview\n"));
    }

    #[test]
    fn test_show_unknown_slug() {
        let tmp = site();
        let folio = Folio::new(tmp.path()).unwrap();
        let mut out = Vec::new();
        let err = run(&folio, "work", "design-system", &mut out).unwrap_err();
        assert!(err.to_string().contains("No entry 'design-system'"));
    }
}
