//! Show configured sections

use anyhow::Result;
use std::io::Write;

use crate::Folio;

/// Print the site header, then each section with its directory and entry count
///
/// A section that fails to load shows the error in place of its count.
pub fn run<W: Write>(folio: &Folio, out: &mut W) -> Result<()> {
    writeln!(out, "{} <{}>", folio.config.title, folio.config.base_url)?;
    writeln!(out, "Sections ({}):", folio.config.sections.len())?;
    for name in folio.section_names() {
        let dir = match folio.section_dir(name) {
            Some(dir) => dir,
            None => continue,
        };
        let status = if !dir.is_dir() {
            "missing".to_string()
        } else {
            match folio.entries(name) {
                Ok(records) => format!("{} entries", records.len()),
                Err(e) => {
                    tracing::warn!("Section {}: {:#}", name, e);
                    format!("error: {}", e)
                }
            }
        };
        writeln!(out, "  {} {:?} ({})", name, dir, status)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_sections() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("src/app/blog/posts");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("one.mdx"), "Body only").unwrap();

        let folio = Folio::new(tmp.path()).unwrap();
        let mut out = Vec::new();
        run(&folio, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Portfolio <http://localhost:3000>");
        assert_eq!(lines[1], "Sections (2):");
        assert!(lines[2].starts_with("  blog "));
        assert!(lines[2].ends_with("(1 entries)"));
        assert!(lines[3].starts_with("  work "));
        assert!(lines[3].ends_with("(missing)"));
    }

    #[test]
    fn test_sections_report_load_errors_inline() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("folio.yml"),
            "title: Selene Yu\nbase_url: https://selene.dev\nsections:\n  blog: [posts]\n  work: [projects]\n",
        )
        .unwrap();
        let posts = tmp.path().join("posts");
        let projects = tmp.path().join("projects");
        fs::create_dir(&posts).unwrap();
        fs::create_dir(&projects).unwrap();
        fs::write(posts.join("broken.mdx"), "---\ntitle: never closed\n").unwrap();
        fs::write(projects.join("ok.mdx"), "---\ntitle: Fine\n---\nBody").unwrap();

        let folio = Folio::new(tmp.path()).unwrap();
        let mut out = Vec::new();
        run(&folio, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Selene Yu <https://selene.dev>");
        assert!(lines[2].starts_with("  blog "));
        assert!(lines[2].contains("(error: malformed front-matter"));
        assert!(lines[2].contains("broken.mdx"));
        assert!(lines[3].ends_with("(1 entries)"));
    }
}
