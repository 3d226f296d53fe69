//! Content loader - reads MDX entries from a content directory

use anyhow::anyhow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentRecord, Metadata};
use crate::error::{Error, Result};
use crate::Folio;

/// Extension of content files, without the dot
pub const CONTENT_EXTENSION: &str = "mdx";

/// Read every `.mdx` file directly inside `dir`
///
/// Records come back in directory-listing order; nothing is sorted or
/// cached, so each call re-reads the filesystem.
pub fn list_entries<P: AsRef<Path>>(dir: P) -> Result<Vec<ContentRecord>> {
    list_entries_with_extension(dir, CONTENT_EXTENSION)
}

/// Same as [`list_entries`] for files ending in `.{extension}`
pub fn list_entries_with_extension<P: AsRef<Path>>(
    dir: P,
    extension: &str,
) -> Result<Vec<ContentRecord>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::NotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut records = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("filesystem loop"));
                return Err(Error::io(dir, source));
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !has_extension(path, extension) {
            tracing::debug!("Skipping {:?}", path);
            continue;
        }

        let slug = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => {
                tracing::warn!("Skipping {:?}: file name is not valid UTF-8", path);
                continue;
            }
        };

        tracing::debug!("Loading {:?} as {}", path, slug);
        records.push(read_entry(path, slug)?);
    }

    Ok(records)
}

/// Join path segments onto `base` and list the entries there
///
/// # Examples
/// ```ignore
/// let posts = get_posts(std::env::current_dir()?, &["src", "app", "blog", "posts"])?;
/// ```
pub fn get_posts<P, S>(base: P, segments: &[S]) -> Result<Vec<ContentRecord>>
where
    P: AsRef<Path>,
    S: AsRef<Path>,
{
    list_entries(join_segments(base, segments))
}

/// Build a directory path from a base and a list of segments
pub fn join_segments<P, S>(base: P, segments: &[S]) -> PathBuf
where
    P: AsRef<Path>,
    S: AsRef<Path>,
{
    segments
        .iter()
        .fold(base.as_ref().to_path_buf(), |dir, segment| dir.join(segment))
}

/// Read and parse a single content file
fn read_entry(path: &Path, slug: String) -> Result<ContentRecord> {
    let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let (metadata, body) =
        Metadata::parse(&raw).map_err(|reason| Error::MalformedFrontMatter {
            path: path.to_path_buf(),
            reason,
        })?;

    Ok(ContentRecord::new(slug, metadata, body))
}

/// Check whether a file carries the given extension
///
/// Dotfiles such as `.mdx` have no extension and never match.
fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == extension)
        .unwrap_or(false)
}

/// Loads the configured sections of a site
pub struct ContentLoader<'a> {
    folio: &'a Folio,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Load all entries of a named section such as `blog` or `work`
    pub fn load_section(&self, name: &str) -> anyhow::Result<Vec<ContentRecord>> {
        let dir = self.folio.section_dir(name).ok_or_else(|| {
            let available: Vec<&str> = self.folio.section_names().collect();
            anyhow!(
                "Unknown section: {}. Available: {}",
                name,
                available.join(", ")
            )
        })?;

        let records = list_entries_with_extension(&dir, &self.folio.config.content.extension)?;
        tracing::debug!("Loaded {} entries from {:?}", records.len(), dir);
        Ok(records)
    }
}
