//! folio: the content layer of an MDX portfolio site
//!
//! This crate reads blog posts and work projects stored as MDX files with
//! YAML front matter, and formats their published dates for display.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;

pub use error::{Error, ErrorKind, Result};

use std::path::{Path, PathBuf};

/// Name of the site configuration file in the base directory
pub const CONFIG_FILE: &str = "folio.yml";

/// The main application handle
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
}

impl Folio {
    /// Create a new instance from a directory, reading `folio.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> anyhow::Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Directory of a named section, if configured
    pub fn section_dir(&self, name: &str) -> Option<PathBuf> {
        self.config
            .sections
            .get(name)
            .map(|segments| content::loader::join_segments(&self.base_dir, segments))
    }

    /// Configured section names, in config order
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.config.sections.keys().map(String::as_str)
    }

    /// Load all entries of a section
    pub fn entries(&self, section: &str) -> anyhow::Result<Vec<content::ContentRecord>> {
        content::ContentLoader::new(self).load_section(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config_file() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        assert_eq!(
            folio.section_dir("blog").unwrap(),
            tmp.path().join("src").join("app").join("blog").join("posts")
        );
        assert!(folio.section_dir("gallery").is_none());
    }

    #[test]
    fn test_reads_config_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "sections:\n  notes: [content, notes]\n",
        )
        .unwrap();

        let folio = Folio::new(tmp.path()).unwrap();
        assert_eq!(folio.section_names().collect::<Vec<_>>(), vec!["notes"]);
        assert_eq!(
            folio.section_dir("notes").unwrap(),
            tmp.path().join("content").join("notes")
        );
    }

    #[test]
    fn test_invalid_config_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "sections: [unclosed\n").unwrap();
        assert!(Folio::new(tmp.path()).is_err());
    }
}
