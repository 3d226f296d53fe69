//! Site configuration (folio.yml)

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::loader::CONTENT_EXTENSION;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site, shown in the `sections` overview
    pub title: String,
    pub base_url: String,

    // Content
    #[serde(default)]
    pub content: ContentConfig,

    /// Section name to directory, as path segments under the site root
    pub sections: IndexMap<String, Vec<String>>,

    // Date / Time format
    #[serde(default)]
    pub date: DateConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let mut sections = IndexMap::new();
        sections.insert("blog".to_string(), segments(&["src", "app", "blog", "posts"]));
        sections.insert(
            "work".to_string(),
            segments(&["src", "app", "work", "projects"]),
        );

        Self {
            title: "Portfolio".to_string(),
            base_url: "http://localhost:3000".to_string(),
            content: ContentConfig::default(),
            sections,
            date: DateConfig::default(),
        }
    }
}

fn segments(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }
}

/// Content file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Extension of content files, without the dot
    pub extension: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            extension: CONTENT_EXTENSION.to_string(),
        }
    }
}

/// Date display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    /// Append "(4d ago)"-style suffixes in listings
    pub include_relative: bool,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            include_relative: true,
        }
    }
}
