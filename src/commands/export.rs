//! Export a section as JSON

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::content::sort_by_published;
use crate::Folio;

/// Serialize a section's records, newest first
///
/// Writes to `output` when given, otherwise to `out`.
pub fn run<W: Write>(
    folio: &Folio,
    section: &str,
    output: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let mut records = folio.entries(section)?;
    sort_by_published(&mut records);

    let json = serde_json::to_string_pretty(&records)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &json).with_context(|| format!("Failed to write {:?}", path))?;
            tracing::info!("Exported {} entries to {:?}", records.len(), path);
        }
        None => writeln!(out, "{}", json)?,
    }

    Ok(())
}
