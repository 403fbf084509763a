use std::path::Path;

use anyhow::{Context, Result};

use crate::progress::{finish_spinner, stage_spinner};

/// Read the application file into memory as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    log::debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Read the application file behind a stage spinner.
pub fn read_source_with_progress(path: &Path) -> Result<String> {
    let pb = stage_spinner(&format!("Reading {}...", path.display()));
    let result = read_source(path);
    match &result {
        Ok(content) => finish_spinner(&pb, true, Some(&format!("{} bytes", content.len()))),
        Err(_) => finish_spinner(&pb, false, Some("unavailable")),
    }
    result
}
