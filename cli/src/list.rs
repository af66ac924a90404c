//! Recipe directory listing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cookscale_core::parse;
use glob::glob;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub stem: String,
    pub title: String,
}

/// Every `*.cook` file in `dir`, sorted by stem. Files that fail to read or
/// parse are logged and skipped.
pub fn list_recipes(dir: &Path) -> Result<Vec<RecipeSummary>> {
    let pattern = dir.join("*.cook");
    let pattern_str = pattern.to_string_lossy();

    let mut summaries = Vec::new();
    for entry in glob(&pattern_str).context("Invalid recipe directory pattern")? {
        let path = entry?;
        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable recipe");
                continue;
            }
        };

        match summarize(&stem, &text) {
            Ok(summary) => summaries.push(summary),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unparseable recipe");
            }
        }
    }

    summaries.sort_by(|a, b| a.stem.cmp(&b.stem));
    tracing::debug!(count = summaries.len(), dir = %dir.display(), "listed recipes");
    Ok(summaries)
}

fn summarize(stem: &str, text: &str) -> Result<RecipeSummary, cookscale_core::ParseError> {
    let recipe = parse(text)?;
    Ok(RecipeSummary {
        stem: stem.to_string(),
        title: recipe.title().unwrap_or(stem).to_string(),
    })
}
