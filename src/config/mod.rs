use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::categorize::KeywordTable;
use crate::models::Category;

const KEYWORD_FILE_NAME: &str = "keywords.csv";

/// Extend `base` with the `category,keyword` rows in a CSV file.
///
/// A header row is allowed, as are `#` comment lines. Category names are
/// matched case-insensitively, and an unknown name is an error rather than a
/// silent fallback to `Other`.
pub fn load_keyword_file(path: &Path, base: KeywordTable) -> Result<KeywordTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open keyword file: {}", path.display()))?;

    let mut table = base;
    let mut added = 0usize;
    for (idx, result) in rdr.records().enumerate() {
        let record = result.context("Failed to read keyword record")?;
        let line = record.position().map(|p| p.line()).unwrap_or(idx as u64 + 1);

        let category_name = record.get(0).unwrap_or("");
        let keyword = record.get(1).unwrap_or("");

        if idx == 0 && is_header(category_name, keyword) {
            continue;
        }
        if category_name.is_empty() && keyword.is_empty() {
            continue;
        }
        if keyword.is_empty() {
            warn!(line, category = category_name, "keyword row has no keyword, skipping");
            continue;
        }

        let category = Category::from_name(category_name).ok_or_else(|| {
            anyhow::anyhow!(
                "{}:{line}: unknown category '{category_name}'",
                path.display()
            )
        })?;
        if category.is_catch_all() {
            warn!(line, keyword, "keywords for Other are ignored");
            continue;
        }

        table = table.with_keywords(category, [keyword]);
        added += 1;
    }

    debug!(path = %path.display(), added, "loaded keyword file");
    Ok(table)
}

fn is_header(first: &str, second: &str) -> bool {
    first.eq_ignore_ascii_case("category") && second.eq_ignore_ascii_case("keyword")
}

/// `<config dir>/keywords.csv`, if the platform has a config directory.
pub fn default_keyword_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "quickspend", "QuickSpend")
        .map(|dirs| dirs.config_dir().join(KEYWORD_FILE_NAME))
}

/// Build the keyword table used for the lifetime of the process.
///
/// An explicit path must exist. Without one, the default keyword file is
/// used when present, and the built-in table otherwise.
pub fn load_keywords(explicit: Option<&Path>) -> Result<KeywordTable> {
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("Keyword file not found: {}", path.display());
        }
        return load_keyword_file(path, KeywordTable::default());
    }

    match default_keyword_path() {
        Some(path) if path.exists() => load_keyword_file(&path, KeywordTable::default()),
        _ => Ok(KeywordTable::default()),
    }
}

#[cfg(test)]
mod tests;
