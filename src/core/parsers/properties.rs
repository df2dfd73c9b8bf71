use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::{Pattern, glob};

use crate::core::{MessageCatalog, MessageEntry, MessageLocation};

/// A properties file that matched a glob but could not be loaded.
#[derive(Debug, Clone)]
pub struct PropertiesScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanPropertiesResult {
    pub catalog: MessageCatalog,
    pub warnings: Vec<PropertiesScanWarning>,
}

/// Parse `key=value` lines.
///
/// Blank lines and `#` comments are skipped. The key is everything before the
/// first `=`, the value everything after it; both are trimmed. A line without
/// `=` defines its text as a key with an empty value.
pub fn parse_properties(content: &str, file_path: &str) -> Vec<MessageEntry> {
    content
        .split('\n')
        .enumerate()
        .filter_map(|(idx, line)| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            let (key, value) = line.split_once('=').unwrap_or((line, ""));
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some(MessageEntry::new(
                key,
                value.trim(),
                MessageLocation::new(file_path, idx + 1),
            ))
        })
        .collect()
}

pub fn parse_properties_file(path: &Path) -> Result<Vec<MessageEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read properties file: {}", path.display()))?;
    Ok(parse_properties(&content, &path.to_string_lossy()))
}

/// Expand `globs` under `root`, sorted and without duplicates.
///
/// Entries the glob walk cannot read are returned as warnings.
pub fn find_properties_files(
    root: &Path,
    globs: &[String],
) -> Result<(Vec<PathBuf>, Vec<PropertiesScanWarning>)> {
    let escaped_root = Pattern::escape(&root.to_string_lossy());
    let mut files = Vec::new();
    let mut warnings = Vec::new();

    for pattern in globs {
        let full = format!("{}/{}", escaped_root.trim_end_matches('/'), pattern);
        let entries =
            glob(&full).with_context(|| format!("Invalid properties glob: {}", pattern))?;
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => warnings.push(PropertiesScanWarning {
                    file_path: e.path().to_string_lossy().to_string(),
                    error: e.error().to_string(),
                }),
            }
        }
    }

    files.sort();
    files.dedup();
    Ok((files, warnings))
}

/// Load every properties file matched by `globs` into one catalog.
///
/// Files load in path order; the first definition of a key wins.
pub fn scan_properties_files(root: &Path, globs: &[String]) -> Result<ScanPropertiesResult> {
    let (files, warnings) = find_properties_files(root, globs)?;
    let mut result = ScanPropertiesResult {
        warnings,
        ..Default::default()
    };

    for path in files {
        match parse_properties_file(&path) {
            Ok(entries) => {
                result.catalog.add_file(path.to_string_lossy());
                result.catalog.extend(entries);
            }
            Err(e) => result.warnings.push(PropertiesScanWarning {
                file_path: path.to_string_lossy().to_string(),
                error: format!("{:#}", e),
            }),
        }
    }

    Ok(result)
}
