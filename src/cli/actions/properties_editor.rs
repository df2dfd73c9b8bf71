use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// A `.properties` editor that inserts keys at their sorted position.
///
/// Existing lines are kept byte for byte; new lines use the file's own line
/// ending.
pub struct PropertiesEditor {
    file_path: PathBuf,
    content: String,
}

impl PropertiesEditor {
    /// Open a properties file for editing. A missing file starts empty.
    pub fn open(path: &Path) -> Result<Self> {
        let content = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?
        } else {
            String::new()
        };
        Ok(Self {
            file_path: path.to_path_buf(),
            content,
        })
    }

    /// Insert `key=value`. Returns false when the file already defines `key`.
    pub fn insert_key(&mut self, key: &str, value: &str) -> bool {
        match insert_property(&self.content, key, value) {
            Some(content) => {
                self.content = content;
                true
            }
            None => false,
        }
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&self.file_path, &self.content)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;
        Ok(())
    }

    #[cfg(test)]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Key defined on a line, if any. Mirrors the catalog parser.
fn defined_key(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let key = line.split_once('=').map_or(line, |(k, _)| k).trim();
    (!key.is_empty()).then_some(key)
}

/// Insert before the first defined key that sorts after `key`
/// (case-insensitive), else at the end.
///
/// Returns `None` when `key` is already defined.
pub fn insert_property(content: &str, key: &str, value: &str) -> Option<String> {
    let eol = if content.contains("\r\n") { "\r\n" } else { "\n" };
    let new_line = format!("{}={}", key, value);

    if content.is_empty() {
        return Some(format!("{}{}", new_line, eol));
    }

    let body = content.strip_suffix('\n').unwrap_or(content);
    let body = if body.len() < content.len() {
        body.strip_suffix('\r').unwrap_or(body)
    } else {
        body
    };
    let had_trailing_eol = body.len() < content.len();

    let mut lines: Vec<&str> = body
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let needle = key.to_lowercase();
    let mut insert_at = None;
    for (i, line) in lines.iter().enumerate() {
        let Some(existing) = defined_key(line) else {
            continue;
        };
        if existing == key {
            return None;
        }
        if insert_at.is_none() && existing.to_lowercase() > needle {
            insert_at = Some(i);
        }
    }

    match insert_at {
        Some(i) => lines.insert(i, &new_line),
        None => lines.push(&new_line),
    }

    let mut result = lines.join(eol);
    if had_trailing_eol || insert_at.is_none() {
        result.push_str(eol);
    }
    Some(result)
}
