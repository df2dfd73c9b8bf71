//! Message key references in source code.
//!
//! Unlike the placeholder scanner, this only needs the key literal: a method
//! call whose first argument is a quoted string, or an annotation regex whose
//! first capture group is the key.

use std::ops::Range;

use anyhow::{Context, Result};
use regex::Regex;

/// Always matched in addition to the configured method names.
pub const IMPLICIT_METHOD: &str = "messageSource.getMessage";

/// A key literal found in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyReference<'t> {
    pub key: &'t str,
    /// Byte range of `key` within the source text.
    pub range: Range<usize>,
}

#[derive(Debug, Clone)]
pub struct KeyReferenceMatcher {
    regexes: Vec<Regex>,
}

impl KeyReferenceMatcher {
    /// Build matchers for `method_names` (plus [`IMPLICIT_METHOD`]) followed by
    /// the raw `annotation_patterns`.
    pub fn new<S: AsRef<str>>(method_names: &[S], annotation_patterns: &[S]) -> Result<Self> {
        let mut regexes = Vec::with_capacity(method_names.len() + annotation_patterns.len() + 1);

        let methods = method_names
            .iter()
            .map(AsRef::as_ref)
            .chain(std::iter::once(IMPLICIT_METHOD))
            .filter(|name| !name.trim().is_empty());
        for name in methods {
            let pattern = format!(
                r#"(?:[\w$]+\.)?{}\(\s*['"]([^'"]+)['"]"#,
                regex::escape(name.trim())
            );
            let regex = Regex::new(&pattern)
                .with_context(|| format!("Invalid method pattern: {}", name))?;
            regexes.push(regex);
        }

        for pattern in annotation_patterns {
            let pattern = pattern.as_ref();
            let regex = Regex::new(pattern)
                .with_context(|| format!("Invalid annotation pattern: {}", pattern))?;
            regexes.push(regex);
        }

        Ok(Self { regexes })
    }

    /// All key references, pattern by pattern, each left to right.
    pub fn find_references<'t>(&self, text: &'t str) -> Vec<KeyReference<'t>> {
        self.regexes
            .iter()
            .flat_map(|regex| regex.captures_iter(text))
            .filter_map(|caps| {
                let group = caps.get(1)?;
                let raw = group.as_str();
                let key = raw.trim();
                if key.is_empty() {
                    return None;
                }
                let start = group.start() + (raw.len() - raw.trim_start().len());
                Some(KeyReference {
                    key,
                    range: start..start + key.len(),
                })
            })
            .collect()
    }

    /// The reference whose key range contains `offset` (end inclusive, so a
    /// cursor just after the key still counts).
    pub fn key_at<'t>(&self, text: &'t str, offset: usize) -> Option<KeyReference<'t>> {
        self.find_references(text)
            .into_iter()
            .find(|r| r.range.start <= offset && offset <= r.range.end)
    }
}
