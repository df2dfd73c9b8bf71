//! Undefined message key detection rule.
//!
//! Detects keys referenced in code (method calls or annotations) that no
//! properties file defines.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::{
    core::{AllSources, CheckContext, KeyReferenceMatcher, LineIndex, MessageCatalog},
    issues::UndefinedKeyIssue,
};

pub fn check_undefined_key_issues(ctx: &CheckContext) -> Vec<UndefinedKeyIssue> {
    find_undefined_key_issues(ctx.sources(), &ctx.key_matcher, &ctx.catalog)
}

/// One issue per reference. References found by more than one pattern at
/// the same position are reported once.
pub fn find_undefined_key_issues(
    sources: &AllSources,
    matcher: &KeyReferenceMatcher,
    catalog: &MessageCatalog,
) -> Vec<UndefinedKeyIssue> {
    let mut issues: Vec<UndefinedKeyIssue> = sources
        .par_iter()
        .flat_map_iter(|(file_path, text)| {
            let index = LineIndex::new(text);
            let mut seen = HashSet::new();
            matcher
                .find_references(text)
                .into_iter()
                .filter(|reference| !catalog.contains_key(reference.key))
                .filter(|reference| seen.insert(reference.range.clone()))
                .map(|reference| UndefinedKeyIssue {
                    context: index.context_at(file_path, text, reference.range.start),
                    key: reference.key.to_string(),
                })
                .collect::<Vec<_>>()
        })
        .collect();

    issues.sort_by(|a, b| a.context.location.cmp(&b.context.location));
    issues
}

/// Distinct undefined keys in first-seen order.
pub fn undefined_keys(issues: &[UndefinedKeyIssue]) -> Vec<&str> {
    let mut seen = HashSet::new();
    issues
        .iter()
        .map(|issue| issue.key.as_str())
        .filter(|key| seen.insert(*key))
        .collect()
}
