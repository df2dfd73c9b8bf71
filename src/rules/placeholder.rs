//! Placeholder numbering and argument-count rule.
//!
//! Runs the validation engine over every source file in parallel and turns
//! byte-range diagnostics into located issues.

use colored::Colorize;
use rayon::prelude::*;

use crate::{
    core::{
        AllSources, CheckContext, LineIndex, MessageCatalog, PlaceholderValidator,
        diagnose_call_site,
    },
    issues::PlaceholderIssue,
};

pub fn check_placeholder_issues(ctx: &CheckContext) -> Vec<PlaceholderIssue> {
    find_placeholder_issues(ctx.sources(), &ctx.validator, &ctx.catalog, ctx.verbose)
}

/// Sorted by file path, then position.
pub fn find_placeholder_issues(
    sources: &AllSources,
    validator: &PlaceholderValidator,
    catalog: &MessageCatalog,
    verbose: bool,
) -> Vec<PlaceholderIssue> {
    if validator.patterns().is_empty() {
        return Vec::new();
    }

    let mut issues: Vec<PlaceholderIssue> = sources
        .par_iter()
        .flat_map_iter(|(file_path, text)| check_file(file_path, text, validator, catalog, verbose))
        .collect();

    issues.sort_by(|a, b| {
        a.context
            .location
            .cmp(&b.context.location)
            .then_with(|| a.kind.cmp(&b.kind))
    });
    issues
}

fn check_file(
    file_path: &str,
    text: &str,
    validator: &PlaceholderValidator,
    catalog: &MessageCatalog,
    verbose: bool,
) -> Vec<PlaceholderIssue> {
    let index = LineIndex::new(text);
    let mut issues = Vec::new();

    for call in validator.call_sites(text) {
        if verbose && !call.balanced {
            let (line, col) = index.line_col(text, call.start_offset);
            eprintln!(
                "{} {}:{}:{}: unbalanced parentheses in `{}` call",
                "warning:".bold().yellow(),
                file_path,
                line,
                col,
                call.matched_text.trim_end_matches('(').trim_end()
            );
        }

        let Some(entry) = catalog.get(call.key) else {
            continue;
        };

        for diagnostic in diagnose_call_site(&call, &entry.value) {
            issues.push(PlaceholderIssue {
                context: index.context_at(file_path, text, diagnostic.range.start),
                key: call.key.to_string(),
                template: entry.value.clone(),
                kind: diagnostic.kind,
                message: diagnostic.message,
            });
        }
    }

    issues
}
