//! Placeholder-argument validation.
//!
//! Ties the scanner, tokenizer, placeholder extractor and heuristic engine
//! together. A pass is a pure function of the source text, the configured
//! method names and the template lookup.

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
    ops::Range,
};

use crate::issues::Severity;

use super::{
    heuristic::count_supplied_arguments,
    placeholder::PlaceholderSet,
    scanner::{CallSite, InvocationPattern, compile_patterns, scan_call_sites},
};

/// Read-only access to message templates by key.
pub trait TemplateLookup {
    fn template(&self, key: &str) -> Option<&str>;
}

impl<S: BuildHasher> TemplateLookup for HashMap<String, String, S> {
    fn template(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl TemplateLookup for BTreeMap<String, String> {
    fn template(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<T: TemplateLookup + ?Sized> TemplateLookup for &T {
    fn template(&self, key: &str) -> Option<&str> {
        (**self).template(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    PlaceholderNumberingInvalid,
    PlaceholderCountMismatch,
}

/// A problem found at one call site, anchored at the key literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Byte range of the key within the source text.
    pub range: Range<usize>,
    pub message: String,
    pub severity: Severity,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    fn numbering(range: Range<usize>, placeholders: &PlaceholderSet) -> Self {
        Self {
            range,
            message: format!(
                "Placeholder numbering must start at {{0}} and be contiguous (found {}).",
                placeholders.describe()
            ),
            severity: Severity::Error,
            kind: DiagnosticKind::PlaceholderNumberingInvalid,
        }
    }

    fn count_mismatch(range: Range<usize>, expected: usize, actual: usize) -> Self {
        Self {
            range,
            message: format!(
                "Placeholder count ({expected}) doesn't match provided argument count ({actual})."
            ),
            severity: Severity::Error,
            kind: DiagnosticKind::PlaceholderCountMismatch,
        }
    }
}

/// Compiled method patterns, reusable across documents.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderValidator {
    patterns: Vec<InvocationPattern>,
}

impl PlaceholderValidator {
    pub fn new<S: AsRef<str>>(method_names: &[S]) -> Self {
        Self {
            patterns: compile_patterns(method_names),
        }
    }

    pub fn patterns(&self) -> &[InvocationPattern] {
        &self.patterns
    }

    pub fn call_sites<'t>(&self, source: &'t str) -> Vec<CallSite<'t>> {
        scan_call_sites(source, &self.patterns)
    }

    /// Validate every call site in `source`.
    pub fn validate(&self, source: &str, lookup: &impl TemplateLookup) -> Vec<Diagnostic> {
        self.call_sites(source)
            .iter()
            .filter_map(|call| {
                let template = lookup.template(call.key)?;
                Some(diagnose_call_site(call, template))
            })
            .flatten()
            .collect()
    }
}

/// Compare one call site against its template.
///
/// Numbering comes before the count check; either, both or neither may fire.
pub fn diagnose_call_site(call: &CallSite<'_>, template: &str) -> Vec<Diagnostic> {
    let placeholders = PlaceholderSet::parse(template);
    let expected = placeholders.expected_arg_count();
    let actual = count_supplied_arguments(expected, &call.arguments);

    let mut diagnostics = Vec::new();
    if !placeholders.is_well_formed() {
        diagnostics.push(Diagnostic::numbering(call.key_range.clone(), &placeholders));
    }
    if is_count_mismatch(expected, actual) {
        diagnostics.push(Diagnostic::count_mismatch(
            call.key_range.clone(),
            expected,
            actual,
        ));
    }
    diagnostics
}

fn is_count_mismatch(expected: usize, actual: usize) -> bool {
    if expected == 0 {
        actual > 0
    } else {
        actual != expected
    }
}

/// One-shot validation without keeping the compiled patterns around.
pub fn validate_placeholders<S: AsRef<str>>(
    source: &str,
    method_names: &[S],
    lookup: &impl TemplateLookup,
) -> Vec<Diagnostic> {
    PlaceholderValidator::new(method_names).validate(source, lookup)
}
