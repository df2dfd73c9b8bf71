//! Invocation scanner.
//!
//! Finds call sites of the configured method names in a source text and splits
//! each into its message key and the remaining substitution arguments.

use std::ops::Range;

use regex::Regex;

use super::{
    expression::{ArgumentExpression, parse_arguments},
    extract::extract_argument_list,
};

/// A configured method name compiled into a `<name>\s*(` matcher.
#[derive(Debug, Clone)]
pub struct InvocationPattern {
    name: String,
    regex: Regex,
}

impl InvocationPattern {
    /// Compile `name`. Returns `None` for blank names.
    pub fn new(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let regex = Regex::new(&format!(r"{}\s*\(", regex::escape(name))).ok()?;
        Some(Self {
            name: name.to_string(),
            regex,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All non-overlapping matches in `text`, left to right.
    pub fn find_calls<'t>(&self, text: &'t str) -> impl Iterator<Item = InvocationMatch<'t>> {
        self.regex.find_iter(text).map(|m| InvocationMatch {
            matched_text: m.as_str(),
            start: m.start(),
            // every match ends in `(`
            open_paren: m.end() - 1,
        })
    }
}

/// Compile a list of method names, skipping blank ones.
pub fn compile_patterns<S: AsRef<str>>(names: &[S]) -> Vec<InvocationPattern> {
    names
        .iter()
        .filter_map(|name| InvocationPattern::new(name.as_ref()))
        .collect()
}

/// One raw match of an invocation pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvocationMatch<'t> {
    pub matched_text: &'t str,
    pub start: usize,
    pub open_paren: usize,
}

/// A located call that carries a message key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite<'t> {
    pub matched_text: &'t str,
    pub start_offset: usize,
    /// Key with surrounding double quotes removed.
    pub key: &'t str,
    /// Byte range of `key` within the source text.
    pub key_range: Range<usize>,
    pub argument_list_text: &'t str,
    pub argument_list_offset: usize,
    /// False when the call's parentheses never closed.
    pub balanced: bool,
    /// Substitution arguments, the key excluded.
    pub arguments: Vec<ArgumentExpression<'t>>,
}

impl<'t> CallSite<'t> {
    fn from_match(text: &'t str, m: InvocationMatch<'t>) -> Option<Self> {
        let list = extract_argument_list(text, m.open_paren);
        let mut arguments = parse_arguments(list.text);
        if arguments.is_empty() {
            return None;
        }

        let first = arguments.remove(0);
        let (key, key_start) = strip_quotes(first.text);
        let key_start = list.offset + first.offset + key_start;

        Some(Self {
            matched_text: m.matched_text,
            start_offset: m.start,
            key,
            key_range: key_start..key_start + key.len(),
            argument_list_text: list.text,
            argument_list_offset: list.offset,
            balanced: list.balanced,
            arguments,
        })
    }
}

/// Remove one leading and one trailing `"`, returning the key and how many
/// bytes were skipped at the front.
fn strip_quotes(text: &str) -> (&str, usize) {
    let (rest, skipped) = match text.strip_prefix('"') {
        Some(rest) => (rest, 1),
        None => (text, 0),
    };
    (rest.strip_suffix('"').unwrap_or(rest), skipped)
}

/// Every call site of every pattern, pattern by pattern in the given order.
///
/// Calls with an empty argument list carry no key and are skipped.
pub fn scan_call_sites<'t>(text: &'t str, patterns: &[InvocationPattern]) -> Vec<CallSite<'t>> {
    patterns
        .iter()
        .flat_map(|pattern| pattern.find_calls(text))
        .filter_map(|m| CallSite::from_match(text, m))
        .collect()
}
