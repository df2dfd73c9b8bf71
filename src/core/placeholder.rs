//! Placeholder extraction and numbering validation for message templates.
//!
//! A placeholder is `{n}` where `n` is one or more ASCII digits. A `{` preceded
//! by an odd run of backslashes is a literal brace escape, not a placeholder.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([0-9]+)\}").unwrap());

/// Distinct placeholder indices referenced by a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderSet {
    indices: BTreeSet<usize>,
}

impl PlaceholderSet {
    /// Collect every unescaped `{n}` in `template`.
    ///
    /// Indices whose count `n + 1` would not fit in a `usize` are ignored.
    pub fn parse(template: &str) -> Self {
        let bytes = template.as_bytes();
        let indices = PLACEHOLDER_REGEX
            .captures_iter(template)
            .filter(|caps| {
                let start = caps.get(0).map_or(0, |m| m.start());
                !is_escaped(bytes, start)
            })
            .filter_map(|caps| caps.get(1)?.as_str().parse::<usize>().ok())
            .filter(|&index| index < usize::MAX)
            .collect();
        Self { indices }
    }

    /// Indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// `max + 1`, or 0 when the template has no placeholders.
    pub fn expected_arg_count(&self) -> usize {
        self.indices
            .last()
            .map_or(0, |max| max.saturating_add(1))
    }

    /// True when the set is empty or exactly `{0, 1, ..., k}`.
    pub fn is_well_formed(&self) -> bool {
        self.indices
            .iter()
            .enumerate()
            .all(|(position, &index)| position == index)
    }

    /// Render the set as `{a}, {b}, ...` in ascending order.
    pub fn describe(&self) -> String {
        self.indices
            .iter()
            .map(|i| format!("{{{i}}}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// True when the character at `pos` follows an odd number of backslashes.
fn is_escaped(bytes: &[u8], pos: usize) -> bool {
    let backslashes = bytes[..pos]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    backslashes % 2 == 1
}
