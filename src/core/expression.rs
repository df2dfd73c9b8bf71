//! Structural classification of argument expressions.
//!
//! Arguments are classified once, by shape, right after tokenizing. Nothing
//! here knows the host language's grammar or types.

use std::sync::LazyLock;

use regex::Regex;

use super::tokenizer::{RawArgument, split_arguments};

/// `new <Type>[] {`: the opening of an array initializer.
static ARRAY_LITERAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"new\s+[A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*)*\s*\[\s*\]\s*\{").unwrap()
});

/// `.name(`: a member call.
static MEMBER_CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s*([A-Za-z_$][\w$]*)\s*\(").unwrap());

/// Shape of one argument expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentKind<'a> {
    /// `"..."` or `'...'`.
    StringLiteral,
    /// `new T[] { ... }`, with its classified elements.
    ArrayLiteral { elements: Vec<ArgumentExpression<'a>> },
    /// An expression whose last member call is `.name(...)`.
    ChainedCall { name: &'a str, is_join: bool },
    /// A bare identifier such as `e` or `$value`.
    Identifier,
    Other,
}

/// A trimmed top-level argument together with its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentExpression<'a> {
    pub text: &'a str,
    /// Byte offset of `text` within the text it was split from.
    pub offset: usize,
    pub kind: ArgumentKind<'a>,
}

impl<'a> ArgumentExpression<'a> {
    pub fn classify(raw: RawArgument<'a>) -> Self {
        Self {
            text: raw.text,
            offset: raw.offset,
            kind: classify_text(raw.text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self.kind, ArgumentKind::Identifier)
    }

    pub fn is_array_literal(&self) -> bool {
        matches!(self.kind, ArgumentKind::ArrayLiteral { .. })
    }

    /// True for chained calls ending in `.join(...)`.
    pub fn is_join_call(&self) -> bool {
        matches!(self.kind, ArgumentKind::ChainedCall { is_join: true, .. })
    }
}

/// Tokenize and classify an argument list in one pass.
pub fn parse_arguments(input: &str) -> Vec<ArgumentExpression<'_>> {
    split_arguments(input)
        .into_iter()
        .map(ArgumentExpression::classify)
        .collect()
}

fn classify_text(text: &str) -> ArgumentKind<'_> {
    if is_string_literal(text) {
        return ArgumentKind::StringLiteral;
    }

    if let Some(m) = ARRAY_LITERAL_REGEX.find(text) {
        let elements_text = initializer_body(&text[m.end()..]);
        return ArgumentKind::ArrayLiteral {
            elements: parse_arguments(elements_text),
        };
    }

    if let Some(name) = last_top_level_member_call(text) {
        return ArgumentKind::ChainedCall {
            name,
            is_join: name == "join",
        };
    }

    if is_identifier(text) {
        return ArgumentKind::Identifier;
    }

    ArgumentKind::Other
}

fn is_string_literal(text: &str) -> bool {
    text.len() >= 2
        && ((text.starts_with('"') && text.ends_with('"'))
            || (text.starts_with('\'') && text.ends_with('\'')))
}

/// Matches `^[A-Za-z_$][A-Za-z0-9_$]*$`.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Name of the last `.name(` outside any brackets or quotes, so calls nested
/// in an argument list do not hide the outer one.
fn last_top_level_member_call(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut prev: Option<char> = None;
    let mut last = None;

    for (i, ch) in text.char_indices() {
        if let Some(q) = quote {
            if ch == q && prev != Some('\\') {
                quote = None;
            }
        } else {
            match ch {
                '"' | '\'' => quote = Some(ch),
                '(' | '[' | '{' => depth += 1,
                ')' | ']' | '}' => depth = depth.saturating_sub(1),
                '.' if depth == 0 => {
                    if let Some(caps) = MEMBER_CALL_REGEX.captures_at(text, i)
                        && caps.get(0).is_some_and(|m| m.start() == i)
                    {
                        last = caps.get(1).map(|name| name.as_str());
                    }
                }
                _ => {}
            }
        }
        prev = Some(ch);
    }

    last
}

/// Body of an initializer whose `{` has just been consumed, up to the
/// matching `}` (or end of input when it never closes).
fn initializer_body(rest: &str) -> &str {
    let mut depth = 1usize;
    let mut quote: Option<char> = None;
    let mut prev: Option<char> = None;

    for (i, ch) in rest.char_indices() {
        if let Some(q) = quote {
            if ch == q && prev != Some('\\') {
                quote = None;
            }
        } else {
            match ch {
                '"' | '\'' => quote = Some(ch),
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return &rest[..i];
                    }
                }
                _ => {}
            }
        }
        prev = Some(ch);
    }

    rest
}
