//! Argument tokenizer.
//!
//! Splits an argument-list string into its top-level argument expressions.
//! A comma splits only when parenthesis, brace and bracket depth are all zero
//! and the scanner is outside a quoted literal.

/// One trimmed top-level argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawArgument<'a> {
    /// Argument source text, trimmed.
    pub text: &'a str,
    /// Byte offset of `text` within the input that was split.
    pub offset: usize,
}

impl RawArgument<'_> {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset just past the argument text.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Split `input` at top-level commas.
///
/// Quoted literals (`"` or `'`) close only on a matching quote not preceded by
/// a backslash; an unterminated literal runs to end of input. Empty pieces
/// between commas are kept, but a blank trailing piece is dropped, so an empty
/// argument list yields no arguments.
pub fn split_arguments(input: &str) -> Vec<RawArgument<'_>> {
    let mut result = Vec::new();
    let mut piece_start = 0;
    let mut quote: Option<char> = None;
    let mut prev: Option<char> = None;
    let mut paren_depth = 0i32;
    let mut brace_depth = 0i32;
    let mut bracket_depth = 0i32;

    for (i, ch) in input.char_indices() {
        if let Some(q) = quote {
            if ch == q && prev != Some('\\') {
                quote = None;
            }
            prev = Some(ch);
            continue;
        }

        match ch {
            '"' | '\'' => quote = Some(ch),
            '(' => paren_depth += 1,
            ')' => paren_depth -= 1,
            '{' => brace_depth += 1,
            '}' => brace_depth -= 1,
            '[' => bracket_depth += 1,
            ']' => bracket_depth -= 1,
            ',' if paren_depth == 0 && brace_depth == 0 && bracket_depth == 0 => {
                result.push(trimmed(input, piece_start, i));
                piece_start = i + 1;
            }
            _ => {}
        }
        prev = Some(ch);
    }

    let tail = trimmed(input, piece_start, input.len());
    if !tail.is_empty() {
        result.push(tail);
    }

    result
}

fn trimmed(input: &str, start: usize, end: usize) -> RawArgument<'_> {
    let piece = &input[start..end];
    let leading = piece.len() - piece.trim_start().len();
    RawArgument {
        text: piece.trim(),
        offset: start + leading,
    }
}
