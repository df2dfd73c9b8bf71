//! Balanced argument-list extraction.
//!
//! Given the offset of a call's opening parenthesis, find the matching close
//! parenthesis by depth counting and return the text in between. String
//! literals are not interpreted here; parentheses inside them still count.

/// The raw argument list of one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentList<'t> {
    /// Text strictly between the parentheses.
    pub text: &'t str,
    /// Byte offset of `text` within the source.
    pub offset: usize,
    /// False when the parentheses never balanced and `text` runs to end of input.
    pub balanced: bool,
}

/// Extract the argument list of the call whose `(` sits at `open_paren`.
///
/// Never fails: an out-of-range offset yields an empty, unbalanced list and
/// unbalanced input is consumed to end of text.
pub fn extract_argument_list(text: &str, open_paren: usize) -> ArgumentList<'_> {
    let bytes = text.as_bytes();
    let start = (open_paren + 1).min(text.len());

    if bytes.get(open_paren) != Some(&b'(') {
        return ArgumentList {
            text: "",
            offset: start,
            balanced: false,
        };
    }

    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().skip(open_paren) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return ArgumentList {
                        text: &text[start..i],
                        offset: start,
                        balanced: true,
                    };
                }
            }
            _ => {}
        }
    }

    ArgumentList {
        text: &text[start..],
        offset: start,
        balanced: false,
    }
}
