//! Argument-count heuristics.
//!
//! Approximates how many substitution values a call supplies, given only the
//! shapes of its arguments (the message key excluded).
//!
//! Rules, in precedence order:
//!
//! 1. No arguments, or a single blank one: 0.
//! 2. A single argument:
//!    - an array literal counts its non-empty elements, except that a lone
//!      `.join(...)` element stands for `expected` values;
//!    - a `.join(...)` call stands for `expected` values;
//!    - anything else counts as 1.
//! 3. Several arguments: a trailing bare identifier may be an exception object
//!    and is dropped when it follows an array literal, or when it does not
//!    follow a `.join(...)` call and either two or more arguments precede it
//!    or exactly one does while `expected == 1`. The remaining non-empty
//!    arguments are counted.

use super::expression::{ArgumentExpression, ArgumentKind};

/// Compute the effective number of supplied arguments.
pub fn count_supplied_arguments(expected: usize, args: &[ArgumentExpression<'_>]) -> usize {
    match args {
        [] => 0,
        [only] if only.is_empty() => 0,
        [only] => count_single_argument(expected, only),
        [.., prev, last] => {
            let drop_last =
                last.is_identifier() && trailing_identifier_is_extra(expected, args.len(), prev);
            let counted = if drop_last {
                &args[..args.len() - 1]
            } else {
                args
            };
            counted.iter().filter(|arg| !arg.is_empty()).count()
        }
    }
}

fn count_single_argument(expected: usize, arg: &ArgumentExpression<'_>) -> usize {
    match &arg.kind {
        ArgumentKind::ArrayLiteral { elements } => match elements.as_slice() {
            [element] if element.is_join_call() => expected,
            elements => elements.iter().filter(|e| !e.is_empty()).count(),
        },
        ArgumentKind::ChainedCall { is_join: true, .. } => expected,
        _ => 1,
    }
}

fn trailing_identifier_is_extra(
    expected: usize,
    arg_count: usize,
    prev: &ArgumentExpression<'_>,
) -> bool {
    if prev.is_array_literal() {
        return true;
    }
    if prev.is_join_call() {
        return false;
    }
    let preceding = arg_count - 1;
    preceding >= 2 || (preceding == 1 && expected == 1)
}
