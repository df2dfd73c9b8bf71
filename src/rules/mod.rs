//! Rule implementations for msgkey.
//!
//! Each rule is a pure function over the inputs it needs, with a thin
//! `check_*` wrapper that pulls them from a [`CheckContext`](crate::core::CheckContext).
//!
//! ## Module Structure
//!
//! - `placeholder`: Placeholder numbering and argument-count checks
//! - `undefined_key`: Keys referenced in code but defined in no properties file

pub mod placeholder;
pub mod undefined_key;

pub use placeholder::{check_placeholder_issues, find_placeholder_issues};
pub use undefined_key::{check_undefined_key_issues, find_undefined_key_issues};
