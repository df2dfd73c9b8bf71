//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `scanner`: Locates invocations of the configured methods
//! - `extract`: Balanced argument-list extraction
//! - `tokenizer`: Top-level comma splitting
//! - `expression`: Classifies each argument expression
//! - `placeholder`: `{n}` placeholder extraction and numbering checks
//! - `heuristic`: Supplied-argument counting
//! - `validate`: Ties the above into per-call-site diagnostics
//! - `key_usage`: Key references for undefined-key detection
//! - `file_scanner`, `parsers`: Java source discovery and properties loading
//! - `context`: `CheckContext`, the shared state of one run
//! - `data`: Shared data types

pub mod context;
pub mod data;
pub mod expression;
pub mod extract;
pub mod file_scanner;
pub mod heuristic;
pub mod key_usage;
pub mod parsers;
pub mod placeholder;
pub mod scanner;
pub mod tokenizer;
pub mod validate;

pub use context::{AllSources, CheckContext};
pub use data::{
    LineIndex, MessageCatalog, MessageEntry, MessageLocation, SourceContext, SourceLocation,
};
pub use key_usage::{KeyReference, KeyReferenceMatcher};
pub use placeholder::PlaceholderSet;
pub use scanner::{CallSite, InvocationPattern};
pub use validate::{
    Diagnostic, DiagnosticKind, PlaceholderValidator, TemplateLookup, diagnose_call_site,
    validate_placeholders,
};
