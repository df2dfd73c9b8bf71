//! Core data types shared by the engine, rules and reporters.
//!
//! ## Module Structure
//!
//! - `message`: Message catalog types (MessageCatalog, MessageEntry, MessageLocation)
//! - `source`: Source code location types (SourceContext, SourceLocation, LineIndex)

pub mod message;
pub mod source;

pub use message::{MessageCatalog, MessageEntry, MessageLocation};
pub use source::{LineIndex, SourceContext, SourceLocation};
