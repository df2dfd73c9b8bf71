//! Actions for writing message keys.
//!
//! ## Architecture
//!
//! ```text
//! PendingKey (work to do)
//!     ↓
//! Action (PendingKey → Operation conversion)
//!     ↓
//! Operation (low-level file operation)
//!     ↓
//! execute (file modification)
//! ```
//!
//! ## Actions
//!
//! - [`InsertMessageKey`]: Insert `key=value` lines at their sorted position

mod insert_message_key;
mod operation;
mod properties_editor;
mod traits;

pub use insert_message_key::{InsertMessageKey, PendingKey};
pub use operation::Operation;
pub use traits::{Action, ActionStats};
