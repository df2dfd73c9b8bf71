//! InsertMessageKey action.
//!
//! Adds message keys to a properties file. Used by `msgkey add-key`,
//! `msgkey fix` and the `add_message_key` MCP tool.

use super::operation::Operation;
use super::traits::Action;

/// A key waiting to be written to a properties file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingKey {
    pub key: String,
    pub value: String,
    pub file_path: String,
}

impl PendingKey {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            file_path: file_path.into(),
        }
    }
}

pub struct InsertMessageKey;

impl Action<PendingKey> for InsertMessageKey {
    fn to_operations(items: &[PendingKey]) -> Vec<Operation> {
        items
            .iter()
            .filter(|item| !item.key.trim().is_empty())
            .map(|item| Operation::InsertProperty {
                file_path: item.file_path.clone(),
                key: item.key.trim().to_string(),
                value: item.value.trim().to_string(),
            })
            .collect()
    }
}
