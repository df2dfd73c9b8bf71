use colored::Colorize;

/// Low-level file operation produced by an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Add `key=value` to a properties file at its sorted position.
    InsertProperty {
        file_path: String,
        key: String,
        value: String,
    },
}

impl Operation {
    pub fn file_path(&self) -> &str {
        match self {
            Operation::InsertProperty { file_path, .. } => file_path,
        }
    }

    /// Print what this operation would change.
    pub fn preview(&self) {
        match self {
            Operation::InsertProperty {
                file_path,
                key,
                value,
            } => {
                println!(
                    "  {} {}={} {}",
                    "+".green(),
                    key,
                    value,
                    format!("({})", file_path).dimmed()
                );
            }
        }
    }
}
