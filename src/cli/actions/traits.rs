//! Action trait definition.
//!
//! Actions convert pending work into Operations. Each Action can be
//! implemented for multiple input types.

use std::{collections::BTreeMap, path::Path};

use anyhow::Result;

use super::{operation::Operation, properties_editor::PropertiesEditor};

/// Statistics from running an action.
#[derive(Debug, Clone, Default)]
pub struct ActionStats {
    /// Number of items processed.
    pub processed: usize,
    /// Number of items skipped (e.g., key already defined).
    pub skipped: usize,
    /// Number of changes actually applied to files.
    pub changes_applied: usize,
    /// Number of files modified.
    pub files_modified: usize,
}

impl std::ops::AddAssign for ActionStats {
    fn add_assign(&mut self, other: Self) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.changes_applied += other.changes_applied;
        self.files_modified += other.files_modified;
    }
}

/// Converts items into Operations and executes them.
///
/// ```ignore
/// if apply {
///     InsertMessageKey::run(&pending)?;
/// } else {
///     InsertMessageKey::preview(&pending);
/// }
/// ```
pub trait Action<I> {
    /// Convert items to low-level operations.
    fn to_operations(items: &[I]) -> Vec<Operation>;

    /// Execute the action (modify files).
    fn run(items: &[I]) -> Result<ActionStats> {
        let ops = Self::to_operations(items);
        execute_operations(&ops)
    }

    /// Preview the action (dry-run mode).
    fn preview(items: &[I]) {
        for op in &Self::to_operations(items) {
            op.preview();
        }
    }
}

/// Apply operations file by file; each file is read and written once.
pub(crate) fn execute_operations(ops: &[Operation]) -> Result<ActionStats> {
    let mut by_file: BTreeMap<&str, Vec<&Operation>> = BTreeMap::new();
    for op in ops {
        by_file.entry(op.file_path()).or_default().push(op);
    }

    let mut stats = ActionStats {
        processed: ops.len(),
        ..Default::default()
    };

    for (file_path, file_ops) in by_file {
        let mut editor = PropertiesEditor::open(Path::new(file_path))?;
        let mut applied = 0;
        for op in file_ops {
            match op {
                Operation::InsertProperty { key, value, .. } => {
                    if editor.insert_key(key, value) {
                        applied += 1;
                    } else {
                        stats.skipped += 1;
                    }
                }
            }
        }
        if applied > 0 {
            editor.save()?;
            stats.changes_applied += applied;
            stats.files_modified += 1;
        }
    }

    Ok(stats)
}
