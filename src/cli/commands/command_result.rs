use crate::issues::Issue;

/// Result of running the check command.
#[derive(Debug)]
pub struct CommandResult {
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found, sorted by location.
    pub issues: Vec<Issue>,
    /// Number of files that could not be read or parsed.
    pub parse_error_count: usize,
    /// Number of Java source files that were checked.
    pub source_files_checked: usize,
    /// Number of properties files that were loaded.
    pub properties_files_checked: usize,
}
