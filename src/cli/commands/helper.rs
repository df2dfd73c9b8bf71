use std::path::Path;

use anyhow::{Result, bail};

use super::CommandResult;
use crate::{
    core::CheckContext,
    issues::{Issue, Severity},
};

pub fn finish(
    mut issues: Vec<Issue>,
    source_files_checked: usize,
    properties_files_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    CommandResult {
        error_count,
        warning_count: issues.len() - error_count,
        exit_on_errors,
        issues,
        parse_error_count,
        source_files_checked,
        properties_files_checked,
    }
}

/// Properties file that new keys are written to: `--file` if given, else the
/// first properties file the catalog loaded.
pub fn target_properties_file(ctx: &CheckContext, file: Option<&Path>) -> Result<String> {
    if let Some(file) = file {
        return Ok(file.to_string_lossy().to_string());
    }
    match ctx.default_properties_file() {
        Some(path) => Ok(path.to_string()),
        None => bail!("No properties file found (use --file to choose one)"),
    }
}
