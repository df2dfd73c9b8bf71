//! Fix command - add every undefined message key to a properties file.
//!
//! Keys are inserted with an empty value at their sorted position.
//! Use `--apply` to actually write the file (default is dry-run mode).

use anyhow::Result;
use colored::Colorize;

use super::super::{
    actions::{Action, InsertMessageKey, PendingKey},
    args::FixCommand,
    exit_status::ExitStatus,
    report::{self, SUCCESS_MARK},
};
use super::helper::target_properties_file;
use crate::{
    core::CheckContext,
    rules::{check_undefined_key_issues, undefined_key::undefined_keys},
};

pub fn fix(cmd: FixCommand) -> Result<ExitStatus> {
    let ctx = CheckContext::new(&cmd.common)?;
    let apply = cmd.apply;

    let issues = check_undefined_key_issues(&ctx);
    let keys = undefined_keys(&issues);

    let parse_error_count = ctx.parse_errors().len();

    if keys.is_empty() {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            "No undefined message keys".green()
        );
        report::print_parse_warning(parse_error_count, ctx.verbose);
        return Ok(if parse_error_count > 0 {
            ExitStatus::Error
        } else {
            ExitStatus::Success
        });
    }

    let file = target_properties_file(&ctx, cmd.file.as_deref())?;
    let pending: Vec<PendingKey> = keys
        .iter()
        .map(|key| PendingKey::new(*key, "", &file))
        .collect();

    if apply {
        let stats = InsertMessageKey::run(&pending)?;
        println!(
            "{} {} key(s) into {} (processed {} key(s)).",
            "Inserted".green().bold(),
            stats.changes_applied,
            file,
            stats.processed
        );
    } else {
        InsertMessageKey::preview(&pending);
        println!(
            "{} {} key(s) into {}.",
            "Would insert".yellow().bold(),
            pending.len(),
            file
        );
        println!("Run with {} to insert these keys.", "--apply".cyan());
    }

    report::print_parse_warning(parse_error_count, ctx.verbose);

    // Dry-run with pending work exits 1 to signal there is something to do.
    if parse_error_count > 0 {
        Ok(ExitStatus::Error)
    } else if !apply {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
