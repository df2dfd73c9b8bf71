//! Add-key command - write one message key to a properties file.

use anyhow::Result;
use colored::Colorize;

use super::super::{
    actions::{Action, InsertMessageKey, PendingKey},
    args::AddKeyCommand,
    exit_status::ExitStatus,
    report::SUCCESS_MARK,
};
use super::helper::target_properties_file;
use crate::core::CheckContext;

pub fn add_key(cmd: AddKeyCommand) -> Result<ExitStatus> {
    let ctx = CheckContext::new(&cmd.common)?;
    let key = cmd.key.trim();

    if key.is_empty() {
        eprintln!("Error: Message key must not be empty");
        return Ok(ExitStatus::Failure);
    }

    if let Some(existing) = ctx.catalog.get(key) {
        eprintln!(
            "Error: {} is already defined at {}:{}",
            key, existing.location.file_path, existing.location.line
        );
        return Ok(ExitStatus::Failure);
    }

    let file = target_properties_file(&ctx, cmd.file.as_deref())?;
    let stats = InsertMessageKey::run(&[PendingKey::new(key, &cmd.value, &file)])?;

    if stats.changes_applied == 0 {
        eprintln!("Error: {} is already defined in {}", key, file);
        return Ok(ExitStatus::Failure);
    }

    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Added {} to {}", key, file).green()
    );
    Ok(ExitStatus::Success)
}
