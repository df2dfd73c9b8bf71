//! Keys command - list defined message keys, optionally filtered.

use anyhow::Result;
use colored::Colorize;

use super::super::{args::KeysCommand, exit_status::ExitStatus};
use crate::core::CheckContext;

pub fn keys(cmd: KeysCommand) -> Result<ExitStatus> {
    let ctx = CheckContext::new(&cmd.common)?;
    let filter = cmd.filter.as_deref().unwrap_or("");
    let entries = ctx.catalog.search(filter);

    if entries.is_empty() {
        eprintln!("No message keys found");
        return Ok(ExitStatus::Success);
    }

    for entry in &entries {
        println!("{} {}", entry.key, entry.value.dimmed());
    }
    eprintln!(
        "{} key(s) in {} properties file(s)",
        entries.len(),
        ctx.catalog.files().len()
    );

    Ok(ExitStatus::Success)
}
