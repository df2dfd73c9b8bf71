//! Show command - print the definition of one message key.
//!
//! The key is given directly or resolved from a `FILE:LINE:COL` position
//! inside a key literal.

use std::{fs, io};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::super::{args::ShowCommand, exit_status::ExitStatus, report};
use crate::core::{CheckContext, KeyReferenceMatcher, LineIndex};

pub fn show(cmd: ShowCommand) -> Result<ExitStatus> {
    let ctx = CheckContext::new(&cmd.common)?;

    let key = match (&cmd.key, &cmd.at) {
        (Some(key), _) => key.clone(),
        (None, Some(at)) => match key_at_position(&ctx.key_matcher, at)? {
            Some(key) => key,
            None => {
                eprintln!("{} No message key at {}", "error:".bold().red(), at);
                return Ok(ExitStatus::Failure);
            }
        },
        (None, None) => bail!("Either a key or --at must be given"),
    };

    match ctx.catalog.get(&key) {
        Some(entry) => {
            report::print_entry_to(entry, &mut io::stdout().lock());
            Ok(ExitStatus::Success)
        }
        None => {
            eprintln!(
                "{} Message key not found: {}",
                "error:".bold().red(),
                key
            );
            Ok(ExitStatus::Failure)
        }
    }
}

/// Split `FILE:LINE:COL`, taking the last two fields as numbers so file
/// names may contain `:`.
pub fn parse_position(at: &str) -> Result<(&str, usize, usize)> {
    let mut parts = at.rsplitn(3, ':');
    let (Some(col), Some(line), Some(file)) = (parts.next(), parts.next(), parts.next()) else {
        bail!("Invalid position '{}', expected FILE:LINE:COL", at);
    };
    let line = line
        .parse()
        .with_context(|| format!("Invalid line number in '{}'", at))?;
    let col = col
        .parse()
        .with_context(|| format!("Invalid column number in '{}'", at))?;
    Ok((file, line, col))
}

fn key_at_position(matcher: &KeyReferenceMatcher, at: &str) -> Result<Option<String>> {
    let (file, line, col) = parse_position(at)?;
    let text =
        fs::read_to_string(file).with_context(|| format!("Failed to read file: {}", file))?;
    let index = LineIndex::new(&text);
    Ok(index
        .offset_of(&text, line, col)
        .and_then(|offset| matcher.key_at(&text, offset))
        .map(|reference| reference.key.to_string()))
}
