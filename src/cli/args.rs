//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run placeholder and undefined-key checks
//! - `show`: Show the definition of a message key
//! - `keys`: List defined message keys
//! - `add-key`: Add a message key to a properties file
//! - `fix`: Add every undefined key to a properties file
//! - `init`: Initialize msgkey configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Show(cmd)) => cmd.common.verbose,
            Some(Command::Keys(cmd)) => cmd.common.verbose,
            Some(Command::AddKey(cmd)) => cmd.common.verbose,
            Some(Command::Fix(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root directory (defaults to the current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Message method name to check (overrides config file, repeatable)
    #[arg(long = "pattern", value_name = "METHOD")]
    pub patterns: Vec<String>,

    /// Properties file glob (overrides config file, repeatable)
    #[arg(long = "properties", value_name = "GLOB")]
    pub properties: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Checks to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Message key to look up
    #[arg(required_unless_present = "at")]
    pub key: Option<String>,

    /// Resolve the key referenced at a source position instead
    #[arg(long, value_name = "FILE:LINE:COL", conflicts_with = "key")]
    pub at: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// Only list keys containing this text (case-insensitive)
    pub filter: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct AddKeyCommand {
    /// Message key to add
    pub key: String,

    /// Message value
    #[arg(long, default_value = "")]
    pub value: String,

    /// Properties file to write (default: first loaded properties file)
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FixCommand {
    /// Actually insert keys (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Properties file to write (default: first loaded properties file)
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check message key usages (placeholder arguments, undefined keys)
    Check(CheckCommand),
    /// Show the value and location of a message key
    Show(ShowCommand),
    /// List defined message keys
    Keys(KeysCommand),
    /// Add a message key to a properties file
    AddKey(AddKeyCommand),
    /// Add every undefined message key to a properties file
    Fix(FixCommand),
    /// Initialize a new .msgkeyrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
