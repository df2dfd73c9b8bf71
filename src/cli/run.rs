use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{add_key::add_key, check::check, fix::fix, init::init, keys::keys, show::show},
    exit_status::ExitStatus,
};

/// Dispatch to the command handler.
///
/// `serve` is handled by the binary before this is called.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Show(cmd)) => show(cmd),
        Some(Command::Keys(cmd)) => keys(cmd),
        Some(Command::AddKey(cmd)) => add_key(cmd),
        Some(Command::Fix(cmd)) => fix(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
