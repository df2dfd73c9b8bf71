use std::process::ExitCode;

use clap::Parser;
use msgkey::cli::{Arguments, Command, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = msgkey::mcp::run_server() {
            eprintln!("Error: {}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    let verbose = args.verbose();
    match msgkey::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) if verbose => {
            eprintln!("Error: {:?}", err);
            ExitStatus::Error.into()
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
