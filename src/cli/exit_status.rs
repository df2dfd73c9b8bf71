use std::process::ExitCode;

use super::commands::CommandResult;

/// Process exit status of a msgkey command.
///
/// - `Success` (0): nothing to report, or only warnings
/// - `Failure` (1): error-severity issues found, or `fix` has keys left to insert
/// - `Error` (2): the command itself failed (bad config, unreadable input)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

/// `Failure` when the result carries errors and asks to fail on them.
pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.exit_on_errors && result.error_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
