use anyhow::Result;
use clap::ValueEnum;

use super::super::{
    args::CheckCommand,
    exit_status::{ExitStatus, exit_status_from_result},
    report,
};
use super::{CommandResult, helper::finish};
use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{check_placeholder_issues, check_undefined_key_issues},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    /// Placeholder numbering and argument count
    Placeholder,
    /// Keys referenced in code but not defined
    UndefinedKey,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![CheckRule::Placeholder, CheckRule::UndefinedKey]
    }
}

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = CheckContext::new(&cmd.common)?;
    let result = run_checks(&ctx, &cmd.checks);
    report::print(&result, ctx.verbose);
    Ok(exit_status_from_result(&result))
}

/// Run `checks` (all when empty) and collect the issues with read errors.
pub fn run_checks(ctx: &CheckContext, checks: &[CheckRule]) -> CommandResult {
    let checks = if checks.is_empty() {
        CheckRule::all()
    } else {
        checks.to_vec()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::Placeholder => {
                let issues = check_placeholder_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Placeholder));
            }
            CheckRule::UndefinedKey => {
                let issues = check_undefined_key_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::UndefinedKey));
            }
        }
    }

    all_issues.extend(ctx.parse_errors().into_iter().map(Issue::ParseError));

    finish(
        all_issues,
        ctx.files.len(),
        ctx.catalog.files().len(),
        true,
    )
}
