//! Issue types for message key analysis results.
//!
//! Each issue is self-contained with all information needed by:
//! - Reporter: to display the issue to users (CLI, MCP)
//! - Action: to fix the issue (insert missing keys)

use enum_dispatch::enum_dispatch;

use crate::core::{DiagnosticKind, SourceContext};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    PlaceholderNumbering,
    PlaceholderCount,
    UndefinedKey,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::PlaceholderNumbering => write!(f, "placeholder-numbering"),
            Rule::PlaceholderCount => write!(f, "placeholder-count"),
            Rule::UndefinedKey => write!(f, "undefined-key"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

impl From<DiagnosticKind> for Rule {
    fn from(kind: DiagnosticKind) -> Self {
        match kind {
            DiagnosticKind::PlaceholderNumberingInvalid => Rule::PlaceholderNumbering,
            DiagnosticKind::PlaceholderCountMismatch => Rule::PlaceholderCount,
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Placeholder numbering or argument count problem at a call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderIssue {
    /// Location of the key literal.
    pub context: SourceContext,
    pub key: String,
    /// The message template the call was checked against.
    pub template: String,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl PlaceholderIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule(&self) -> Rule {
        self.kind.into()
    }
}

/// Key referenced in code but defined in no properties file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndefinedKeyIssue {
    pub context: SourceContext,
    pub key: String,
}

impl UndefinedKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UndefinedKey
    }
}

/// File could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Placeholder(PlaceholderIssue),
    UndefinedKey(UndefinedKeyIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::Placeholder(_) => PlaceholderIssue::severity(),
            Issue::UndefinedKey(_) => UndefinedKeyIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::Placeholder(issue) => issue.rule(),
            Issue::UndefinedKey(_) => UndefinedKeyIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only (no line context).
    File { path: &'a str },
}

/// Implemented by all issue types; dispatched on [`Issue`] via `enum_dispatch`.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for PlaceholderIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        self.rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("{} = {}", self.key, self.template))
    }
}

impl Report for UndefinedKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some(format!("add it with `msgkey add-key {}`", self.key))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }

    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.line(),
            ReportLocation::File { .. } => 0,
        }
    }

    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.col(),
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    /// By file path, line, column, rule, then message.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_file_path()
            .cmp(other.sort_file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.sort_col().cmp(&other.sort_col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
