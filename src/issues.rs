//! Issue types for extraction results.
//!
//! Each issue is self-contained with everything the reporters (CLI, MCP) need
//! to display it.

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::core::{SourceContext, SourceLocation};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MalformedLiteral,
    UnreadableSource,
    EmptyMsgid,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MalformedLiteral => write!(f, "malformed-literal"),
            Rule::UnreadableSource => write!(f, "unreadable-source"),
            Rule::EmptyMsgid => write!(f, "empty-msgid"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// String literal after a marker that is not closed before the end of the
/// line or file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLiteralIssue {
    pub context: SourceContext,
    /// The marker symbol that opened the call.
    pub marker: String,
}

impl MalformedLiteralIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MalformedLiteral
    }
}

/// Source file that could not be loaded. Other files are still extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableSourceIssue {
    pub file_path: String,
    pub error: String,
}

impl UnreadableSourceIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UnreadableSource
    }
}

/// `_("")`: the empty msgid is reserved for the catalog header, so the
/// occurrence is left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyMsgidIssue {
    pub location: SourceLocation,
}

impl EmptyMsgidIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::EmptyMsgid
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found while extracting strings.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MalformedLiteral(MalformedLiteralIssue),
    UnreadableSource(UnreadableSourceIssue),
    EmptyMsgid(EmptyMsgidIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MalformedLiteral(_) => MalformedLiteralIssue::severity(),
            Issue::UnreadableSource(_) => UnreadableSourceIssue::severity(),
            Issue::EmptyMsgid(_) => EmptyMsgidIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::MalformedLiteral(_) => MalformedLiteralIssue::rule(),
            Issue::UnreadableSource(_) => UnreadableSourceIssue::rule(),
            Issue::EmptyMsgid(_) => EmptyMsgidIssue::rule(),
        }
    }

    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.file_path(),
            ReportLocation::Position(loc) => loc.file_path.as_str(),
            ReportLocation::File { path } => path,
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location with the line text for context display.
    Source(&'a SourceContext),
    /// Source position without line text.
    Position(&'a SourceLocation),
    /// File-level only (no line context).
    File { path: &'a str },
}

impl<'a> ReportLocation<'a> {
    /// `(path, line, col)`; file-level locations report line and col 0.
    pub fn position(&self) -> (&'a str, usize, usize) {
        match *self {
            ReportLocation::Source(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
            ReportLocation::Position(loc) => (loc.file_path.as_str(), loc.line, loc.col),
            ReportLocation::File { path } => (path, 0, 0),
        }
    }
}

/// Trait for types that can be reported to the CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards calls on
/// [`Issue`] without a vtable.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MalformedLiteralIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        "unterminated string literal".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("close the quote before the end of the line")
    }

    fn details(&self) -> Option<String> {
        Some(format!("in call to `{}(...)`", self.marker))
    }
}

impl Report for UnreadableSourceIssue {
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

impl Report for EmptyMsgidIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Position(&self.location)
    }

    fn message(&self) -> String {
        "empty msgid".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("the empty msgid is reserved for the catalog header".to_string())
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let a = self.location();
        let b = other.location();
        a.position()
            .cmp(&b.position())
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
