//! Report formatting and printing utilities.
//!
//! Issues are shown in cargo-style format; command summaries follow them.
//! Kept apart from the core so glean can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, ExtractSummary, InitSummary, LanguageUpdate, UpdateSummary,
};
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(source_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - no issues found",
            source_files,
            plural(source_files, "file", "files")
        )
        .green()
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col) = loc.position();

    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    if line > 0 {
        let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);
    } else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    }

    if let ReportLocation::Source(ctx) = loc {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };
        let source_line = ctx.source_line.as_str();

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Caret pointing to the column (col is 1-based)
        let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        plural(issues.len(), "problem", "problems"),
        total_errors,
        plural(total_errors, "error", "errors").red(),
        total_warnings,
        plural(total_warnings, "warning", "warnings").yellow()
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .map(|i| i.location().position().1)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print the issues and the command's own summary to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    report_to(&result.issues, writer);

    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, writer),
        CommandSummary::Check => {
            if result.issues.is_empty() {
                print_success_to(result.source_files_checked, writer);
            }
        }
        CommandSummary::Update(summary) => print_update(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_extract<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} {} ({} {}) to {}",
            summary.message_count,
            plural(summary.message_count, "message", "messages"),
            summary.record_count,
            plural(summary.record_count, "occurrence", "occurrences"),
            summary.output_path
        )
        .green()
    );
}

fn print_update<W: Write>(summary: &UpdateSummary, writer: &mut W) {
    let writes = summary.is_apply && !summary.blocked;
    for update in &summary.languages {
        print_language_update(update, writes, writer);
    }

    let pending = summary.languages.iter().filter(|u| u.changed).count();
    if summary.blocked && pending > 0 {
        let _ = writeln!(
            writer,
            "\n{} {}",
            FAILURE_MARK.red(),
            format!(
                "Not writing {} {}: fix the errors above first",
                pending,
                plural(pending, "file", "files")
            )
            .red()
        );
    } else if !summary.is_apply && pending > 0 {
        let _ = writeln!(
            writer,
            "\nRun with {} to write {} {}.",
            "--apply".cyan(),
            pending,
            plural(pending, "file", "files")
        );
    }
}

fn print_language_update<W: Write>(update: &LanguageUpdate, writes: bool, writer: &mut W) {
    let stats = &update.stats;
    let counts = format!(
        "{} {}, {} translated, {} new, {} obsolete",
        stats.total,
        plural(stats.total, "message", "messages"),
        stats.translated,
        stats.added,
        stats.obsolete
    );

    if !update.changed {
        let _ = writeln!(
            writer,
            "{} {} [{}] up to date ({})",
            SUCCESS_MARK.green(),
            update.path,
            update.language,
            counts
        );
        return;
    }

    let action = match (writes, update.created) {
        (true, true) => "Created".green().bold(),
        (true, false) => "Updated".green().bold(),
        (false, true) => "Would create".yellow().bold(),
        (false, false) => "Would update".yellow().bold(),
    };
    let _ = writeln!(
        writer,
        "{} {} [{}] ({})",
        action, update.path, update.language, counts
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path).green()
    );
}
