//! Report formatting and printing utilities.
//!
//! Renders command results in a cargo-style format. Separate from dispatch so
//! the output can be captured in tests via the `*_to` writer variants.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::issue::{Issue, Severity};

use super::run::{CommandResult, CommandSummary, ListRow};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Widest a description column gets before truncation.
const MAX_DESC_WIDTH: usize = 60;

pub fn print(result: &CommandResult, verbose: bool) {
    print_fallback_warning(result.fallback_reason.as_deref(), verbose);
    print_to(result, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::List { rows } => print_list(rows, writer),
        CommandSummary::Show { ratio, entries } => print_show(ratio, entries, writer),
        CommandSummary::Describe {
            ratio,
            resolution,
            description,
        } => print_describe(ratio, resolution, description.as_deref(), writer),
        CommandSummary::Check {
            path,
            groups,
            issues,
        } => print_check(&path.display().to_string(), *groups, issues, writer),
        CommandSummary::Init { path } => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", path.display()).green()
            );
        }
    }
}

/// Warn on stderr when the requested catalog was rejected and the built-in
/// table was substituted.
pub fn print_fallback_warning(reason: Option<&str>, verbose: bool) {
    print_fallback_warning_to(reason, verbose, &mut io::stderr().lock());
}

pub fn print_fallback_warning_to<W: Write>(reason: Option<&str>, verbose: bool, writer: &mut W) {
    let Some(reason) = reason else {
        return;
    };
    let _ = writeln!(
        writer,
        "{} catalog could not be loaded, using the built-in table",
        "warning:".bold().yellow()
    );
    if verbose {
        let _ = writeln!(writer, "  {} {}", "reason:".bold(), reason);
    } else {
        let _ = writeln!(writer, "  (use {} for the reason)", "-v".cyan());
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_list<W: Write>(rows: &[ListRow], writer: &mut W) {
    let ratio_width = rows.iter().map(|row| row.ratio.len()).max().unwrap_or(0);
    for row in rows {
        let _ = writeln!(
            writer,
            "{:<width$}  {} {}",
            row.ratio.cyan(),
            row.count,
            if row.count == 1 { "resolution" } else { "resolutions" },
            width = ratio_width
        );
    }
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "{} ratio {}",
            rows.len(),
            if rows.len() == 1 { "class" } else { "classes" }
        )
        .green()
    );
}

fn print_show<W: Write>(ratio: &str, entries: &[crate::catalog::ResolutionEntry], writer: &mut W) {
    if entries.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("no resolutions for ratio \"{}\"", ratio).red()
        );
        return;
    }

    let _ = writeln!(writer, "{}", ratio.bold());
    let token_width = entries
        .iter()
        .map(|entry| entry.resolution.len())
        .max()
        .unwrap_or(0);
    for entry in entries {
        if entry.description.is_empty() {
            let _ = writeln!(writer, "  {}", entry.resolution.cyan());
        } else {
            let _ = writeln!(
                writer,
                "  {:<width$}  {}",
                entry.resolution.cyan(),
                truncate_display(&entry.description, MAX_DESC_WIDTH),
                width = token_width
            );
        }
    }
}

fn print_describe<W: Write>(
    ratio: &str,
    resolution: &str,
    description: Option<&str>,
    writer: &mut W,
) {
    match description {
        Some("") => {
            let _ = writeln!(writer, "{}", "(no description)".dimmed());
        }
        Some(description) => {
            let _ = writeln!(writer, "{}", description);
        }
        None => {
            let _ = writeln!(
                writer,
                "{} {}",
                FAILURE_MARK.red(),
                format!("no entry \"{}\" under ratio \"{}\"", resolution, ratio).red()
            );
        }
    }
}

fn print_check<W: Write>(path: &str, groups: usize, issues: &[Issue], writer: &mut W) {
    for issue in issues {
        print_issue(issue, path, writer);
    }

    if issues.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} ratio {} - no issues found",
                groups,
                if groups == 1 { "group" } else { "groups" }
            )
            .green()
        );
    } else {
        print_summary(issues, writer);
    }
}

fn print_issue<W: Write>(issue: &Issue, path: &str, writer: &mut W) {
    let severity_str = match issue.severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message,
        issue.rule.to_string().dimmed().cyan()
    );
    let _ = writeln!(
        writer,
        "  {} {} (group {})",
        "-->".blue(),
        path,
        issue.group_index
    );
    if let Some(details) = &issue.details {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }
    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.severity == Severity::Warning)
        .count();

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

/// Truncate `text` to at most `max_cols` terminal columns, CJK-aware, with a
/// trailing ellipsis when anything was cut.
fn truncate_display(text: &str, max_cols: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_cols {
        return text.to_string();
    }

    let mut out = String::new();
    let mut cols = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if cols + w > max_cols.saturating_sub(1) {
            break;
        }
        out.push(c);
        cols += w;
    }
    out.push('…');
    out
}

// ============================================================
// Tests
// ============================================================
