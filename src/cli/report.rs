//! Report formatting and printing.
//!
//! Issues go to stderr in a cargo-like style, the result line to stdout.
//! Kept out of the library modules so generation has no printing side
//! effects.

use std::io::{self, Write};

use colored::Colorize;

use super::run::RunOutcome;
use crate::{
    generator::GenerationReport,
    issues::{Issue, Severity},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(outcome: &RunOutcome, verbose: bool) {
    match outcome {
        RunOutcome::Generated(report) => {
            report_issues_to(&report.issues, &mut io::stderr().lock());
            print_generated_to(report, verbose, &mut io::stdout().lock());
        }
        RunOutcome::UpToDate(output) => {
            let _ = writeln!(
                io::stdout().lock(),
                "{} {}",
                SUCCESS_MARK.green(),
                format!("{} is up to date", output.display()).green()
            );
        }
    }
}

/// Print every issue followed by a problem count.
pub fn report_issues_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    for issue in issues {
        let severity = match issue.severity {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };
        let _ = writeln!(
            writer,
            "{}: {} {}",
            severity,
            issue.message(),
            format!("[{}]", issue.rule).dimmed().cyan()
        );
    }

    let errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let warnings = issues.len() - errors;
    let _ = writeln!(
        writer,
        "\n{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        errors,
        if errors == 1 { "error" } else { "errors" }.red(),
        warnings,
        if warnings == 1 { "warning" } else { "warnings" }.yellow()
    );
}

pub fn print_generated_to<W: Write>(report: &GenerationReport, verbose: bool, writer: &mut W) {
    if verbose {
        for path in report.resource_files.iter().chain(&report.source_file) {
            let _ = writeln!(writer, "  {} {}", "wrote".dimmed(), path.display());
        }
    }

    let resources = report.resource_files.len();
    let mut summary = format!(
        "Generated {} resource {}",
        resources,
        if resources == 1 { "file" } else { "files" }
    );
    if report.source_file.is_some() {
        summary.push_str(" and 1 source file");
    }
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), summary.green());
}
