//! Report printing.

use colored::*;
use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{CheckError, TransportErrorKind};
use crate::probe::{CheckOutcome, CheckStatus, ProbeReport};

/// Formats one check as a single report line (without colors).
pub fn format_outcome_line(outcome: &CheckOutcome) -> String {
    match &outcome.status {
        CheckStatus::Passed => format!(
            "PASS {} ({:.2}s)",
            outcome.kind,
            outcome.elapsed.as_secs_f64()
        ),
        CheckStatus::Failed(e) => format!(
            "FAIL {} ({:.2}s): {}",
            outcome.kind,
            outcome.elapsed.as_secs_f64(),
            e
        ),
        CheckStatus::Skipped => format!("SKIP {}", outcome.kind),
    }
}

/// Formats the one-line summary of a run.
pub fn format_summary(report: &ProbeReport) -> String {
    let total = report.outcomes.len();
    let mut summary = format!(
        "Ran {} check{} against {} ({} passed, {} failed",
        total,
        if total == 1 { "" } else { "s" },
        report.domain,
        report.passed(),
        report.failed()
    );
    let skipped = report.skipped();
    if skipped > 0 {
        summary.push_str(&format!(", {skipped} skipped"));
    }
    summary.push_str(&format!(") in {:.1}s", report.elapsed_seconds));
    summary
}

/// Prints every check line and the summary to stdout.
pub fn print_report(report: &ProbeReport) {
    for outcome in &report.outcomes {
        let line = format_outcome_line(outcome);
        let line = match outcome.status {
            CheckStatus::Passed => line.green(),
            CheckStatus::Failed(_) => line.red(),
            CheckStatus::Skipped => line.yellow(),
        };
        println!("{line}");
    }

    let summary = format_summary(report);
    if report.all_passed() {
        println!("✅ {summary}");
    } else {
        println!("❌ {summary}");
    }
}

/// Logs how many failures were assertions and how many were transport errors, by kind.
pub fn print_failure_statistics(report: &ProbeReport) {
    let errors: Vec<&CheckError> = report.outcomes.iter().filter_map(|o| o.error()).collect();
    if errors.is_empty() {
        return;
    }

    let assertions = errors.iter().filter(|e| e.is_assertion()).count();
    info!("Failure Counts ({} total):", errors.len());
    if assertions > 0 {
        info!("   assertion failed: {}", assertions);
    }
    for kind in TransportErrorKind::iter() {
        let count = errors
            .iter()
            .filter(|e| matches!(e, CheckError::Transport { kind: k, .. } if *k == kind))
            .count();
        if count > 0 {
            info!("   {}: {}", kind.as_str(), count);
        }
    }
}
