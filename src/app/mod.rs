//! Main application modules.
//!
//! This module provides the report printing used at the end of a run.

pub mod statistics;

// Re-export public API
pub use statistics::{
    format_outcome_line, format_summary, print_failure_statistics, print_report,
};
