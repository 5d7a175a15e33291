//! Formatting functions for everything yaml-bump prints.
//!
//! Informational output and warnings go to stdout, fatal errors to stderr.

use console::style;

use crate::boundary::BumpWarning;
use crate::walker::{WalkEvent, WalkReport};

/// Format and print a fatal error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a warning message in yellow.
pub fn display_warning(message: &str) {
    println!("{} {}", style("WARNING:").yellow().bold(), message);
}

/// Format and print an informational message.
pub fn display_info(message: &str) {
    println!("{} {}", style("INFO:").cyan(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Display a value that could not be bumped.
pub fn display_bump_warning(warning: &BumpWarning) {
    display_warning(&warning.to_string());
}

/// Message shown when an occurrence of the target key was bumped.
pub fn format_bump(key: &str, old: &str, new: &str) -> String {
    format!("Found {} key, incrementing version: {} => {}", key, old, new)
}

/// Display every event of a walk, in the order they happened.
pub fn display_walk_report(report: &WalkReport) {
    for event in &report.events {
        match event {
            WalkEvent::Bumped { key, old, new } => display_info(&format_bump(key, old, new)),
            WalkEvent::Skipped(warning) => display_bump_warning(warning),
        }
    }
}
