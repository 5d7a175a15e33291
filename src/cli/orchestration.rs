//! Main workflow orchestration logic
//!
//! Loads the YAML file, walks it for the target key and writes it back only
//! when at least one value changed. Argument parsing lives in main.rs so this
//! workflow can be driven programmatically without clap.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde_yaml::Value;

use crate::error::{Result, YamlBumpError};
use crate::ui;
use crate::version::IncrementKind;
use crate::walker::{self, WalkReport};

/// Arguments for the bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpArgs {
    /// YAML file to update in place
    pub file: PathBuf,

    /// Key whose values are bumped, at any depth
    pub key: String,

    /// Which version component to increment
    pub inc_type: IncrementKind,

    /// Report what would change without writing the file
    pub dry_run: bool,
}

/// What the workflow did with the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// No value changed; the file was not touched
    Unchanged,

    /// The file was rewritten with `changes` bumped values
    Written { changes: usize },

    /// `changes` values would have been bumped, nothing was written
    DryRun { changes: usize },
}

/// Parses `content` and bumps every value under `key`.
///
/// Returns the updated document together with the walk report; the caller
/// decides from the report whether the document needs to be written.
pub fn bump_document(content: &str, key: &str, kind: IncrementKind) -> Result<(Value, WalkReport)> {
    let mut document: Value = serde_yaml::from_str(content)?;
    let report = walker::walk(&mut document, key, kind);
    Ok((document, report))
}

/// Renders a document back to YAML, block style with key order preserved.
pub fn render_document(document: &Value) -> Result<String> {
    Ok(serde_yaml::to_string(document)?)
}

/// Bump workflow
///
/// 1. Read the file (a missing file is reported as [`YamlBumpError::FileNotFound`])
/// 2. Parse it and bump every occurrence of the key
/// 3. Report each bump or skipped value
/// 4. Write the file back if anything changed (unless `dry_run`)
pub fn process(args: &BumpArgs) -> Result<ProcessOutcome> {
    let content = fs::read_to_string(&args.file).map_err(|e| match e.kind() {
        ErrorKind::NotFound => YamlBumpError::FileNotFound(args.file.clone()),
        _ => YamlBumpError::Io(e),
    })?;

    let (document, report) = bump_document(&content, &args.key, args.inc_type)?;
    ui::display_walk_report(&report);

    if !report.changed() {
        ui::display_info("Nothing to update...");
        return Ok(ProcessOutcome::Unchanged);
    }

    let changes = report.bumped_count();
    if args.dry_run {
        ui::display_status(&format!(
            "Dry run: {} value(s) would be updated in {}",
            changes,
            args.file.display()
        ));
        return Ok(ProcessOutcome::DryRun { changes });
    }

    ui::display_info("Writing updated yaml...");
    fs::write(&args.file, render_document(&document)?)?;
    ui::display_success(&format!("Updated {}", args.file.display()));

    Ok(ProcessOutcome::Written { changes })
}
