//! Core secret scanning engine for frisk.
//!
//! This crate walks directory trees and matches file lines against a
//! registry of detection rules. It's designed to be embedded in CLIs and
//! CI pipelines.
//!
//! # Main Types
//!
//! - [`Scanner`] - Runs rules against file content and produces findings
//! - [`RuleRegistry`] - Compiled rules with keyword pre-filtering
//! - [`IgnoreList`] - Path-substring exclusions from `.secretsignore`
//! - [`Finding`] - A detected secret with its label, location, and snippet
//!
//! # Error Handling
//!
//! This crate uses [`thiserror`] for structured, typed errors that library
//! consumers can match on:
//!
//! - [`RuleError`] - Rule compilation failures
//! - [`IgnoreError`] - Ignore-file read failures
//! - [`FriskError`] - Top-level error enum combining the above
//!
//! Per-file I/O failures are never errors: an unreadable or vanished file
//! contributes no findings and the scan continues. The CLI crate
//! (`frisk_cli`) uses `anyhow` for error propagation.

/// Text/binary classification heuristics.
pub mod classify;
/// Error types for rule compilation and ignore-file loading.
pub mod error;
/// The finding type produced by scans.
pub mod finding;
/// Path-substring exclusions loaded from `.secretsignore`.
pub mod ignore_list;
/// Common re-exports for internal use.
pub mod prelude;
/// Compiled rules and the keyword-indexed registry.
pub mod rule;
/// The line scanner that matches rules against file content.
pub mod scanner;
#[cfg(test)]
pub(crate) mod test_utils;
/// Directory traversal with exclusion and ignore-list filtering.
pub mod walker;

pub use error::{FriskError, IgnoreError, RuleError};
pub use finding::Finding;
pub use ignore_list::IgnoreList;
pub use rule::{Rule, RuleRegistry};
pub use scanner::Scanner;
pub use walker::{collect_files, scan_tree};

/// Default filename for the ignore list, resolved against the current
/// working directory.
pub const IGNORE_FILENAME: &str = ".secretsignore";
