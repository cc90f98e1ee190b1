use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when compiling a detection rule.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The rule's regular expression failed to compile.
    #[error("invalid regex in rule '{id}': {source}")]
    InvalidRegex {
        /// Identifier of the rule that failed (e.g. `"cloud/aws-access-key"`).
        id: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },
}

/// Errors that can occur when loading the ignore list.
///
/// A missing ignore file is not an error; only a file that exists but
/// cannot be read (permissions, invalid encoding) produces one.
#[derive(Debug, Error)]
pub enum IgnoreError {
    /// The ignore file exists but could not be read.
    #[error("failed to read ignore file {}: {source}", path.display())]
    Read {
        /// Path of the ignore file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error type for the frisk scanning pipeline.
///
/// Unifies errors from rule compilation and ignore-list loading into a
/// single type for callers that orchestrate the full workflow.
#[derive(Debug, Error)]
pub enum FriskError {
    /// A rule failed to compile.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// The ignore file could not be read.
    #[error(transparent)]
    Ignore(#[from] IgnoreError),
}
