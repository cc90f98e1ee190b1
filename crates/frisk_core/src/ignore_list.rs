//! Path-substring exclusions loaded from `.secretsignore`.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use crate::IGNORE_FILENAME;
use crate::error::IgnoreError;

/// A set of path-substring tokens that suppress scanning.
///
/// Loaded once per invocation from `.secretsignore` in the working
/// directory and immutable afterwards. A file is ignored when any token
/// is a plain substring of its path; tokens are not globs or regexes.
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    tokens: HashSet<String>,
}

impl IgnoreList {
    /// Loads the ignore list from [`IGNORE_FILENAME`] in the current
    /// working directory.
    ///
    /// A missing file yields an empty list. A file that exists but cannot
    /// be read is an [`IgnoreError`].
    pub fn load() -> Result<Self, IgnoreError> {
        Self::load_from(Path::new(IGNORE_FILENAME))
    }

    /// Loads the ignore list from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, IgnoreError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(IgnoreError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Ok(Self::parse(&text))
    }

    /// Parses ignore tokens from file content: one token per line, trimmed,
    /// skipping blank lines and `#` comments.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let tokens = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();

        Self { tokens }
    }

    /// Returns `true` if any token is a substring of `path`.
    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.tokens.iter().any(|token| path.contains(token.as_str()))
    }

    /// Returns the number of loaded tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if no tokens are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
