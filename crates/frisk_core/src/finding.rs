//! The finding type produced by scans.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use frisk_rules::Severity;

/// A single detected secret at a specific file and line.
///
/// Findings are immutable once created and are reported in scan order:
/// traversal order across files, line order within a file, and registry
/// order when one line matches several rules.
#[derive(Debug, Clone)]
pub struct Finding {
    /// Label of the rule that matched (e.g. `"AWS Access Key"`).
    pub rule: Arc<str>,
    /// Severity inherited from the matching rule.
    pub severity: Severity,
    /// Path to the file where the secret was found.
    pub path: Box<Path>,
    /// 1-indexed line number of the match.
    pub line: u32,
    /// The matched line with surrounding whitespace trimmed.
    pub snippet: Box<str>,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}]",
            self.path.display(),
            self.line,
            self.rule,
            self.severity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_finding;

    #[test]
    fn display_shows_path_line_rule_severity() {
        let finding = make_finding("AWS Access Key", "config.py", 3);
        let display = format!("{finding}");

        assert!(display.contains("config.py"));
        assert!(display.contains(":3"));
        assert!(display.contains("AWS Access Key"));
        assert!(display.contains("high"));
    }

    #[test]
    fn findings_clone_preserves_fields() {
        let finding = make_finding("GitHub Token", "src/auth.rs", 12);
        let cloned = finding.clone();

        assert_eq!(finding.rule, cloned.rule);
        assert_eq!(finding.line, cloned.line);
        assert_eq!(finding.snippet, cloned.snippet);
    }
}
