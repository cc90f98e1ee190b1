//! Rule definition types for secret detection.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid severity string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError {
    invalid_value: Box<str>,
}

impl ParseSeverityError {
    fn new(value: &str) -> Self {
        Self {
            invalid_value: value.into(),
        }
    }

    /// Returns the invalid value that caused the parse failure.
    #[must_use]
    pub fn invalid_value(&self) -> &str {
        &self.invalid_value
    }
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid severity '{}': expected one of 'low', 'medium', 'high', 'critical'",
            self.invalid_value
        )
    }
}

impl std::error::Error for ParseSeverityError {}

/// How severe a detected secret exposure is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Low risk - the secret has limited scope or is unlikely to be exploitable.
    Low,
    /// Medium risk - the secret could grant partial access.
    Medium,
    /// High risk - the secret grants broad access to sensitive resources.
    High,
    /// Critical risk - the secret grants full administrative access.
    Critical,
}

impl Severity {
    /// All severity levels in ascending order.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseSeverityError::new(s)),
        }
    }
}

/// Logical grouping of rules by the kind of credential they detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Cloud provider API keys and service credentials.
    Cloud,
    /// Heuristic context-based detections (key name + assignment).
    Generic,
    /// Private keys and certificate material.
    Keys,
    /// Version control system tokens and credentials.
    Vcs,
}

impl Group {
    /// Returns the human-readable display name for this group.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cloud => "Cloud Providers",
            Self::Generic => "Generic Secrets",
            Self::Keys => "Private Keys & Certificates",
            Self::Vcs => "Version Control Systems",
        }
    }

    /// Returns the lowercase string identifier used in rule IDs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cloud => "cloud",
            Self::Generic => "generic",
            Self::Keys => "keys",
            Self::Vcs => "vcs",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single rule definition for detecting a specific class of secret.
///
/// Definitions are static data; the scanning engine compiles them into
/// runnable rules at startup. The `label` is the user-facing name that
/// appears in reports and must be unique across all built-in rules.
#[derive(Debug, Clone)]
pub struct RuleDef {
    /// Unique identifier in `"group/name"` format (e.g. `"vcs/github-token"`).
    pub id: &'static str,
    /// The category this rule belongs to.
    pub group: Group,
    /// User-facing label reported with each finding (e.g. `"AWS Access Key"`).
    pub label: &'static str,
    /// Longer description of what this rule detects.
    pub description: &'static str,
    /// How severe an exposure of this secret type is.
    pub severity: Severity,
    /// The regular expression used to match this secret.
    pub regex: &'static str,
    /// Literal keywords for Aho-Corasick pre-filtering. Every possible
    /// regex match must contain at least one keyword (case-insensitively),
    /// otherwise the pre-filter would suppress real findings.
    pub keywords: &'static [&'static str],
}

/// Creates a [`RuleDef`] from named fields.
#[macro_export]
macro_rules! rule {
    (
        id: $id:expr,
        group: $group:expr,
        label: $label:expr,
        description: $description:expr,
        severity: $severity:expr,
        regex: $regex:expr,
        keywords: $keywords:expr $(,)?
    ) => {
        $crate::RuleDef {
            id: $id,
            group: $group,
            label: $label,
            description: $description,
            severity: $severity,
            regex: $regex,
            keywords: $keywords,
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_low_to_critical() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn severity_display_formats_as_lowercase() {
        assert_eq!(format!("{}", Severity::Low), "low");
        assert_eq!(format!("{}", Severity::Critical), "critical");
    }

    #[test]
    fn severity_from_str_is_case_insensitive() {
        assert_eq!(Severity::from_str("HIGH"), Ok(Severity::High));
        assert_eq!(Severity::from_str("Critical"), Ok(Severity::Critical));
    }

    #[test]
    fn severity_from_str_returns_error_for_invalid_value() {
        let result = Severity::from_str("extreme");
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert_eq!(err.invalid_value(), "extreme");
        assert!(err.to_string().contains("extreme"));
        assert!(err.to_string().contains("expected one of"));
    }

    #[test]
    fn parse_severity_error_implements_std_error() {
        let err = ParseSeverityError::new("bad");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn group_as_str_matches_rule_id_prefix() {
        assert_eq!(Group::Vcs.as_str(), "vcs");
        assert_eq!(Group::Keys.as_str(), "keys");
    }

    #[test]
    fn group_name_is_human_readable() {
        assert_eq!(Group::Cloud.name(), "Cloud Providers");
        assert_eq!(Group::Generic.name(), "Generic Secrets");
    }
}
