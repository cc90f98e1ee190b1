//! Generic API key assignment rules.

crate::declare_ruleset!(
    GenericApiKeyRuleset,
    id: "generic-api-key",
    name: "Generic API Key",
    group: Group::Generic,
    rules: [
        crate::rule! {
            id: "generic/api-key-assignment",
            group: Group::Generic,
            label: "Generic API Key",
            description: "Grants access to an unidentified service via a hardcoded API key.",
            severity: Severity::Medium,
            regex: r#"(?i)api[_-]?key\s*=\s*['"][A-Za-z0-9_\-]{16,}['"]"#,
            keywords: &["api_key", "api-key", "apikey"],
        },
    ],
);
