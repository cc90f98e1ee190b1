//! Private key material rules.

crate::declare_ruleset!(
    PrivateKeyRuleset,
    id: "private-key",
    name: "Private Keys",
    group: Group::Keys,
    rules: [
        crate::rule! {
            id: "keys/private-key",
            group: Group::Keys,
            label: "Private Key",
            description: "PEM-encoded private key header; the key body usually follows on the next lines.",
            severity: Severity::Critical,
            regex: r"-----BEGIN (?:RSA|EC|DSA|OPENSSH) PRIVATE KEY-----",
            keywords: &["PRIVATE KEY"],
        },
    ],
);

#[cfg(test)]
mod extra_tests {
    use regex::Regex;

    fn regex() -> Regex {
        Regex::new(r"-----BEGIN (?:RSA|EC|DSA|OPENSSH) PRIVATE KEY-----").unwrap()
    }

    #[test]
    fn matches_all_four_header_variants() {
        for algo in ["RSA", "EC", "DSA", "OPENSSH"] {
            assert!(regex().is_match(&format!("-----BEGIN {algo} PRIVATE KEY-----")));
        }
    }

    #[test]
    fn rejects_public_key_header() {
        assert!(!regex().is_match("-----BEGIN RSA PUBLIC KEY-----"));
    }

    #[test]
    fn rejects_unlisted_algorithm() {
        assert!(!regex().is_match("-----BEGIN ED25519 PRIVATE KEY-----"));
    }
}
