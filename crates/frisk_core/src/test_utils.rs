//! Test utilities for `frisk_core` (compiled only during testing).

use std::path::Path;
use std::sync::Arc;

use frisk_rules::{Group, Severity};
use regex::Regex;

use crate::finding::Finding;
use crate::rule::{Rule, RuleRegistry};
use crate::scanner::Scanner;

pub fn make_rule(id: &str, label: &str, regex: &str, keywords: &[&str]) -> Rule {
    Rule {
        id: id.into(),
        group: Group::Generic,
        label: label.into(),
        description: "Test rule".into(),
        severity: Severity::High,
        regex: Regex::new(regex).unwrap(),
        keywords: keywords.iter().map(|&s| s.into()).collect(),
    }
}

pub fn make_finding(rule: &str, path: &str, line: u32) -> Finding {
    Finding {
        rule: Arc::from(rule),
        severity: Severity::High,
        path: Path::new(path).into(),
        line,
        snippet: "snippet".into(),
    }
}

pub fn builtin_scanner() -> Scanner {
    Scanner::new(RuleRegistry::builtin().unwrap())
}
