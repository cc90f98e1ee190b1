//! Compiled rules and the keyword-indexed registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use aho_corasick::AhoCorasick;
use frisk_rules::{Group, RuleDef, RulesetRegistry, Severity};
use regex::Regex;

use crate::error::RuleError;

/// A compiled detection rule ready for scanning.
///
/// Each rule combines a regular expression with metadata used for
/// reporting (label, severity) and performance (keywords for Aho-Corasick
/// pre-filtering).
#[derive(Debug, Clone)]
pub struct Rule {
    /// Unique identifier in `"group/name"` format (e.g. `"vcs/github-token"`).
    pub id: Arc<str>,
    /// Rule family this rule belongs to.
    pub group: Group,
    /// User-facing label attached to findings.
    pub label: Arc<str>,
    /// Longer description of what the rule detects.
    pub description: Box<str>,
    /// Severity assigned to findings from this rule.
    pub severity: Severity,
    /// Compiled regular expression that matches the secret.
    pub regex: Regex,
    /// Case-insensitive keywords for Aho-Corasick pre-filtering. If
    /// non-empty, the rule is only tested against files whose content
    /// contains at least one keyword.
    pub keywords: Box<[Box<str>]>,
}

impl Rule {
    fn from_def(def: &RuleDef) -> Result<Self, RuleError> {
        let regex = Regex::new(def.regex).map_err(|source| RuleError::InvalidRegex {
            id: def.id.to_string(),
            source,
        })?;

        Ok(Self {
            id: Arc::from(def.id),
            group: def.group,
            label: Arc::from(def.label),
            description: def.description.into(),
            severity: def.severity,
            regex,
            keywords: def.keywords.iter().map(|&k| k.into()).collect(),
        })
    }
}

/// Indexed collection of [`Rule`]s with Aho-Corasick pre-filtering.
///
/// The registry builds a keyword automaton at construction time so that
/// the scanner can cheaply determine which rules to evaluate for a given
/// file. Iteration order equals construction order and is observable in
/// multi-match-per-line output.
pub struct RuleRegistry {
    rules: Vec<Rule>,
    keyword_automaton: Option<AhoCorasick>,
    keyword_to_rules: Vec<Vec<usize>>,
    rules_without_keywords: Vec<usize>,
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules.len())
            .field("rules_without_keywords", &self.rules_without_keywords.len())
            .finish_non_exhaustive()
    }
}

impl RuleRegistry {
    /// Creates a registry containing all built-in rules in definition order.
    pub fn builtin() -> Result<Self, RuleError> {
        let ruleset_registry = RulesetRegistry::builtin();
        let rules = ruleset_registry
            .all_rules()
            .map(Rule::from_def)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rules))
    }

    /// Creates a registry from a list of rules, building the keyword index.
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        let keyword_index = build_keyword_index(&rules);
        let keyword_automaton = build_automaton(&keyword_index.keywords);

        Self {
            rules,
            keyword_automaton,
            keyword_to_rules: keyword_index.keyword_to_rules,
            rules_without_keywords: keyword_index.rules_without_keywords,
        }
    }

    /// Returns all rules as a slice, in registry order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Looks up a rule by its ID string (e.g. `"vcs/github-token"`).
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id.as_ref() == id)
    }

    /// Looks up a rule by its positional index in the registry.
    #[must_use]
    pub fn get_by_index(&self, idx: usize) -> Option<&Rule> {
        self.rules.get(idx)
    }

    /// Returns the total number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the registry contains no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the Aho-Corasick automaton built from rule keywords, if any
    /// keywords were registered.
    #[must_use]
    pub(crate) fn keyword_automaton(&self) -> Option<&AhoCorasick> {
        self.keyword_automaton.as_ref()
    }

    /// Maps each keyword index to the rule indices that declared it.
    #[must_use]
    pub(crate) fn keyword_to_rules(&self) -> &[Vec<usize>] {
        &self.keyword_to_rules
    }

    /// Returns indices of rules that have no keywords and must be tested
    /// against all content unconditionally.
    #[must_use]
    pub(crate) fn rules_without_keywords(&self) -> &[usize] {
        &self.rules_without_keywords
    }
}

struct KeywordIndex {
    keywords: Vec<String>,
    keyword_to_rules: Vec<Vec<usize>>,
    rules_without_keywords: Vec<usize>,
}

fn build_keyword_index(rules: &[Rule]) -> KeywordIndex {
    let mut keywords = Vec::new();
    let mut keyword_to_rules: Vec<Vec<usize>> = Vec::new();
    let mut rules_without_keywords = Vec::new();
    let mut keyword_positions: HashMap<String, usize> = HashMap::new();

    for (rule_idx, rule) in rules.iter().enumerate() {
        if rule.keywords.is_empty() {
            rules_without_keywords.push(rule_idx);
            continue;
        }

        for keyword in &rule.keywords {
            let keyword_str = keyword.to_string();

            if let Some(&existing_idx) = keyword_positions.get(&keyword_str) {
                keyword_to_rules[existing_idx].push(rule_idx);
            } else {
                let new_idx = keywords.len();
                keyword_positions.insert(keyword_str.clone(), new_idx);
                keywords.push(keyword_str);
                keyword_to_rules.push(vec![rule_idx]);
            }
        }
    }

    KeywordIndex {
        keywords,
        keyword_to_rules,
        rules_without_keywords,
    }
}

fn build_automaton(keywords: &[String]) -> Option<AhoCorasick> {
    if keywords.is_empty() {
        return None;
    }

    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(aho_corasick::MatchKind::LeftmostLongest)
        .build(keywords)
        .ok()
}
