//! Ruleset registry for accessing all built-in rulesets.

use crate::rule::RuleDef;
use crate::ruleset::Ruleset;
use crate::rulesets::builtin_rulesets;

/// Central registry of all built-in detection rulesets.
///
/// Iteration order over rules is fixed at construction and observable:
/// when one line matches several rules, findings are emitted in this
/// order.
pub struct RulesetRegistry {
    rulesets: Vec<&'static dyn Ruleset>,
}

impl std::fmt::Debug for RulesetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RulesetRegistry")
            .field("rulesets", &self.rulesets.len())
            .finish_non_exhaustive()
    }
}

impl RulesetRegistry {
    /// Creates a registry pre-loaded with all built-in rulesets.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            rulesets: builtin_rulesets(),
        }
    }

    /// Returns an iterator over every rule definition across all rulesets.
    pub fn all_rules(&self) -> impl Iterator<Item = &RuleDef> {
        self.rulesets.iter().flat_map(|r| r.rules().iter())
    }

    /// Returns the total number of rules across all rulesets.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rulesets.iter().map(|r| r.rules().len()).sum()
    }

    /// Returns the registered rulesets in registry order.
    #[must_use]
    pub fn rulesets(&self) -> &[&'static dyn Ruleset] {
        &self.rulesets
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn builtin_loads_all_rule_families() {
        let registry = RulesetRegistry::builtin();
        assert_eq!(registry.rule_count(), 4);
    }

    #[test]
    fn rule_labels_are_unique() {
        let registry = RulesetRegistry::builtin();
        let labels: HashSet<&str> = registry.all_rules().map(|r| r.label).collect();
        assert_eq!(labels.len(), registry.rule_count());
    }

    #[test]
    fn rule_ids_are_unique() {
        let registry = RulesetRegistry::builtin();
        let ids: HashSet<&str> = registry.all_rules().map(|r| r.id).collect();
        assert_eq!(ids.len(), registry.rule_count());
    }

    #[test]
    fn registry_order_is_fixed() {
        let registry = RulesetRegistry::builtin();
        let labels: Vec<&str> = registry.all_rules().map(|r| r.label).collect();
        assert_eq!(
            labels,
            ["AWS Access Key", "GitHub Token", "Generic API Key", "Private Key"]
        );
    }

    #[test]
    fn all_rules_declare_keywords() {
        let registry = RulesetRegistry::builtin();
        for rule in registry.all_rules() {
            assert!(!rule.keywords.is_empty(), "rule {} has no keywords", rule.id);
        }
    }

    #[test]
    fn debug_impl_shows_ruleset_count() {
        let registry = RulesetRegistry::builtin();
        let debug = format!("{registry:?}");
        assert!(debug.contains("RulesetRegistry"));
    }
}
