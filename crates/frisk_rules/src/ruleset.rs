//! Ruleset trait for rule definitions.

use crate::rule::RuleDef;

/// A family of related secret detection rules.
///
/// Each ruleset contributes one or more [`RuleDef`] entries. Rulesets are
/// the unit of extension: new detections are added by creating a ruleset
/// module and registering it in `rulesets::builtin_rulesets`.
pub trait Ruleset: Send + Sync {
    /// Returns the unique identifier for this ruleset (e.g. `"github"`).
    fn id(&self) -> &'static str;

    /// Returns the human-readable display name (e.g. `"GitHub"`).
    fn name(&self) -> &'static str;

    /// Returns the static slice of rule definitions this ruleset contributes.
    fn rules(&self) -> &'static [RuleDef];
}

/// Generates a [`Ruleset`] implementation from a list of rules.
///
/// Creates a unit struct, implements `Ruleset` for it, and emits basic
/// tests asserting the ruleset has rules, they all belong to the declared
/// group, and their regexes compile.
#[macro_export]
macro_rules! declare_ruleset {
    (
        $struct_name:ident,
        id: $id:expr,
        name: $display_name:expr,
        group: $group:expr,
        rules: [$($rule:expr),+ $(,)?] $(,)?
    ) => {
        use $crate::rule::{Group, RuleDef, Severity};
        use $crate::ruleset::Ruleset;

        static RULES: &[RuleDef] = &[$($rule),+];

        #[doc = concat!("Detection ruleset for ", $display_name, ".")]
        pub struct $struct_name;

        impl Ruleset for $struct_name {
            fn id(&self) -> &'static str {
                $id
            }

            fn name(&self) -> &'static str {
                $display_name
            }

            fn rules(&self) -> &'static [RuleDef] {
                RULES
            }
        }

        #[cfg(test)]
        mod ruleset_tests {
            use super::*;

            #[test]
            fn ruleset_has_rules() {
                assert!(!$struct_name.rules().is_empty());
            }

            #[test]
            fn all_rules_have_correct_group() {
                for rule in $struct_name.rules() {
                    assert_eq!(rule.group, $group);
                }
            }

            #[test]
            fn all_regexes_compile() {
                for rule in $struct_name.rules() {
                    assert!(regex::Regex::new(rule.regex).is_ok(), "bad regex in {}", rule.id);
                }
            }
        }
    };
}
