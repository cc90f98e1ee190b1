//! Built-in rulesets for secret detection.
//!
//! Registry order is load-bearing: findings on a line that matches more
//! than one rule are reported in the order the rulesets appear here.

mod aws;
mod generic;
mod github;
mod private_key;

pub use aws::AwsRuleset;
pub use generic::GenericApiKeyRuleset;
pub use github::GitHubRuleset;
pub use private_key::PrivateKeyRuleset;

use crate::ruleset::Ruleset;

/// Returns all built-in rulesets in their fixed registry order.
#[must_use]
pub fn builtin_rulesets() -> Vec<&'static dyn Ruleset> {
    vec![
        &AwsRuleset,
        &GitHubRuleset,
        &GenericApiKeyRuleset,
        &PrivateKeyRuleset,
    ]
}
