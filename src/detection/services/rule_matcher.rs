use crate::detection::domain::{DetectionRule, ImageReference, RuleSet};

/// RuleMatcher service selecting the rule that identifies an image
///
/// Rules are tried in declaration order and the first whose detection
/// pattern matches anywhere in the image string wins. There is no scoring.
pub struct RuleMatcher;

impl RuleMatcher {
    pub fn first_match<'r>(image: &ImageReference, rules: &'r RuleSet) -> Option<&'r DetectionRule> {
        rules.rules().iter().find(|rule| rule.matches(image))
    }
}
