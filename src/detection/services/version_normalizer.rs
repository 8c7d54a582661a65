use crate::detection::domain::{DetectionRule, ImageReference, NormalizedVersion};
use once_cell::sync::Lazy;
use regex::Regex;

/// `<digits>.<digits>` with an optional `.<digits>` patch component
static SEMVER_CORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").expect("version pattern is valid"));

/// Patch component assumed when a tag only carries `major.minor`
const DEFAULT_PATCH: &str = "0";

/// VersionNormalizer service reducing image tags to `major.minor.patch`
///
/// "No version" is an ordinary outcome and is returned as `None`, never as
/// `0.0.0` or an empty string.
pub struct VersionNormalizer;

impl VersionNormalizer {
    /// Extracts the version of `image` using the matched rule's version pattern
    ///
    /// The rule's pattern selects a raw substring (its leftmost whole match),
    /// which is then normalized.
    pub fn extract(rule: &DetectionRule, image: &ImageReference) -> Option<NormalizedVersion> {
        rule.raw_version(image).and_then(Self::normalize)
    }

    /// Normalizes a raw version substring such as `3.11`, `v3.11.4-alpine`
    /// or `redis:7.2.4`
    ///
    /// Pre-release and build metadata are dropped; digits are kept as-is.
    pub fn normalize(raw: &str) -> Option<NormalizedVersion> {
        let caps = SEMVER_CORE.captures(raw)?;
        let major = caps.get(1)?.as_str();
        let minor = caps.get(2)?.as_str();
        let patch = caps.get(3).map_or(DEFAULT_PATCH, |m| m.as_str());

        NormalizedVersion::new(major, minor, patch)
    }
}
