use super::ImageReference;
use crate::shared::error::{PatternKind, ScanError};
use crate::shared::Result;
use regex::Regex;

/// A named pattern pair recognizing one application from an image reference
///
/// Both patterns are compiled when the rule is built, so a `DetectionRule`
/// value is always usable.
#[derive(Debug, Clone)]
pub struct DetectionRule {
    application_name: String,
    detection_pattern: Regex,
    version_pattern: Regex,
}

impl DetectionRule {
    /// Compiles a rule from its raw patterns
    ///
    /// # Errors
    /// Returns `ScanError::InvalidPattern` naming the application when
    /// either pattern is not a valid regular expression.
    pub fn new(application_name: &str, detection_regex: &str, version_regex: &str) -> Result<Self> {
        let detection_pattern = compile(application_name, PatternKind::Detection, detection_regex)?;
        let version_pattern = compile(application_name, PatternKind::Version, version_regex)?;

        Ok(Self {
            application_name: application_name.to_string(),
            detection_pattern,
            version_pattern,
        })
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn detection_pattern(&self) -> &str {
        self.detection_pattern.as_str()
    }

    pub fn version_pattern(&self) -> &str {
        self.version_pattern.as_str()
    }

    /// Unanchored match of the detection pattern against the full image string
    pub fn matches(&self, image: &ImageReference) -> bool {
        self.detection_pattern.is_match(image.as_str())
    }

    /// Leftmost whole match of the version pattern, if any
    pub fn raw_version<'a>(&self, image: &'a ImageReference) -> Option<&'a str> {
        self.version_pattern
            .find(image.as_str())
            .map(|m| m.as_str())
    }
}

fn compile(application_name: &str, kind: PatternKind, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        ScanError::InvalidPattern {
            application: application_name.to_string(),
            kind,
            details: e.to_string(),
        }
        .into()
    })
}

/// Detection rules in declaration order
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<DetectionRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<DetectionRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[DetectionRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
