use crate::detection::domain::{DetectionRule, RuleSet};
use crate::ports::outbound::RuleReader;
use crate::shared::error::ScanError;
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct DetectionConfigFile {
    docker: Vec<RuleEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RuleEntry {
    application_name: String,
    detection_regex: String,
    version_regex: String,
}

/// RuleStore service for loading the ordered detection rule set
///
/// Loading is all-or-nothing: the first unreadable, malformed or
/// uncompilable entry aborts the load.
pub struct RuleStore;

impl RuleStore {
    /// Reads the rules document through `reader` and parses it
    ///
    /// # Errors
    /// - `ScanError::ConfigReadError` if the document cannot be read
    /// - `ScanError::ConfigParseError` if the YAML structure is malformed
    /// - `ScanError::InvalidPattern` if a regex fails to compile
    pub fn load<R: RuleReader + ?Sized>(reader: &R, path: &Path) -> Result<RuleSet> {
        let content = reader.read_rules(path)?;
        Self::parse(&content, path)
    }

    /// Parses a rules document, preserving declaration order
    ///
    /// `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<RuleSet> {
        let config: DetectionConfigFile =
            serde_yaml_ng::from_str(content).map_err(|e| ScanError::ConfigParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let mut rules = Vec::with_capacity(config.docker.len());
        for (index, entry) in config.docker.into_iter().enumerate() {
            if entry.application_name.trim().is_empty() {
                return Err(ScanError::ConfigParseError {
                    path: path.to_path_buf(),
                    details: format!("docker[{}].applicationName must not be empty", index),
                }
                .into());
            }

            rules.push(DetectionRule::new(
                &entry.application_name,
                &entry.detection_regex,
                &entry.version_regex,
            )?);
        }

        Ok(RuleSet::new(rules))
    }
}
