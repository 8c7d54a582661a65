use crate::ports::outbound::RuleReader;
use crate::shared::error::ScanError;
use crate::shared::security::{validate_regular_file, MAX_RULES_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading the detection rules document
///
/// Rejects symbolic links, non-regular files and oversized documents before
/// reading.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleReader for FileSystemReader {
    fn read_rules(&self, path: &Path) -> Result<String> {
        let read_error = |details: String| ScanError::ConfigReadError {
            path: path.to_path_buf(),
            details,
        };

        if !path.exists() {
            return Err(read_error("file does not exist".to_string()).into());
        }

        validate_regular_file(path, "rules file", MAX_RULES_FILE_SIZE)
            .map_err(|e| read_error(e.to_string()))?;

        let content = fs::read_to_string(path).map_err(|e| read_error(e.to_string()))?;
        log::debug!("Read {} bytes of detection rules from {}", content.len(), path.display());
        Ok(content)
    }
}
