use crate::shared::Result;
use std::path::Path;

/// RuleReader port for reading the detection rules document
///
/// This port abstracts where the rules come from; parsing happens in the
/// `RuleStore` domain service.
pub trait RuleReader {
    /// Reads the raw rules document at `path`
    ///
    /// # Errors
    /// Returns `ScanError::ConfigReadError` if the document does not exist,
    /// is not a regular file, is too large or cannot be read.
    fn read_rules(&self, path: &Path) -> Result<String>;
}
