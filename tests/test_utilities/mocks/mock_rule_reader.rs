use keepup_scanner::prelude::*;
use std::path::Path;

/// Mock RuleReader serving an in-memory rules document
pub struct MockRuleReader {
    content: String,
    should_fail: bool,
}

impl MockRuleReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl RuleReader for MockRuleReader {
    fn read_rules(&self, path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock read failure: {}", path.display());
        }
        Ok(self.content.clone())
    }
}
