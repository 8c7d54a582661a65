use crate::detection::domain::RuleSet;

/// ScanRequest - Internal request DTO for the cluster scan use case
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Detection rules loaded through `RuleStore`
    pub rules: RuleSet,
    /// Cluster name override; takes precedence over the platform value
    pub cluster_name: Option<String>,
}

impl ScanRequest {
    pub fn new(rules: RuleSet, cluster_name: Option<String>) -> Self {
        Self {
            rules,
            cluster_name,
        }
    }
}
