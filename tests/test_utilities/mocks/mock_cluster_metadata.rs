use async_trait::async_trait;
use keepup_scanner::prelude::*;

/// Mock ClusterMetadataSource with fixed answers
pub struct MockClusterMetadata {
    name: Option<String>,
    version: Option<String>,
}

impl MockClusterMetadata {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            version: Some(version.to_string()),
        }
    }

    /// Platform reports no cluster name; version is known
    pub fn without_name(version: &str) -> Self {
        Self {
            name: None,
            version: Some(version.to_string()),
        }
    }

    /// Every lookup fails
    pub fn with_failure() -> Self {
        Self {
            name: None,
            version: None,
        }
    }
}

#[async_trait]
impl ClusterMetadataSource for MockClusterMetadata {
    async fn cluster_name(&self) -> Result<Option<String>> {
        if self.name.is_none() && self.version.is_none() {
            anyhow::bail!("Mock metadata failure");
        }
        Ok(self.name.clone())
    }

    async fn kube_version(&self) -> Result<String> {
        self.version
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Mock metadata failure"))
    }
}
