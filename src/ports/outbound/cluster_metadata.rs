use crate::shared::Result;
use async_trait::async_trait;

/// ClusterMetadataSource port for the values identifying the scanned cluster
///
/// Failures here are not fatal; the application falls back to defaults.
#[async_trait]
pub trait ClusterMetadataSource: Send + Sync {
    /// Cluster name as recorded by the platform, if it records one
    async fn cluster_name(&self) -> Result<Option<String>>;

    /// Kubernetes API server version (e.g. `v1.31.2`)
    async fn kube_version(&self) -> Result<String>;
}
