use crate::detection::domain::{WorkloadKind, WorkloadSpec};
use crate::shared::Result;
use async_trait::async_trait;

/// WorkloadSource port for reading workloads from the cluster
///
/// Implementations only observe; they never modify cluster resources.
/// Any error is fatal for the run.
#[async_trait]
pub trait WorkloadSource: Send + Sync {
    /// Lists the names of all namespaces visible to the scanner
    async fn list_namespaces(&self) -> Result<Vec<String>>;

    /// Lists workloads of one kind in one namespace
    ///
    /// # Errors
    /// Returns `ScanError::WorkloadSourceError` on transport or
    /// authorization failures.
    async fn list_workloads(&self, kind: WorkloadKind, namespace: &str)
        -> Result<Vec<WorkloadSpec>>;
}
