use crate::detection::domain::ClusterReport;
use crate::shared::Result;
use async_trait::async_trait;

/// ReportSink port for delivering the report to its consumer
///
/// The sink owns the wire format. Delivery failures are reported as errors
/// but the application treats them as non-fatal.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Delivers the report
    ///
    /// # Errors
    /// Returns `ScanError::DeliveryFailed` on transport errors or non-2xx
    /// responses.
    async fn deliver(&self, report: &ClusterReport) -> Result<()>;
}
