use crate::detection::domain::ClusterReport;

/// Outcome of handing the report to the report sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// The sink accepted the report
    Delivered,
    /// The sink rejected the report or could not be reached; the run still succeeds
    Failed(String),
    /// No sink was configured
    Skipped,
}

/// ScanResponse - Internal response DTO from the cluster scan use case
#[derive(Debug, Clone)]
pub struct ScanResponse {
    pub report: ClusterReport,
    pub delivery: DeliveryStatus,
    /// Distinct images inspected across all namespaces
    pub images_scanned: usize,
    /// Matched images dropped because no version could be extracted
    pub dropped_without_version: usize,
}

impl ScanResponse {
    pub fn new(
        report: ClusterReport,
        delivery: DeliveryStatus,
        images_scanned: usize,
        dropped_without_version: usize,
    ) -> Self {
        Self {
            report,
            delivery,
            images_scanned,
            dropped_without_version,
        }
    }
}
