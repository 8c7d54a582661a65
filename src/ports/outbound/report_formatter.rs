use crate::detection::domain::ClusterReport;
use crate::shared::Result;

/// ReportFormatter port for serializing a cluster report
pub trait ReportFormatter {
    /// Formats the report as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &ClusterReport) -> Result<String>;
}
