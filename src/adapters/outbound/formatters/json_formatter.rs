use crate::detection::domain::ClusterReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

/// Wire shape expected by the inventory API
#[derive(Debug, Serialize)]
pub(crate) struct ClusterInfo<'a> {
    cluster_name: &'a str,
    kube_version: &'a str,
    helm_charts: Vec<HelmChartInfo<'a>>,
}

#[derive(Debug, Serialize)]
struct HelmChartInfo<'a> {
    chart_name: &'a str,
    version: String,
    namespace: &'a str,
}

/// JsonReportFormatter adapter producing the inventory API payload
///
/// Field names (`helm_charts`, `chart_name`) are fixed by the receiving API
/// even though detections come from images rather than Helm releases.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Builds the serializable API document for `report`
    pub(crate) fn document(report: &ClusterReport) -> ClusterInfo<'_> {
        ClusterInfo {
            cluster_name: report.cluster_name(),
            kube_version: report.kube_version(),
            helm_charts: report
                .components()
                .iter()
                .map(|component| HelmChartInfo {
                    chart_name: component.application_name(),
                    version: component.version().to_string(),
                    namespace: component.namespace(),
                })
                .collect(),
        }
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, report: &ClusterReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(&Self::document(report))?)
    }
}
