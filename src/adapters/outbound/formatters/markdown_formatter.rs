use crate::detection::domain::ClusterReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Markdown table header for detected components
const TABLE_HEADER: &str = "| Namespace | Application | Version |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|-----------|-------------|---------|\n";

/// MarkdownReportFormatter adapter for a human-readable inventory
pub struct MarkdownReportFormatter;

impl MarkdownReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownReportFormatter {
    fn format(&self, report: &ClusterReport) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "# Cluster Inventory")?;
        writeln!(output)?;
        writeln!(
            output,
            "- **Cluster**: {}",
            Self::escape_markdown_table_cell(report.cluster_name())
        )?;
        writeln!(
            output,
            "- **Kubernetes**: {}",
            Self::escape_markdown_table_cell(report.kube_version())
        )?;
        writeln!(output)?;
        writeln!(output, "## Detected Components")?;
        writeln!(output)?;

        if report.components().is_empty() {
            writeln!(output, "No known applications were detected.")?;
            return Ok(output);
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for component in report.components() {
            writeln!(
                output,
                "| {} | {} | {} |",
                Self::escape_markdown_table_cell(component.namespace()),
                Self::escape_markdown_table_cell(component.application_name()),
                component.version()
            )?;
        }

        writeln!(output)?;
        writeln!(
            output,
            "{} component(s) across {} namespace(s)",
            report.components().len(),
            report.namespace_count()
        )?;

        Ok(output)
    }
}
