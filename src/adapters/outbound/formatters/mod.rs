/// Formatter adapters for the cluster report
mod json_formatter;
mod markdown_formatter;

pub use json_formatter::JsonReportFormatter;
pub use markdown_formatter::MarkdownReportFormatter;
