/// Network adapters for external API calls
mod api_report_sink;

pub use api_report_sink::ApiReportSink;
