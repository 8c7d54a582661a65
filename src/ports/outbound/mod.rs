/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (cluster API, file system, network, console).
pub mod cluster_metadata;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod report_sink;
pub mod rule_reader;
pub mod workload_source;

pub use cluster_metadata::ClusterMetadataSource;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use report_sink::ReportSink;
pub use rule_reader::RuleReader;
pub use workload_source::WorkloadSource;
