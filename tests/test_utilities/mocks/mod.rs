/// Mock implementations for testing
mod mock_cluster_metadata;
mod mock_progress_reporter;
mod mock_report_sink;
mod mock_rule_reader;
mod mock_workload_source;

pub use mock_cluster_metadata::MockClusterMetadata;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_report_sink::MockReportSink;
pub use mock_rule_reader::MockRuleReader;
pub use mock_workload_source::MockWorkloadSource;
