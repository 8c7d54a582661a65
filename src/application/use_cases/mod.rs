/// Use cases - Application business logic
///
/// Use cases orchestrate the detection services and coordinate with
/// infrastructure through ports.
mod scan_cluster;

pub use scan_cluster::ScanClusterUseCase;
