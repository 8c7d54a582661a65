/// Ports module defining interfaces for hexagonal architecture
///
/// The scanner is only driven from the CLI, so there are no inbound ports;
/// outbound ports describe everything the application core needs from the
/// cluster, the filesystem and the report endpoint.
pub mod outbound;
