/// Detection domain - image inventory, rule matching and version normalization
///
/// Contains no I/O; everything here is driven by the application layer
/// through values handed in by the outbound ports.
pub mod domain;
pub mod policies;
pub mod services;
