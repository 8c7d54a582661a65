pub mod cluster_report;
pub mod detected_component;
pub mod detection_rule;
pub mod image_reference;
pub mod version;
pub mod workload;

pub use cluster_report::ClusterReport;
pub use detected_component::DetectedComponent;
pub use detection_rule::{DetectionRule, RuleSet};
pub use image_reference::ImageReference;
pub use version::NormalizedVersion;
pub use workload::{WorkloadKind, WorkloadSpec};
