mod cluster_identity;
mod version_precedence;

pub use cluster_identity::{ClusterIdentity, DEFAULT_CLUSTER_NAME, DEFAULT_KUBE_VERSION};
pub use version_precedence::VersionPrecedence;
