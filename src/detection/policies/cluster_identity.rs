/// Cluster name used when neither an override nor the platform provides one
pub const DEFAULT_CLUSTER_NAME: &str = "unknown-cluster";

/// Kubernetes version used when the API server cannot be queried
pub const DEFAULT_KUBE_VERSION: &str = "unknown-version";

/// ClusterIdentity policy for choosing the report's cluster name and version
///
/// Priority order for the name:
/// 1. configured override (if non-blank)
/// 2. name reported by the platform (if non-blank)
/// 3. `DEFAULT_CLUSTER_NAME`
pub struct ClusterIdentity;

impl ClusterIdentity {
    pub fn resolve_name(configured: Option<&str>, platform: Option<String>) -> String {
        configured
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .or_else(|| {
                platform
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
            })
            .unwrap_or_else(|| DEFAULT_CLUSTER_NAME.to_string())
    }

    pub fn resolve_version(platform: Option<String>) -> String {
        platform
            .filter(|version| !version.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_KUBE_VERSION.to_string())
    }
}
