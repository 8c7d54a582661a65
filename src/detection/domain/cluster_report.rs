use super::DetectedComponent;
use std::collections::BTreeSet;

/// The per-run inventory handed to the report sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterReport {
    cluster_name: String,
    kube_version: String,
    components: Vec<DetectedComponent>,
}

impl ClusterReport {
    pub fn new(
        cluster_name: impl Into<String>,
        kube_version: impl Into<String>,
        mut components: Vec<DetectedComponent>,
    ) -> Self {
        components.sort_by(|a, b| {
            (a.namespace(), a.application_name()).cmp(&(b.namespace(), b.application_name()))
        });
        Self {
            cluster_name: cluster_name.into(),
            kube_version: kube_version.into(),
            components,
        }
    }

    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    pub fn kube_version(&self) -> &str {
        &self.kube_version
    }

    /// Components ordered by namespace, then application name
    pub fn components(&self) -> &[DetectedComponent] {
        &self.components
    }

    /// Number of distinct namespaces with at least one detected component
    pub fn namespace_count(&self) -> usize {
        self.components
            .iter()
            .map(|c| c.namespace())
            .collect::<BTreeSet<&str>>()
            .len()
    }
}
