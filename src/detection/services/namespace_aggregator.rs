use crate::detection::domain::{ClusterReport, DetectedComponent, NormalizedVersion};
use crate::detection::policies::VersionPrecedence;
use std::collections::BTreeMap;

/// NamespaceAggregator folds detections into at most one component per
/// (namespace, application)
///
/// The aggregator is a plain value: build one per namespace, then `merge`
/// them in any order. Same-key collisions are settled by
/// `VersionPrecedence`, so the merged result does not depend on the order of
/// `record` or `merge` calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceAggregator {
    components: BTreeMap<(String, String), NormalizedVersion>,
    without_version: usize,
}

impl NamespaceAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one matched image
    ///
    /// Detections without a resolvable version are counted but never reach
    /// the report.
    pub fn record(
        &mut self,
        namespace: &str,
        application_name: &str,
        version: Option<NormalizedVersion>,
    ) {
        let Some(version) = version else {
            self.without_version += 1;
            return;
        };

        let key = (namespace.to_string(), application_name.to_string());
        match self.components.get(&key) {
            Some(current) if !VersionPrecedence::supersedes(current, &version) => {}
            _ => {
                self.components.insert(key, version);
            }
        }
    }

    /// Folds another accumulator into this one
    pub fn merge(mut self, other: NamespaceAggregator) -> Self {
        for ((namespace, application_name), version) in other.components {
            self.record(&namespace, &application_name, Some(version));
        }
        self.without_version += other.without_version;
        self
    }

    /// Number of distinct (namespace, application) entries
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Matches dropped because no version could be extracted
    pub fn without_version(&self) -> usize {
        self.without_version
    }

    /// Assembles the final report, components ordered by namespace then
    /// application name
    pub fn into_report(self, cluster_name: &str, kube_version: &str) -> ClusterReport {
        let components = self
            .components
            .into_iter()
            .map(|((namespace, application_name), version)| {
                DetectedComponent::new(application_name, version, namespace)
            })
            .collect();

        ClusterReport::new(cluster_name, kube_version, components)
    }
}
