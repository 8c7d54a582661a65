use crate::detection::domain::{ImageReference, WorkloadSpec};
use std::collections::HashSet;

/// Distinct image references observed in one namespace
///
/// This is the per-namespace accumulator of a scan; each namespace gets its
/// own value, so namespaces can be collected independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceImages {
    namespace: String,
    images: HashSet<ImageReference>,
}

impl NamespaceImages {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            images: HashSet::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Unordered view of the collected images
    pub fn images(&self) -> &HashSet<ImageReference> {
        &self.images
    }

    /// Images in lexical order, for deterministic iteration
    pub fn sorted(&self) -> Vec<&ImageReference> {
        let mut images: Vec<&ImageReference> = self.images.iter().collect();
        images.sort();
        images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Adds every main and init container image of `workload`
    pub fn absorb(mut self, workload: &WorkloadSpec) -> Self {
        self.images.extend(
            workload
                .images()
                .filter(|image| !image.is_empty())
                .cloned(),
        );
        self
    }
}

/// ImageCollector service for gathering the image set of a namespace
pub struct ImageCollector;

impl ImageCollector {
    /// Collects the deduplicated images of all `workloads` in `namespace`
    ///
    /// Containers without an image are skipped.
    pub fn collect(namespace: &str, workloads: &[WorkloadSpec]) -> NamespaceImages {
        workloads
            .iter()
            .fold(NamespaceImages::new(namespace), |acc, workload| {
                acc.absorb(workload)
            })
    }
}
