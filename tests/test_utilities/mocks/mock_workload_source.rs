use async_trait::async_trait;
use keepup_scanner::prelude::*;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Mock WorkloadSource backed by a namespace -> workloads map
#[derive(Default, Clone)]
pub struct MockWorkloadSource {
    namespaces: BTreeMap<String, Vec<WorkloadSpec>>,
    failing_namespace: Option<String>,
    /// Every call made, in order ("namespaces" or "<kind>/<namespace>")
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockWorkloadSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespaces.entry(namespace.to_string()).or_default();
        self
    }

    pub fn with_workload(
        mut self,
        namespace: &str,
        kind: WorkloadKind,
        name: &str,
        images: &[&str],
    ) -> Self {
        let containers = images.iter().map(|i| ImageReference::from(*i)).collect();
        self.namespaces
            .entry(namespace.to_string())
            .or_default()
            .push(WorkloadSpec::new(kind, name, containers, vec![]));
        self
    }

    pub fn with_init_container(mut self, namespace: &str, name: &str, image: &str) -> Self {
        self.namespaces
            .entry(namespace.to_string())
            .or_default()
            .push(WorkloadSpec::new(
                WorkloadKind::Deployment,
                name,
                vec![],
                vec![ImageReference::from(image)],
            ));
        self
    }

    /// Listing workloads in `namespace` fails
    pub fn with_failure_in(mut self, namespace: &str) -> Self {
        self.failing_namespace = Some(namespace.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WorkloadSource for MockWorkloadSource {
    async fn list_namespaces(&self) -> Result<Vec<String>> {
        self.calls.lock().unwrap().push("namespaces".to_string());
        Ok(self.namespaces.keys().cloned().collect())
    }

    async fn list_workloads(&self, kind: WorkloadKind, namespace: &str) -> Result<Vec<WorkloadSpec>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}/{}", kind, namespace));

        if self.failing_namespace.as_deref() == Some(namespace) {
            anyhow::bail!("Mock listing failure: {} in {}", kind, namespace);
        }

        Ok(self
            .namespaces
            .get(namespace)
            .map(|workloads| {
                workloads
                    .iter()
                    .filter(|w| w.kind() == kind)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
