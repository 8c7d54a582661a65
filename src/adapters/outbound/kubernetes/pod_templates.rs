use crate::detection::domain::{ImageReference, WorkloadKind, WorkloadSpec};
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, StatefulSet};
use k8s_openapi::api::core::v1::{Container, PodSpec};
use kube::ResourceExt;

pub(super) fn deployment_pod_spec(deployment: &Deployment) -> Option<&PodSpec> {
    deployment.spec.as_ref()?.template.spec.as_ref()
}

pub(super) fn stateful_set_pod_spec(stateful_set: &StatefulSet) -> Option<&PodSpec> {
    stateful_set.spec.as_ref()?.template.spec.as_ref()
}

pub(super) fn daemon_set_pod_spec(daemon_set: &DaemonSet) -> Option<&PodSpec> {
    daemon_set.spec.as_ref()?.template.spec.as_ref()
}

/// Converts one workload object into the images declared by its pod template
///
/// Objects without a pod template yield a spec with no images.
pub(super) fn to_workload_spec<K: ResourceExt>(
    kind: WorkloadKind,
    object: &K,
    pod_spec: Option<&PodSpec>,
) -> WorkloadSpec {
    let (containers, init_containers) = match pod_spec {
        Some(spec) => (
            images(&spec.containers),
            spec.init_containers
                .as_deref()
                .map(images)
                .unwrap_or_default(),
        ),
        None => (Vec::new(), Vec::new()),
    };

    WorkloadSpec::new(kind, object.name_any(), containers, init_containers)
}

fn images(containers: &[Container]) -> Vec<ImageReference> {
    containers
        .iter()
        .filter_map(|c| c.image.as_deref())
        .map(ImageReference::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deployment_containers_and_init_containers() {
        let deployment: Deployment = serde_json::from_value(json!({
            "metadata": { "name": "cache", "namespace": "ns1" },
            "spec": {
                "selector": { "matchLabels": { "app": "cache" } },
                "template": {
                    "spec": {
                        "initContainers": [
                            { "name": "wait", "image": "busybox:1.36" }
                        ],
                        "containers": [
                            { "name": "redis", "image": "redis:7.2.4" },
                            { "name": "exporter", "image": "oliver006/redis_exporter:v1.58.0" }
                        ]
                    }
                }
            }
        }))
        .unwrap();

        let spec = to_workload_spec(
            WorkloadKind::Deployment,
            &deployment,
            deployment_pod_spec(&deployment),
        );

        assert_eq!(spec.name(), "cache");
        assert_eq!(spec.kind(), WorkloadKind::Deployment);
        let containers: Vec<&str> = spec.containers().iter().map(|i| i.as_str()).collect();
        assert_eq!(containers, vec!["redis:7.2.4", "oliver006/redis_exporter:v1.58.0"]);
        let init: Vec<&str> = spec.init_containers().iter().map(|i| i.as_str()).collect();
        assert_eq!(init, vec!["busybox:1.36"]);
    }

    #[test]
    fn test_container_without_image_is_skipped() {
        let daemon_set: DaemonSet = serde_json::from_value(json!({
            "metadata": { "name": "agent" },
            "spec": {
                "selector": { "matchLabels": { "app": "agent" } },
                "template": {
                    "spec": {
                        "containers": [
                            { "name": "no-image" },
                            { "name": "agent", "image": "fluent/fluent-bit:3.0.4" }
                        ]
                    }
                }
            }
        }))
        .unwrap();

        let spec = to_workload_spec(
            WorkloadKind::DaemonSet,
            &daemon_set,
            daemon_set_pod_spec(&daemon_set),
        );
        assert_eq!(spec.containers().len(), 1);
        assert!(spec.init_containers().is_empty());
    }

    #[test]
    fn test_stateful_set_without_spec() {
        let stateful_set: StatefulSet = serde_json::from_value(json!({
            "metadata": { "name": "orphan" }
        }))
        .unwrap();

        let spec = to_workload_spec(
            WorkloadKind::StatefulSet,
            &stateful_set,
            stateful_set_pod_spec(&stateful_set),
        );
        assert_eq!(spec.images().count(), 0);
    }
}
