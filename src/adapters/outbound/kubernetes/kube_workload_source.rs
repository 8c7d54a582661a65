use super::pod_templates::{
    daemon_set_pod_spec, deployment_pod_spec, stateful_set_pod_spec, to_workload_spec,
};
use crate::detection::domain::{WorkloadKind, WorkloadSpec};
use crate::ports::outbound::{ClusterMetadataSource, WorkloadSource};
use crate::shared::error::ScanError;
use crate::shared::Result;
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, StatefulSet};
use k8s_openapi::api::core::v1::{ConfigMap, Namespace, PodSpec};
use k8s_openapi::NamespaceResourceScope;
use kube::api::{Api, ListParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config, Resource};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt::Debug;
use std::path::Path;

/// Objects requested per list call; larger collections are paged
const LIST_PAGE_SIZE: u32 = 500;

const KUBEADM_CONFIG_NAMESPACE: &str = "kube-system";
const KUBEADM_CONFIG_NAME: &str = "kubeadm-config";
const KUBEADM_CLUSTER_CONFIGURATION_KEY: &str = "ClusterConfiguration";

#[derive(Debug, Deserialize)]
struct KubeadmClusterConfiguration {
    #[serde(rename = "clusterName")]
    cluster_name: Option<String>,
}

/// KubeWorkloadSource adapter reading workloads through the Kubernetes API
///
/// Implements both `WorkloadSource` and `ClusterMetadataSource`. Only
/// `list` and `get` verbs are used.
#[derive(Clone)]
pub struct KubeWorkloadSource {
    client: Client,
}

impl KubeWorkloadSource {
    /// Connects using an explicit kubeconfig file, or infers the
    /// configuration (in-cluster service account, then `KUBECONFIG`) when
    /// `kubeconfig` is `None`
    pub async fn connect(kubeconfig: Option<&Path>) -> Result<Self> {
        let connect_error = |details: String| ScanError::WorkloadSourceError {
            operation: "connect to the cluster".to_string(),
            details,
        };

        let client = match kubeconfig {
            Some(path) => {
                let kubeconfig =
                    Kubeconfig::read_from(path).map_err(|e| connect_error(e.to_string()))?;
                let config =
                    Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                        .await
                        .map_err(|e| connect_error(e.to_string()))?;
                log::debug!("Using kubeconfig {}", path.display());
                Client::try_from(config).map_err(|e| connect_error(e.to_string()))?
            }
            None => Client::try_default()
                .await
                .map_err(|e| connect_error(e.to_string()))?,
        };

        Ok(Self::from_client(client))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    async fn list_all<K>(api: &Api<K>) -> std::result::Result<Vec<K>, kube::Error>
    where
        K: Clone + DeserializeOwned + Debug,
    {
        let mut params = ListParams::default().limit(LIST_PAGE_SIZE);
        let mut items = Vec::new();

        loop {
            let page = api.list(&params).await?;
            items.extend(page.items);
            match page.metadata.continue_ {
                Some(token) if !token.is_empty() => params = params.continue_token(&token),
                _ => break,
            }
        }

        Ok(items)
    }

    async fn list_pod_templates<K>(
        &self,
        kind: WorkloadKind,
        namespace: &str,
        pod_spec: fn(&K) -> Option<&PodSpec>,
    ) -> Result<Vec<WorkloadSpec>>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug + Send + Sync,
        <K as Resource>::DynamicType: Default,
    {
        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);
        let objects = Self::list_all(&api)
            .await
            .map_err(|e| ScanError::WorkloadSourceError {
                operation: format!("list {}s in namespace '{}'", kind, namespace),
                details: e.to_string(),
            })?;

        log::debug!("{} {}(s) in namespace {}", objects.len(), kind, namespace);
        Ok(objects
            .iter()
            .map(|object| to_workload_spec(kind, object, pod_spec(object)))
            .collect())
    }
}

#[async_trait]
impl WorkloadSource for KubeWorkloadSource {
    async fn list_namespaces(&self) -> Result<Vec<String>> {
        let api: Api<Namespace> = Api::all(self.client.clone());
        let namespaces = Self::list_all(&api)
            .await
            .map_err(|e| ScanError::WorkloadSourceError {
                operation: "list namespaces".to_string(),
                details: e.to_string(),
            })?;

        Ok(namespaces
            .into_iter()
            .filter_map(|ns| ns.metadata.name)
            .collect())
    }

    async fn list_workloads(
        &self,
        kind: WorkloadKind,
        namespace: &str,
    ) -> Result<Vec<WorkloadSpec>> {
        match kind {
            WorkloadKind::Deployment => {
                self.list_pod_templates::<Deployment>(kind, namespace, deployment_pod_spec)
                    .await
            }
            WorkloadKind::StatefulSet => {
                self.list_pod_templates::<StatefulSet>(kind, namespace, stateful_set_pod_spec)
                    .await
            }
            WorkloadKind::DaemonSet => {
                self.list_pod_templates::<DaemonSet>(kind, namespace, daemon_set_pod_spec)
                    .await
            }
        }
    }
}

#[async_trait]
impl ClusterMetadataSource for KubeWorkloadSource {
    async fn cluster_name(&self) -> Result<Option<String>> {
        let api: Api<ConfigMap> = Api::namespaced(self.client.clone(), KUBEADM_CONFIG_NAMESPACE);
        let config_map = api.get_opt(KUBEADM_CONFIG_NAME).await?;

        Ok(config_map
            .and_then(|cm| cm.data)
            .and_then(|mut data| data.remove(KUBEADM_CLUSTER_CONFIGURATION_KEY))
            .and_then(|configuration| cluster_name_from_kubeadm(&configuration)))
    }

    async fn kube_version(&self) -> Result<String> {
        let info = self.client.apiserver_version().await?;
        Ok(info.git_version)
    }
}

/// Extracts `clusterName` from a kubeadm `ClusterConfiguration` document
fn cluster_name_from_kubeadm(configuration: &str) -> Option<String> {
    match serde_yaml_ng::from_str::<KubeadmClusterConfiguration>(configuration) {
        Ok(parsed) => parsed.cluster_name.filter(|name| !name.trim().is_empty()),
        Err(e) => {
            log::warn!("Could not parse kubeadm ClusterConfiguration: {}", e);
            None
        }
    }
}
