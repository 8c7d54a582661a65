/// Kubernetes adapters backed by kube-rs
mod kube_workload_source;
mod pod_templates;

pub use kube_workload_source::KubeWorkloadSource;
