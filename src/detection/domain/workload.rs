use super::ImageReference;

/// Workload kinds whose pod templates are inspected for container images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkloadKind {
    Deployment,
    StatefulSet,
    DaemonSet,
}

impl WorkloadKind {
    /// All inspected kinds, in the order they are queried per namespace
    pub const ALL: [WorkloadKind; 3] = [
        WorkloadKind::Deployment,
        WorkloadKind::StatefulSet,
        WorkloadKind::DaemonSet,
    ];
}

impl std::fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkloadKind::Deployment => write!(f, "Deployment"),
            WorkloadKind::StatefulSet => write!(f, "StatefulSet"),
            WorkloadKind::DaemonSet => write!(f, "DaemonSet"),
        }
    }
}

/// The container images declared by one workload's pod template
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadSpec {
    kind: WorkloadKind,
    name: String,
    containers: Vec<ImageReference>,
    init_containers: Vec<ImageReference>,
}

impl WorkloadSpec {
    pub fn new(
        kind: WorkloadKind,
        name: impl Into<String>,
        containers: Vec<ImageReference>,
        init_containers: Vec<ImageReference>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            containers,
            init_containers,
        }
    }

    pub fn kind(&self) -> WorkloadKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn containers(&self) -> &[ImageReference] {
        &self.containers
    }

    pub fn init_containers(&self) -> &[ImageReference] {
        &self.init_containers
    }

    /// Main container images followed by init container images
    pub fn images(&self) -> impl Iterator<Item = &ImageReference> {
        self.containers.iter().chain(self.init_containers.iter())
    }
}
