use super::NormalizedVersion;

/// One application found running in one namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedComponent {
    application_name: String,
    version: NormalizedVersion,
    namespace: String,
}

impl DetectedComponent {
    pub fn new(
        application_name: impl Into<String>,
        version: NormalizedVersion,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            version,
            namespace: namespace.into(),
        }
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn version(&self) -> &NormalizedVersion {
        &self.version
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}
