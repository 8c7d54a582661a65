/// NewType wrapper for a container image reference
///
/// Opaque: registry, repository path and tag or digest are kept together
/// exactly as they appear in the pod template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageReference(String);

impl ImageReference {
    pub fn new(image: impl Into<String>) -> Self {
        Self(image.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for ImageReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ImageReference {
    fn from(image: &str) -> Self {
        Self::new(image)
    }
}

impl From<String> for ImageReference {
    fn from(image: String) -> Self {
        Self::new(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_reference_keeps_full_string() {
        let image = ImageReference::new("registry.example.com:5000/team/redis:7.2.4");
        assert_eq!(image.as_str(), "registry.example.com:5000/team/redis:7.2.4");
        assert_eq!(
            format!("{}", image),
            "registry.example.com:5000/team/redis:7.2.4"
        );
    }

    #[test]
    fn test_image_reference_digest_form() {
        let image = ImageReference::from("nginx@sha256:0d17b565c37bcbd895e9d92315a05c1c3c9a29f762b011a10c54a66cd53c9b31");
        assert!(image.as_str().contains("@sha256:"));
    }

    #[test]
    fn test_image_reference_empty() {
        assert!(ImageReference::new("").is_empty());
        assert!(ImageReference::new("  ").is_empty());
        assert!(!ImageReference::new("busybox").is_empty());
    }
}
