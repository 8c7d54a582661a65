use crate::detection::domain::NormalizedVersion;

/// VersionPrecedence policy for resolving same-namespace collisions
///
/// When several images in one namespace are detected as the same
/// application, the highest normalized version is kept. Equal versions keep
/// the entry recorded first, so the outcome never depends on the order
/// images are visited in.
pub struct VersionPrecedence;

impl VersionPrecedence {
    /// Returns true when `candidate` should replace `current`
    pub fn supersedes(current: &NormalizedVersion, candidate: &NormalizedVersion) -> bool {
        candidate > current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> NormalizedVersion {
        let parts: Vec<&str> = s.split('.').collect();
        NormalizedVersion::new(parts[0], parts[1], parts[2]).unwrap()
    }

    #[test]
    fn test_higher_version_supersedes() {
        assert!(VersionPrecedence::supersedes(&v("1.24.0"), &v("1.25.3")));
        assert!(!VersionPrecedence::supersedes(&v("1.25.3"), &v("1.24.0")));
    }

    #[test]
    fn test_equal_version_keeps_current() {
        assert!(!VersionPrecedence::supersedes(&v("7.2.4"), &v("7.2.4")));
    }

    #[test]
    fn test_numeric_not_lexical() {
        assert!(VersionPrecedence::supersedes(&v("1.9.0"), &v("1.10.0")));
    }
}
