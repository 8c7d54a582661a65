use std::cmp::Ordering;

/// A `major.minor.patch` version extracted from an image reference
///
/// Components keep the digits exactly as they appeared in the image
/// (`07` stays `07`). Ordering is numeric per component, so `1.10.0`
/// sorts above `1.9.0`; equal numeric values differing only in leading
/// zeros fall back to string order to stay consistent with `Eq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedVersion {
    major: String,
    minor: String,
    patch: String,
}

impl NormalizedVersion {
    /// Builds a version from digit-only components
    ///
    /// Returns `None` if any component is empty or contains a non-digit.
    pub fn new(major: &str, minor: &str, patch: &str) -> Option<Self> {
        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !(is_digits(major) && is_digits(minor) && is_digits(patch)) {
            return None;
        }

        Some(Self {
            major: major.to_string(),
            minor: minor.to_string(),
            patch: patch.to_string(),
        })
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }

    pub fn patch(&self) -> &str {
        &self.patch
    }
}

impl std::fmt::Display for NormalizedVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Ord for NormalizedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_numeric(&self.major, &other.major)
            .then_with(|| compare_numeric(&self.minor, &other.minor))
            .then_with(|| compare_numeric(&self.patch, &other.patch))
            .then_with(|| self.to_string().cmp(&other.to_string()))
    }
}

impl PartialOrd for NormalizedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compares two digit strings by value without parsing, so arbitrarily
/// long components cannot overflow.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
