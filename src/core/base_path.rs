//! Base path type for deployment URL prefixes.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// URL path prefix under which a deployed site is served.
///
/// Invariants:
/// - The root deployment is the empty string
/// - Any other value starts with `/` and has no trailing `/`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasePath(Arc<str>);

impl BasePath {
    /// Root deployment (no prefix). This is what development builds get.
    pub fn root() -> Self {
        Self(Arc::from(""))
    }

    /// Create from a raw prefix, normalizing slashes.
    ///
    /// Leading/trailing whitespace is trimmed, trailing slashes are
    /// stripped, and a missing leading slash is added. Empty input and a
    /// bare `/` collapse to the root path.
    pub fn from_prefix(prefix: &str) -> Self {
        let trimmed = prefix.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::root();
        }

        if trimmed.starts_with('/') {
            Self(Arc::from(trimmed))
        } else {
            Self(Arc::from(format!("/{trimmed}")))
        }
    }

    /// Get the prefix as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether this is the root deployment.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BasePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for BasePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_empty() {
        let base = BasePath::root();
        assert!(base.is_root());
        assert_eq!(base.as_str(), "");
    }

    #[test]
    fn test_from_prefix_adds_leading_slash() {
        let base = BasePath::from_prefix("my-project");
        assert_eq!(base.as_str(), "/my-project");
    }

    #[test]
    fn test_from_prefix_keeps_leading_slash() {
        let base = BasePath::from_prefix("/wxweguc54333.github.io");
        assert_eq!(base.as_str(), "/wxweguc54333.github.io");
    }

    #[test]
    fn test_from_prefix_strips_trailing_slashes() {
        assert_eq!(BasePath::from_prefix("/a/").as_str(), "/a");
        assert_eq!(BasePath::from_prefix("/a//").as_str(), "/a");
    }

    #[test]
    fn test_from_prefix_collapses_root_forms() {
        assert!(BasePath::from_prefix("").is_root());
        assert!(BasePath::from_prefix("/").is_root());
        assert!(BasePath::from_prefix("  ").is_root());
    }

    #[test]
    fn test_from_prefix_trims_whitespace() {
        assert_eq!(BasePath::from_prefix("  /a  ").as_str(), "/a");
    }

    #[test]
    fn test_from_prefix_keeps_interior_slashes() {
        assert_eq!(BasePath::from_prefix("a/b/c").as_str(), "/a/b/c");
    }

    #[test]
    fn test_serialize_as_plain_string() {
        let base = BasePath::from_prefix("/site");
        assert_eq!(serde_json::to_string(&base).unwrap(), "\"/site\"");

        let root = BasePath::root();
        assert_eq!(serde_json::to_string(&root).unwrap(), "\"\"");
    }
}
