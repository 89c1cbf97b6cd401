//! Build mode detection for development/production builds.

/// Argument token that selects development mode.
const DEV_TOKEN: &str = "dev";

/// Build mode for a single invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Development: the site is served from the root, without a deployment
    /// prefix.
    Development,

    /// Production: the site is deployed under the configured base path.
    Production,
}

impl BuildMode {
    /// Detect the build mode from the invoking process's argument list.
    ///
    /// Development mode is selected iff the list contains the literal token
    /// `dev`. Anything else, including an empty list, means production.
    pub fn detect<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if args.into_iter().any(|arg| arg.as_ref() == DEV_TOKEN) {
            Self::Development
        } else {
            Self::Production
        }
    }

    /// Check if this is development mode.
    #[inline]
    pub const fn is_dev(self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_dev_token() {
        let mode = BuildMode::detect(["node", "build", "dev"]);
        assert_eq!(mode, BuildMode::Development);
        assert!(mode.is_dev());
    }

    #[test]
    fn test_detect_without_dev_token() {
        let mode = BuildMode::detect(["node", "build"]);
        assert_eq!(mode, BuildMode::Production);
        assert!(!mode.is_dev());
    }

    #[test]
    fn test_detect_empty_args_is_production() {
        let args: [&str; 0] = [];
        assert_eq!(BuildMode::detect(args), BuildMode::Production);
    }

    #[test]
    fn test_detect_requires_exact_token() {
        // Substrings and different casing do not count
        assert_eq!(
            BuildMode::detect(["dev-server", "devel", "Dev"]),
            BuildMode::Production
        );
    }

    #[test]
    fn test_detect_token_position_is_irrelevant() {
        assert_eq!(BuildMode::detect(["dev"]), BuildMode::Development);
        assert_eq!(
            BuildMode::detect(["a", "b", "c", "dev"]),
            BuildMode::Development
        );
    }

    #[test]
    fn test_as_str() {
        assert_eq!(BuildMode::Development.as_str(), "development");
        assert_eq!(BuildMode::Production.as_str(), "production");
    }
}
