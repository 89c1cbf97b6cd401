//! `[site]` section configuration.
//!
//! Site metadata and the deployment URL.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My Site"
//! url = "https://user.github.io/my-project"
//! ```
//!
//! When `url` is set, its path component becomes the production base path,
//! overriding `[paths] base`. A project site URL therefore needs no
//! separate base path entry.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Site metadata settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title (metadata only, never affects resolution).
    pub title: String,

    /// Full deployment URL. Optional; the path component, when present,
    /// overrides `[paths] base`.
    pub url: Option<String>,
}

impl SiteSectionConfig {
    /// Validate site settings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.url
            && url::Url::parse(url).is_err()
        {
            diag.error_with_hint(
                FieldPath::new("site.url"),
                format!("invalid URL: {url}"),
                "include the scheme, e.g. https://user.github.io/my-project",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_site_config() {
        let config = test_parse_config(
            "[site]\ntitle = \"My Site\"\nurl = \"https://user.github.io/my-project\"",
        );

        assert_eq!(config.site.title, "My Site");
        assert_eq!(
            config.site.url.as_deref(),
            Some("https://user.github.io/my-project")
        );
    }

    #[test]
    fn test_site_config_defaults() {
        let config = test_parse_config("");

        assert_eq!(config.site.title, "");
        assert!(config.site.url.is_none());
    }

    #[test]
    fn test_site_url_validation() {
        let config = test_parse_config("[site]\nurl = \"not a url\"");

        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.has_errors());
        assert!(diag.errors()[0].field.as_str().contains("site.url"));
    }

    #[test]
    fn test_site_url_validation_accepts_valid() {
        let config = test_parse_config("[site]\nurl = \"https://example.com/blog\"");

        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_site_unknown_field_detected() {
        let content = "[site]\ntitle = \"Test\"\nunknown = \"field\"";
        let (_, ignored) = crate::config::SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.iter().any(|f| f.contains("unknown")));
    }
}
