//! `[adapter]` section configuration.
//!
//! Settings handed to the external output adapter.
//!
//! # Example
//!
//! ```toml
//! [adapter]
//! kind = "static"        # Output adapter (only `static` is implemented)
//! fallback = "404.html"  # SPA fallback page written by the adapter
//! precompress = false    # Emit precompressed variants next to assets
//! strict = true          # Fail the build when pages are left unadapted
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::AdapterKind;

/// Adapter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Adapter kind name. Only "static" is implemented.
    pub kind: String,

    /// Fallback page filename for single-page-app routing.
    pub fallback: Option<String>,

    /// Emit precompressed (.gz/.br) variants next to assets.
    pub precompress: bool,

    /// Error when a page cannot be adapted instead of skipping it.
    pub strict: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            kind: AdapterKind::Static.as_str().to_string(),
            fallback: None,
            precompress: false,
            strict: true,
        }
    }
}

impl AdapterConfig {
    /// Validate adapter configuration.
    ///
    /// # Checks
    /// - `kind` names a known adapter
    /// - `fallback` is a bare filename, not a path
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if AdapterKind::parse(&self.kind).is_none() {
            diag.error_with_hint(
                FieldPath::new("adapter.kind"),
                format!("unknown adapter kind: {}", self.kind),
                format!("expected one of: {}", AdapterKind::KNOWN.join(", ")),
            );
        }

        if let Some(fallback) = &self.fallback {
            if fallback.is_empty() {
                diag.error(FieldPath::new("adapter.fallback"), "must not be empty");
            } else if fallback.contains(['/', '\\']) {
                diag.error_with_hint(
                    FieldPath::new("adapter.fallback"),
                    format!("must be a bare filename: {fallback}"),
                    "the adapter writes it into the output root, e.g. 404.html",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_adapter_config() {
        let config = test_parse_config(
            "[adapter]\nkind = \"static\"\nfallback = \"404.html\"\nprecompress = true\nstrict = false",
        );

        assert_eq!(config.adapter.kind, "static");
        assert_eq!(config.adapter.fallback.as_deref(), Some("404.html"));
        assert!(config.adapter.precompress);
        assert!(!config.adapter.strict);
    }

    #[test]
    fn test_adapter_config_defaults() {
        let config = test_parse_config("");

        assert_eq!(config.adapter.kind, "static");
        assert!(config.adapter.fallback.is_none());
        assert!(!config.adapter.precompress);
        assert!(config.adapter.strict);
    }

    #[test]
    fn test_adapter_unknown_kind_rejected() {
        let config = test_parse_config("[adapter]\nkind = \"node\"");

        let mut diag = ConfigDiagnostics::new();
        config.adapter.validate(&mut diag);
        assert!(diag.has_errors());
        assert!(
            diag.errors()[0]
                .hint
                .as_deref()
                .unwrap()
                .contains("static")
        );
    }

    #[test]
    fn test_adapter_fallback_path_rejected() {
        let config = test_parse_config("[adapter]\nfallback = \"pages/404.html\"");

        let mut diag = ConfigDiagnostics::new();
        config.adapter.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_adapter_fallback_empty_rejected() {
        let config = test_parse_config("[adapter]\nfallback = \"\"");

        let mut diag = ConfigDiagnostics::new();
        config.adapter.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_adapter_unknown_field_detected() {
        let content = "[adapter]\nsplit = true";
        let (_, ignored) = crate::config::SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.iter().any(|f| f.contains("split")));
    }
}
