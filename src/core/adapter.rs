//! Output adapter handle.
//!
//! The adapter is the component of the external build pipeline that turns
//! rendered pages into deployable static output. Here it is configuration
//! only: the resolver selects an adapter and hands it over, it never runs
//! one.

use serde::{Serialize, Serializer};

/// Known adapter kinds. (WIP, only static output supported now)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdapterKind {
    /// Prerendered static output, suitable for GitHub Pages.
    #[default]
    Static,
}

impl AdapterKind {
    /// Names accepted in `[adapter] kind`.
    pub const KNOWN: &'static [&'static str] = &["static"];

    /// Parse an adapter kind name. Returns `None` for unknown kinds.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "static" => Some(Self::Static),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
        }
    }
}

/// Opaque adapter handle attached to a resolved build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Adapter {
    kind: AdapterKind,
}

impl Adapter {
    /// Default adapter, constructed with no parameters.
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn kind(self) -> AdapterKind {
        self.kind
    }
}

impl Serialize for Adapter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.kind.as_str())
    }
}
