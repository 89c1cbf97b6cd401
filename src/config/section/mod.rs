//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitebase.toml`:
//!
//! | Module    | TOML Section | Purpose                          |
//! |-----------|--------------|----------------------------------|
//! | `site`    | `[site]`     | Site metadata, deployment URL    |
//! | `paths`   | `[paths]`    | Base path, output directory      |
//! | `adapter` | `[adapter]`  | Output adapter settings          |

mod adapter;
mod paths;
mod site;

pub use adapter::AdapterConfig;
pub use paths::{DEFAULT_BASE, PathsConfig};
pub use site::SiteSectionConfig;
