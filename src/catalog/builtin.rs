//! The catalog compiled into the binary.

use crate::core::skill::CatalogDocument;
use crate::error::{Result, VsError};

/// Source name reported for the embedded catalog.
pub const BUILTIN_SOURCE: &str = "builtin";

const BUILTIN_CATALOG: &str = include_str!("../../catalog/verified_skills.yaml");

/// Raw YAML of the built-in catalog.
#[must_use]
pub const fn builtin_yaml() -> &'static str {
    BUILTIN_CATALOG
}

/// Parse the built-in catalog document.
pub fn builtin_document() -> Result<CatalogDocument> {
    serde_yaml::from_str(BUILTIN_CATALOG)
        .map_err(|err| VsError::CatalogParse(format!("{BUILTIN_SOURCE}: {err}")))
}
