//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Lookup errors (unknown skill, role, industry)
//! - 2xx: Catalog errors
//! - 3xx: Config errors
//! - 6xx: Storage and serialization errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for machine output.
///
/// Each variant maps to a numeric code (e.g., `SkillNotFound` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Lookup errors (1xx)
    // ========================================
    /// E101: Skill id is not in the catalog
    SkillNotFound,
    /// E102: Role id is not defined for the skill
    RoleNotFound,
    /// E103: Industry id has no annotation in the catalog
    IndustryNotFound,

    // ========================================
    // Catalog errors (2xx)
    // ========================================
    /// E201: Catalog failed load-time validation
    CatalogInvalid,
    /// E202: Catalog document could not be parsed
    CatalogParseError,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E605: Serialization/deserialization failed
    SerializationError,
    /// E606: IO operation failed
    IoError,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: Unexpected internal error
    InternalError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `SkillNotFound` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::SkillNotFound => 101,
            Self::RoleNotFound => 102,
            Self::IndustryNotFound => 103,

            Self::CatalogInvalid => 201,
            Self::CatalogParseError => 202,

            Self::ConfigInvalid => 302,

            Self::SerializationError => 605,
            Self::IoError => 606,

            Self::InternalError => 901,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::SkillNotFound => "Run `vskill list` to see every skill in the catalog",
            Self::RoleNotFound => "Run `vskill show <skill>` to see the roles defined for that skill",
            Self::IndustryNotFound => "Run `vskill industries` to see the annotated industries",
            Self::CatalogInvalid => "Run `vskill validate` to list every catalog issue",
            Self::CatalogParseError => "Check the catalog file syntax. YAML and JSON catalogs are supported",
            Self::ConfigInvalid => "Run `vskill config` to see current values. Check TOML syntax in config file",
            Self::SerializationError => "The data format may be corrupted. Check input data for validity",
            Self::IoError => "File operation failed. Check path exists and permissions are correct",
            Self::InternalError => "An unexpected error occurred. Please report this issue with full error output",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::SkillNotFound
            | Self::RoleNotFound
            | Self::IndustryNotFound
            | Self::CatalogInvalid
            | Self::CatalogParseError
            | Self::ConfigInvalid
            | Self::IoError => true,

            Self::SerializationError | Self::InternalError => false,
        }
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "lookup",
            2 => "catalog",
            3 => "config",
            6 => "storage",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::SkillNotFound,
            Self::RoleNotFound,
            Self::IndustryNotFound,
            Self::CatalogInvalid,
            Self::CatalogParseError,
            Self::ConfigInvalid,
            Self::SerializationError,
            Self::IoError,
            Self::InternalError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
