//! Error handling for vskill.
//!
//! This module provides:
//! - [`VsError`]: The main error enum for all catalog and query operations
//! - [`Lookup`]: Which identifier failed to resolve for a `NotFound`
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Rich error type with suggestions and context

mod codes;
mod suggestions;

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;
pub use suggestions::{suggest_for_error, suggest_similar_ids};

/// The identifier that failed to resolve against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Lookup {
    Skill { skill_id: String },
    Role { skill_id: String, role_id: String },
    Industry { industry_id: String },
}

impl Lookup {
    pub fn skill(skill_id: impl Into<String>) -> Self {
        Self::Skill {
            skill_id: skill_id.into(),
        }
    }

    pub fn role(skill_id: impl Into<String>, role_id: impl Into<String>) -> Self {
        Self::Role {
            skill_id: skill_id.into(),
            role_id: role_id.into(),
        }
    }

    pub fn industry(industry_id: impl Into<String>) -> Self {
        Self::Industry {
            industry_id: industry_id.into(),
        }
    }

    /// The identifier that was not found.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Skill { skill_id } => skill_id,
            Self::Role { role_id, .. } => role_id,
            Self::Industry { industry_id } => industry_id,
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skill { skill_id } => write!(f, "skill '{skill_id}'"),
            Self::Role { skill_id, role_id } => {
                write!(f, "role '{role_id}' for skill '{skill_id}'")
            }
            Self::Industry { industry_id } => write!(f, "industry '{industry_id}'"),
        }
    }
}

/// A single problem found while validating a catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogIssue {
    /// Skill the issue belongs to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<String>,
    pub message: String,
}

impl CatalogIssue {
    pub fn catalog(message: impl Into<String>) -> Self {
        Self {
            skill_id: None,
            message: message.into(),
        }
    }

    pub fn skill(skill_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            skill_id: Some(skill_id.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.skill_id {
            Some(id) => write!(f, "{id}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Main error type for vskill operations.
#[derive(Error, Debug)]
pub enum VsError {
    #[error("Not found: {0}")]
    NotFound(Lookup),

    #[error("Invalid catalog {source_name}: {} issue(s), first: {}", .issues.len(), first_issue(.issues))]
    InvalidCatalog {
        source_name: String,
        issues: Vec<CatalogIssue>,
    },

    #[error("Catalog parse error: {0}")]
    CatalogParse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn first_issue(issues: &[CatalogIssue]) -> String {
    issues
        .first()
        .map_or_else(|| "none".to_string(), ToString::to_string)
}

impl VsError {
    pub fn skill_not_found(skill_id: impl Into<String>) -> Self {
        Self::NotFound(Lookup::skill(skill_id))
    }

    pub fn role_not_found(skill_id: impl Into<String>, role_id: impl Into<String>) -> Self {
        Self::NotFound(Lookup::role(skill_id, role_id))
    }

    pub fn industry_not_found(industry_id: impl Into<String>) -> Self {
        Self::NotFound(Lookup::industry(industry_id))
    }

    /// The failed lookup, if this is a `NotFound`.
    #[must_use]
    pub const fn lookup(&self) -> Option<&Lookup> {
        match self {
            Self::NotFound(lookup) => Some(lookup),
            _ => None,
        }
    }

    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(Lookup::Skill { .. }) => ErrorCode::SkillNotFound,
            Self::NotFound(Lookup::Role { .. }) => ErrorCode::RoleNotFound,
            Self::NotFound(Lookup::Industry { .. }) => ErrorCode::IndustryNotFound,
            Self::InvalidCatalog { .. } => ErrorCode::CatalogInvalid,
            Self::CatalogParse(_) => ErrorCode::CatalogParseError,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) | Self::Yaml(_) => ErrorCode::SerializationError,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::NotFound(lookup) => serde_json::to_value(lookup).ok(),
            Self::InvalidCatalog {
                source_name,
                issues,
            } => Some(serde_json::json!({
                "source": source_name,
                "issues": issues.iter().map(ToString::to_string).collect::<Vec<_>>(),
            })),
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_vs_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "SKILL_NOT_FOUND")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 101)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "lookup", "catalog", "config")
    pub category: String,
}

impl StructuredError {
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn from_vs_error(err: &VsError) -> Self {
        let code = err.code();
        let context = err.context();
        let suggestion = suggest_for_error(code, context.as_ref());

        Self {
            code,
            numeric_code: code.numeric(),
            message: err.to_string(),
            suggestion,
            context,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }

    /// Add context to this error, regenerating the suggestion.
    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self.suggestion = suggest_for_error(self.code, self.context.as_ref());
        self
    }

    /// Attach "did you mean" candidates for an unknown identifier.
    #[must_use]
    pub fn with_candidates(self, candidates: Vec<String>) -> Self {
        if candidates.is_empty() {
            return self;
        }
        let mut context = self.context.clone().unwrap_or_else(|| serde_json::json!({}));
        if let Some(map) = context.as_object_mut() {
            map.insert("did_you_mean".to_string(), Value::from(candidates));
        }
        self.with_context(context)
    }
}

impl fmt::Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<&VsError> for StructuredError {
    fn from(err: &VsError) -> Self {
        Self::from_vs_error(err)
    }
}

/// Result type alias using `VsError`.
pub type Result<T> = std::result::Result<T, VsError>;
