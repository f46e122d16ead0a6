//! Catalog Store
//!
//! Holds the immutable skill taxonomy and the industry annotation table.
//! A store is built once at startup (from the embedded catalog or a YAML/JSON
//! file), validated, and never written to afterwards. Share it behind an
//! `Arc` for concurrent readers.

pub mod builtin;
pub mod validation;

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::config::CatalogConfig;
use crate::core::skill::{CatalogDocument, IndustryAnnotation, RoleVariant, Skill};
use crate::error::{CatalogIssue, Result, VsError};

pub use builtin::{BUILTIN_SOURCE, builtin_document, builtin_yaml};
pub use validation::{MIN_ROLES_PER_SKILL, validate_document};

/// Where a catalog was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str(BUILTIN_SOURCE),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Document syntax of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Pick the format from a file extension. Anything that is not `.json`
    /// is read as YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }

    /// Parse a catalog document in this format.
    pub fn parse(self, raw: &str, source: &CatalogSource) -> Result<CatalogDocument> {
        let parsed: std::result::Result<CatalogDocument, String> = match self {
            Self::Yaml => serde_yaml::from_str(raw).map_err(|err| err.to_string()),
            Self::Json => serde_json::from_str(raw).map_err(|err| err.to_string()),
        };
        parsed.map_err(|err| VsError::CatalogParse(format!("{source}: {err}")))
    }
}

/// The immutable, validated skill catalog.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    source: CatalogSource,
    skills: IndexMap<String, Skill>,
    annotations: IndexMap<String, IndustryAnnotation>,
}

impl CatalogStore {
    /// Load the embedded catalog.
    pub fn builtin() -> Result<Self> {
        Self::from_document(builtin_document()?, CatalogSource::Builtin, true)
    }

    /// Load the catalog selected by configuration.
    pub fn load(config: &CatalogConfig) -> Result<Self> {
        match config.path.as_deref() {
            Some(path) => Self::from_path(&expand_home(path), config.strict),
            None => Self::builtin(),
        }
    }

    /// Load and validate a catalog file (YAML, or JSON by extension).
    pub fn from_path(path: &Path, strict: bool) -> Result<Self> {
        let doc = read_document(path)?;
        Self::from_document(doc, CatalogSource::File(path.to_path_buf()), strict)
    }

    /// Validate a parsed document and build the store.
    ///
    /// In strict mode any validation issue fails the load. Otherwise issues
    /// are logged and the store is built anyway; a repeated skill id keeps
    /// its first definition.
    pub fn from_document(doc: CatalogDocument, source: CatalogSource, strict: bool) -> Result<Self> {
        let issues = validate_document(&doc);
        if !issues.is_empty() {
            if strict {
                return Err(VsError::InvalidCatalog {
                    source_name: source.to_string(),
                    issues,
                });
            }
            for issue in &issues {
                warn!(catalog = %source, "catalog issue: {issue}");
            }
        }

        let mut skills = IndexMap::with_capacity(doc.skills.len());
        for skill in doc.skills {
            skills.entry(skill.id.clone()).or_insert(skill);
        }

        debug!(
            catalog = %source,
            skills = skills.len(),
            industries = doc.industries.len(),
            "loaded skill catalog"
        );

        Ok(Self {
            source,
            skills,
            annotations: doc.industries,
        })
    }

    #[must_use]
    pub const fn source(&self) -> &CatalogSource {
        &self.source
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn get_skill(&self, skill_id: &str) -> Result<&Skill> {
        self.skills
            .get(skill_id)
            .ok_or_else(|| VsError::skill_not_found(skill_id))
    }

    /// Every skill, in catalog order.
    pub fn list_skills(&self) -> impl ExactSizeIterator<Item = &Skill> {
        self.skills.values()
    }

    pub fn skill_ids(&self) -> impl Iterator<Item = &str> {
        self.skills.keys().map(String::as_str)
    }

    pub fn get_role(&self, skill_id: &str, role_id: &str) -> Result<&RoleVariant> {
        self.get_skill(skill_id)?
            .role(role_id)
            .ok_or_else(|| VsError::role_not_found(skill_id, role_id))
    }

    /// Industry-specific expressions for a skill.
    ///
    /// Empty when the skill carries no industries map or does not list the
    /// industry; only an unknown skill is an error.
    pub fn get_industry_expressions(&self, skill_id: &str, industry_id: &str) -> Result<&[String]> {
        Ok(self.get_skill(skill_id)?.industry_expressions(industry_id))
    }

    /// The first two roles of a skill in catalog order.
    pub fn default_role_pair(&self, skill_id: &str) -> Result<(&str, &str)> {
        let skill = self.get_skill(skill_id)?;
        skill.default_role_pair().ok_or_else(|| VsError::InvalidCatalog {
            source_name: self.source.to_string(),
            issues: vec![CatalogIssue::skill(
                skill_id,
                format!("needs at least {MIN_ROLES_PER_SKILL} roles to be comparable"),
            )],
        })
    }

    pub fn industry_annotation(&self, industry_id: &str) -> Result<&IndustryAnnotation> {
        self.annotations
            .get(industry_id)
            .ok_or_else(|| VsError::industry_not_found(industry_id))
    }

    /// The annotation table, in catalog order.
    pub fn industry_annotations(&self) -> impl Iterator<Item = (&str, &IndustryAnnotation)> {
        self.annotations
            .iter()
            .map(|(id, annotation)| (id.as_str(), annotation))
    }

    /// Industry ids carried by a skill (empty for skills that are not
    /// industry-sensitive).
    pub fn industries_for(&self, skill_id: &str) -> Result<Vec<&str>> {
        Ok(self.get_skill(skill_id)?.industry_ids().collect())
    }
}

/// Read and parse a catalog file without validating it.
pub fn read_document(path: &Path) -> Result<CatalogDocument> {
    let raw = std::fs::read_to_string(path).map_err(|err| {
        VsError::CatalogParse(format!("read catalog {}: {err}", path.display()))
    })?;
    let source = CatalogSource::File(path.to_path_buf());
    CatalogFormat::from_path(path).parse(&raw, &source)
}

/// The unvalidated document selected by configuration, and where it came
/// from.
pub fn configured_document(config: &CatalogConfig) -> Result<(CatalogDocument, CatalogSource)> {
    match config.path.as_deref() {
        Some(path) => {
            let path = expand_home(path);
            Ok((read_document(&path)?, CatalogSource::File(path)))
        }
        None => Ok((builtin_document()?, CatalogSource::Builtin)),
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir().map_or_else(|| PathBuf::from(path), |home| home.join(rest)),
        None => PathBuf::from(path),
    }
}
