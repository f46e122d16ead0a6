//! Query surface over a loaded catalog.
//!
//! [`SkillQueries`] is the single entry point the CLI (or any other
//! presentation layer) calls: list skills, resolve a hierarchy path, and run
//! the two comparators. It holds the store behind an `Arc` so clones are
//! cheap and every clone reads the same immutable catalog.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::CatalogStore;
use crate::core::{
    HierarchyPath, IndustryResult, Skill, TransferResult, compare_all_industries,
    compare_industry, compare_roles, hierarchy,
};
use crate::error::{Lookup, Result, StructuredError, VsError, suggest_similar_ids};

/// Maximum "did you mean" candidates attached to an error.
const MAX_CANDIDATES: usize = 3;

/// One row of the skill listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub roles: usize,
    pub industries: usize,
}

impl From<&Skill> for SkillSummary {
    fn from(skill: &Skill) -> Self {
        Self {
            id: skill.id.clone(),
            name: skill.name.clone(),
            category: skill.category.clone(),
            roles: skill.roles.len(),
            industries: skill.industry_ids().count(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SkillQueries {
    store: Arc<CatalogStore>,
}

impl SkillQueries {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn builtin() -> Result<Self> {
        CatalogStore::builtin().map(Self::new)
    }

    #[must_use]
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Every skill, in catalog order.
    pub fn list_skills(&self) -> impl ExactSizeIterator<Item = &Skill> {
        self.store.list_skills()
    }

    pub fn summaries(&self) -> Vec<SkillSummary> {
        self.list_skills().map(SkillSummary::from).collect()
    }

    pub fn get_skill(&self, skill_id: &str) -> Result<&Skill> {
        self.store.get_skill(skill_id)
    }

    pub fn resolve_hierarchy(&self, skill_id: &str) -> Result<HierarchyPath> {
        hierarchy::resolve(&self.store, skill_id)
    }

    pub fn compare_roles(
        &self,
        skill_id: &str,
        source_role_id: &str,
        target_role_id: &str,
    ) -> Result<TransferResult> {
        compare_roles(&self.store, skill_id, source_role_id, target_role_id)
    }

    /// Compare roles, filling a missing source or target from the skill's
    /// default pair (first and second role in catalog order).
    pub fn compare_roles_or_default(
        &self,
        skill_id: &str,
        source_role_id: Option<&str>,
        target_role_id: Option<&str>,
    ) -> Result<TransferResult> {
        let (source, target) = match (source_role_id, target_role_id) {
            (Some(source), Some(target)) => (source, target),
            (source, target) => {
                let (default_source, default_target) = self.store.default_role_pair(skill_id)?;
                (
                    source.unwrap_or(default_source),
                    target.unwrap_or(default_target),
                )
            }
        };
        self.compare_roles(skill_id, source, target)
    }

    pub fn compare_industry(&self, skill_id: &str, industry_id: &str) -> Result<IndustryResult> {
        compare_industry(&self.store, skill_id, industry_id)
    }

    pub fn compare_all_industries(&self, skill_id: &str) -> Result<Vec<IndustryResult>> {
        compare_all_industries(&self.store, skill_id)
    }

    /// Known identifiers close to the one that failed to resolve.
    #[must_use]
    pub fn did_you_mean(&self, lookup: &Lookup) -> Vec<String> {
        match lookup {
            Lookup::Skill { skill_id } => {
                suggest_similar_ids(skill_id, self.store.skill_ids(), MAX_CANDIDATES)
            }
            Lookup::Role { skill_id, role_id } => match self.store.get_skill(skill_id) {
                Ok(skill) => suggest_similar_ids(role_id, skill.role_ids(), MAX_CANDIDATES),
                Err(_) => Vec::new(),
            },
            Lookup::Industry { industry_id } => suggest_similar_ids(
                industry_id,
                self.store.industry_annotations().map(|(id, _)| id),
                MAX_CANDIDATES,
            ),
        }
    }

    /// Structured form of an error, with "did you mean" candidates for
    /// unknown identifiers.
    #[must_use]
    pub fn structured_error(&self, err: &VsError) -> StructuredError {
        let structured = err.to_structured();
        match err.lookup() {
            Some(lookup) => structured.with_candidates(self.did_you_mean(lookup)),
            None => structured,
        }
    }
}
