//! Context Comparator
//!
//! Holds a skill's core constant and swaps in the expressions one industry
//! adds, along with that industry's risk/task annotation from the catalog.

use serde::Serialize;
use tracing::debug;

use crate::catalog::CatalogStore;
use crate::error::Result;

/// A skill viewed through one industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndustryResult {
    pub skill_id: String,
    pub skill_name: String,
    pub industry_id: String,
    /// Display title from the annotation table
    pub title: Option<String>,
    pub risk: Option<String>,
    pub task: Option<String>,
    /// Core expressions, unchanged across industries
    pub core: Vec<String>,
    /// Empty when the skill is not industry-sensitive or lacks this industry
    pub industry_expressions: Vec<String>,
}

impl IndustryResult {
    #[must_use]
    pub fn has_industry_context(&self) -> bool {
        !self.industry_expressions.is_empty()
    }

    #[must_use]
    pub const fn is_annotated(&self) -> bool {
        self.risk.is_some()
    }

    /// Title if annotated, otherwise the raw industry id.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.industry_id)
    }
}

/// Compare a skill within one industry.
///
/// Only an unknown skill is an error. An industry the skill does not carry
/// yields empty `industry_expressions`; an industry without an annotation
/// yields empty `title`/`risk`/`task`.
pub fn compare_industry(
    store: &CatalogStore,
    skill_id: &str,
    industry_id: &str,
) -> Result<IndustryResult> {
    let skill = store.get_skill(skill_id)?;
    let annotation = store.industry_annotation(industry_id).ok();

    let result = IndustryResult {
        skill_id: skill.id.clone(),
        skill_name: skill.name.clone(),
        industry_id: industry_id.to_string(),
        title: annotation.map(|a| a.title.clone()),
        risk: annotation.map(|a| a.risk.clone()),
        task: annotation.map(|a| a.task.clone()),
        core: skill.core_expressions.clone(),
        industry_expressions: skill.industry_expressions(industry_id).to_vec(),
    };

    debug!(
        skill_id,
        industry_id,
        annotated = result.is_annotated(),
        industry_expressions = result.industry_expressions.len(),
        "compared industry"
    );

    Ok(result)
}

/// One comparison per industry the skill carries, in catalog order.
pub fn compare_all_industries(store: &CatalogStore, skill_id: &str) -> Result<Vec<IndustryResult>> {
    store
        .industries_for(skill_id)?
        .into_iter()
        .map(|industry_id| compare_industry(store, skill_id, industry_id))
        .collect()
}
