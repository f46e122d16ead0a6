//! Transfer Comparator
//!
//! Compares one skill across a source and a target role. Transfer is a
//! property of the catalog layout: the core always moves with the worker,
//! the source role's context is left behind and the target role's context
//! must be acquired. The two role lists are never diffed against each other;
//! a string that happens to appear in both is reported on both sides.

use serde::Serialize;
use tracing::debug;

use crate::catalog::CatalogStore;
use crate::core::hierarchy::HierarchyPath;
use crate::core::skill::ExecutionContext;
use crate::error::Result;

/// Outcome of moving a skill from one role to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferResult {
    pub skill_id: String,
    pub skill_name: String,
    /// Skill Area; identical on both sides of the move
    pub category: String,
    pub source_role: String,
    pub target_role: String,
    pub source_title: String,
    pub target_title: String,
    /// Retained core expressions, the same for every role pair
    pub core: Vec<String>,
    /// Source-only context expressions
    pub left_behind: Vec<String>,
    /// Target-only context expressions
    pub newly_required: Vec<String>,
    pub source_context: ExecutionContext,
    pub target_context: ExecutionContext,
}

impl TransferResult {
    /// Source and target are the same role.
    #[must_use]
    pub fn is_same_role(&self) -> bool {
        self.source_role == self.target_role
    }

    /// Level 4 summary of the move, e.g. "5 Core + 3 New".
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} Core + {} New",
            self.core.len(),
            self.newly_required.len()
        )
    }

    /// The hierarchy path with Level 1 bound to this transition.
    #[must_use]
    pub fn hierarchy(&self) -> HierarchyPath {
        HierarchyPath::new(&self.skill_id, &self.category, &self.skill_name, &self.core)
            .bind_transition(&self.source_title, &self.target_title, self.summary())
    }
}

/// Compare a skill between a source and a target role.
///
/// Fails with `NotFound` naming the skill, or the first role that does not
/// resolve.
pub fn compare_roles(
    store: &CatalogStore,
    skill_id: &str,
    source_role_id: &str,
    target_role_id: &str,
) -> Result<TransferResult> {
    let skill = store.get_skill(skill_id)?;
    let source = store.get_role(skill_id, source_role_id)?;
    let target = store.get_role(skill_id, target_role_id)?;

    let result = TransferResult {
        skill_id: skill.id.clone(),
        skill_name: skill.name.clone(),
        category: skill.category.clone(),
        source_role: source_role_id.to_string(),
        target_role: target_role_id.to_string(),
        source_title: source.title.clone(),
        target_title: target.title.clone(),
        core: skill.core_expressions.clone(),
        left_behind: source.expressions.clone(),
        newly_required: target.expressions.clone(),
        source_context: source.execution_context.clone(),
        target_context: target.execution_context.clone(),
    };

    debug!(
        skill_id,
        source = source_role_id,
        target = target_role_id,
        core = result.core.len(),
        left_behind = result.left_behind.len(),
        newly_required = result.newly_required.len(),
        "compared roles"
    );

    Ok(result)
}
