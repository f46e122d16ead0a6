//! Hierarchy Resolver
//!
//! Places a skill in the fixed 4-level ontology:
//!
//! 1. Occupation / Role (variable)
//! 2. Skill Area (stable)
//! 3. Verified Skill (stable)
//! 4. Expression (adapts to the occupation)
//!
//! Resolution is role-agnostic: Level 1 stays unbound until a caller picks a
//! role or a role transition.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::catalog::CatalogStore;
use crate::core::skill::Skill;
use crate::error::Result;

/// Maximum number of core expressions shown at Level 4.
pub const EXPRESSION_SAMPLE_LIMIT: usize = 2;

/// A rank in the 4-level skill ontology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HierarchyLevel {
    Occupation,
    SkillArea,
    VerifiedSkill,
    Expression,
}

impl HierarchyLevel {
    pub const ALL: [Self; 4] = [
        Self::Occupation,
        Self::SkillArea,
        Self::VerifiedSkill,
        Self::Expression,
    ];

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Occupation => 1,
            Self::SkillArea => 2,
            Self::VerifiedSkill => 3,
            Self::Expression => 4,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Occupation => "Occupation Group (Role)",
            Self::SkillArea => "Skill Area",
            Self::VerifiedSkill => "Verified Skill",
            Self::Expression => "Expression",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Occupation => "The job a skill is exercised in. Changes when a worker moves.",
            Self::SkillArea => "A stable grouping of related skills.",
            Self::VerifiedSkill => "A portable, transferable unit of work.",
            Self::Expression => "A concrete behavior, either core or context-specific.",
        }
    }

    /// Levels 2 and 3 hold across a role change; 1 and 4 do not.
    #[must_use]
    pub const fn is_stable(self) -> bool {
        matches!(self, Self::SkillArea | Self::VerifiedSkill)
    }
}

impl fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}: {}", self.number(), self.label())
    }
}

/// What occupies Level 1 of a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OccupationSlot {
    /// Shape only; no occupation chosen yet
    Unbound,
    Role {
        title: String,
    },
    Transition {
        source_title: String,
        target_title: String,
    },
}

impl OccupationSlot {
    /// ASCII rendering, with `->` between transition titles.
    #[must_use]
    pub fn plain(&self) -> String {
        match self {
            Self::Transition {
                source_title,
                target_title,
            } => format!("{source_title} -> {target_title}"),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for OccupationSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbound => f.write_str("(any occupation)"),
            Self::Role { title } => f.write_str(title),
            Self::Transition {
                source_title,
                target_title,
            } => write!(f, "{source_title} → {target_title}"),
        }
    }
}

/// One rendered rank of a [`HierarchyPath`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyEntry {
    pub level: HierarchyLevel,
    pub number: u8,
    pub label: &'static str,
    pub stable: bool,
    pub values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A skill's position in the hierarchy, Level 1 through Level 4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyPath {
    pub skill_id: String,
    pub occupation: OccupationSlot,
    pub skill_area: String,
    pub verified_skill: String,
    /// Representative core expressions, never more than
    /// [`EXPRESSION_SAMPLE_LIMIT`]
    pub expressions: Vec<String>,
    /// Count summary once bound to a transition, e.g. "5 Core + 3 New"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression_summary: Option<String>,
}

impl HierarchyPath {
    pub fn new(
        skill_id: impl Into<String>,
        skill_area: impl Into<String>,
        verified_skill: impl Into<String>,
        core_expressions: &[String],
    ) -> Self {
        Self {
            skill_id: skill_id.into(),
            occupation: OccupationSlot::Unbound,
            skill_area: skill_area.into(),
            verified_skill: verified_skill.into(),
            expressions: core_expressions
                .iter()
                .take(EXPRESSION_SAMPLE_LIMIT)
                .cloned()
                .collect(),
            expression_summary: None,
        }
    }

    pub fn for_skill(skill: &Skill) -> Self {
        Self::new(&skill.id, &skill.category, &skill.name, &skill.core_expressions)
    }

    #[must_use]
    pub fn bind_role(mut self, title: impl Into<String>) -> Self {
        self.occupation = OccupationSlot::Role {
            title: title.into(),
        };
        self
    }

    #[must_use]
    pub fn bind_transition(
        mut self,
        source_title: impl Into<String>,
        target_title: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        self.occupation = OccupationSlot::Transition {
            source_title: source_title.into(),
            target_title: target_title.into(),
        };
        self.expression_summary = Some(summary.into());
        self
    }

    #[must_use]
    pub const fn is_bound(&self) -> bool {
        !matches!(self.occupation, OccupationSlot::Unbound)
    }

    /// The four levels in order.
    #[must_use]
    pub fn levels(&self) -> [HierarchyEntry; 4] {
        HierarchyLevel::ALL.map(|level| {
            let (values, note) = match level {
                HierarchyLevel::Occupation => (vec![self.occupation.to_string()], None),
                HierarchyLevel::SkillArea => (vec![self.skill_area.clone()], None),
                HierarchyLevel::VerifiedSkill => (vec![self.verified_skill.clone()], None),
                HierarchyLevel::Expression => {
                    (self.expressions.clone(), self.expression_summary.clone())
                }
            };
            HierarchyEntry {
                level,
                number: level.number(),
                label: level.label(),
                stable: level.is_stable(),
                values,
                note,
            }
        })
    }
}

/// Resolve a skill's hierarchy path.
pub fn resolve(store: &CatalogStore, skill_id: &str) -> Result<HierarchyPath> {
    let skill = store.get_skill(skill_id)?;
    let path = HierarchyPath::for_skill(skill);
    trace!(skill_id, area = %path.skill_area, "resolved hierarchy");
    Ok(path)
}
