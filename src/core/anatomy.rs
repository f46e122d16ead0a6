//! Skill anatomy: the three concentric expression layers and the naming
//! formula every Verified Skill name follows.

use std::fmt;

use serde::Serialize;

use crate::core::context::IndustryResult;
use crate::core::transfer::TransferResult;

/// A concentric layer of a skill, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpressionLayer {
    Core,
    Career,
    Execution,
}

impl ExpressionLayer {
    pub const ALL: [Self; 3] = [Self::Core, Self::Career, Self::Execution];

    /// Machine name, as serialized.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Career => "career",
            Self::Execution => "execution",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Core => "1. The Basics (Core Skill)",
            Self::Career => "2. Role Expectations (Career Context)",
            Self::Execution => "3. Work Environment (Execution Context)",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Core => {
                "The fundamental tasks that never change. You take these with you to any job."
            }
            Self::Career => "Depends on your job title. Higher levels require more complex work.",
            Self::Execution => "Where you work (Industry) and how you work (Tools).",
        }
    }

    /// Framework term for expressions in this layer.
    #[must_use]
    pub const fn term(self) -> &'static str {
        match self {
            Self::Core => "Core Skill Expressions",
            Self::Career => "Context-Expanding Skill Expressions",
            Self::Execution => "Execution Context",
        }
    }

    /// Only the core travels with the worker unchanged.
    #[must_use]
    pub const fn is_portable(self) -> bool {
        matches!(self, Self::Core)
    }
}

impl fmt::Display for ExpressionLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One part of the skill naming formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormulaPart {
    pub name: &'static str,
    pub role: &'static str,
    pub optional: bool,
}

/// Action + Result + Context
pub const NAMING_FORMULA: [FormulaPart; 3] = [
    FormulaPart {
        name: "The Action",
        role: "Action Verb",
        optional: false,
    },
    FormulaPart {
        name: "The Result",
        role: "Work Output",
        optional: false,
    },
    FormulaPart {
        name: "The Context",
        role: "Context",
        optional: true,
    },
];

/// Render the naming formula on one line.
#[must_use]
pub fn formula_line() -> String {
    NAMING_FORMULA
        .iter()
        .map(|part| {
            if part.optional {
                format!("[{}]", part.role)
            } else {
                part.role.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

/// An expression tagged with the layer it comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributedExpression {
    pub layer: ExpressionLayer,
    pub text: String,
}

impl AttributedExpression {
    fn tagged(layer: ExpressionLayer, texts: &[String]) -> impl Iterator<Item = Self> + '_ {
        texts.iter().map(move |text| Self {
            layer,
            text: text.clone(),
        })
    }
}

/// Layer every expression a worker needs in the target role.
#[must_use]
pub fn attribute_transfer(result: &TransferResult) -> Vec<AttributedExpression> {
    AttributedExpression::tagged(ExpressionLayer::Core, &result.core)
        .chain(AttributedExpression::tagged(
            ExpressionLayer::Career,
            &result.newly_required,
        ))
        .collect()
}

/// Layer every expression of a skill within one industry.
#[must_use]
pub fn attribute_industry(result: &IndustryResult) -> Vec<AttributedExpression> {
    AttributedExpression::tagged(ExpressionLayer::Core, &result.core)
        .chain(AttributedExpression::tagged(
            ExpressionLayer::Execution,
            &result.industry_expressions,
        ))
        .collect()
}
