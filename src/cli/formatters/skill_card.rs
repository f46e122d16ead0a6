//! Skill card formatter for displaying one skill in full

use serde::Serialize;

use crate::cli::formatters::{push_context, push_expressions};
use crate::cli::output::{Formattable, HumanLayout, tsv_row};
use crate::core::Skill;

/// A formatted view of a skill for display
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct SkillCard<'a> {
    pub skill: &'a Skill,
}

impl<'a> SkillCard<'a> {
    pub const fn new(skill: &'a Skill) -> Self {
        Self { skill }
    }
}

impl Formattable for SkillCard<'_> {
    fn format_human(&self) -> String {
        let skill = self.skill;
        let mut layout = HumanLayout::new();
        layout.title(&skill.name);
        layout.kv("ID", &skill.id);
        layout.kv("Skill Area", &skill.category);
        layout.kv(
            "Roles",
            &skill.role_ids().collect::<Vec<_>>().join(", "),
        );
        if skill.is_industry_sensitive() {
            layout.kv(
                "Industries",
                &skill.industry_ids().collect::<Vec<_>>().join(", "),
            );
        }

        layout.blank().section("Core Expressions");
        push_expressions(&mut layout, "-", &skill.core_expressions);

        for (role_id, role) in &skill.roles {
            layout
                .blank()
                .section(&format!("Role: {} ({role_id})", role.title));
            push_expressions(&mut layout, "+", &role.expressions);
            layout.blank();
            push_context(&mut layout, &role.execution_context);
        }

        if let Some(industries) = &skill.industries {
            for (industry_id, expressions) in industries {
                layout
                    .blank()
                    .section(&format!("Industry: {industry_id}"));
                push_expressions(&mut layout, "+", expressions);
            }
        }

        layout.build()
    }

    fn format_plain(&self) -> String {
        format!(
            "{} {} ({})",
            self.skill.id, self.skill.name, self.skill.category
        )
    }

    fn format_tsv(&self) -> String {
        let skill = self.skill;
        let mut rows = vec![tsv_row(["layer", "key", "expression"])];
        rows.extend(
            skill
                .core_expressions
                .iter()
                .map(|expr| tsv_row(["core", "", expr.as_str()])),
        );
        for (role_id, role) in &skill.roles {
            rows.extend(
                role.expressions
                    .iter()
                    .map(|expr| tsv_row(["role", role_id.as_str(), expr.as_str()])),
            );
        }
        if let Some(industries) = &skill.industries {
            for (industry_id, expressions) in industries {
                rows.extend(
                    expressions
                        .iter()
                        .map(|expr| tsv_row(["industry", industry_id.as_str(), expr.as_str()])),
                );
            }
        }
        rows.join("\n")
    }
}
