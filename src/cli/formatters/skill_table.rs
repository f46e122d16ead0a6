use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;

use crate::cli::output::{Formattable, tsv_row};
use crate::query::SkillSummary;

/// The skill listing
#[derive(Debug, Clone, Serialize)]
pub struct SkillTable {
    pub count: usize,
    pub skills: Vec<SkillSummary>,
}

impl SkillTable {
    pub fn new(skills: Vec<SkillSummary>) -> Self {
        Self {
            count: skills.len(),
            skills,
        }
    }
}

impl Formattable for SkillTable {
    fn format_human(&self) -> String {
        if self.skills.is_empty() {
            return "No skills in catalog".dimmed().to_string();
        }

        let mut lines = vec![
            format!(
                "{:16} {:10} {:>5} {:>10}  {}",
                "ID".bold(),
                "AREA".bold(),
                "ROLES".bold(),
                "INDUSTRIES".bold(),
                "NAME".bold()
            ),
            "─".repeat(84).dimmed().to_string(),
        ];
        for skill in &self.skills {
            lines.push(format!(
                "{:16} {:10} {:>5} {:>10}  {}",
                skill.id, skill.category, skill.roles, skill.industries, skill.name
            ));
        }
        lines.push(String::new());
        lines.push(format!("{} {} skills", "Total:".dimmed(), self.count));
        lines.join("\n")
    }

    fn format_plain(&self) -> String {
        self.skills
            .iter()
            .map(|skill| format!("{} {}", skill.id, skill.name))
            .join("\n")
    }

    fn format_tsv(&self) -> String {
        let mut rows = vec![tsv_row(["id", "category", "roles", "industries", "name"])];
        rows.extend(self.skills.iter().map(|skill| {
            tsv_row([
                skill.id.clone(),
                skill.category.clone(),
                skill.roles.to_string(),
                skill.industries.to_string(),
                skill.name.clone(),
            ])
        }));
        rows.join("\n")
    }
}
