use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;

use crate::catalog::CatalogStore;
use crate::cli::formatters::push_expressions;
use crate::cli::output::{Formattable, HumanLayout, tsv_row};
use crate::core::{AttributedExpression, IndustryResult, Skill, attribute_industry};

/// Industry comparisons for one skill
#[derive(Debug, Clone, Serialize)]
pub struct IndustryReport {
    pub skill_id: String,
    pub skill_name: String,
    pub core: Vec<String>,
    pub comparisons: Vec<IndustryComparison>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryComparison {
    #[serde(flatten)]
    pub result: IndustryResult,
    pub expressions: Vec<AttributedExpression>,
}

impl IndustryReport {
    pub fn new(skill: &Skill, results: Vec<IndustryResult>) -> Self {
        Self {
            skill_id: skill.id.clone(),
            skill_name: skill.name.clone(),
            core: skill.core_expressions.clone(),
            comparisons: results
                .into_iter()
                .map(|result| IndustryComparison {
                    expressions: attribute_industry(&result),
                    result,
                })
                .collect(),
        }
    }
}

impl Formattable for IndustryReport {
    fn format_human(&self) -> String {
        let mut layout = HumanLayout::new();
        layout.title(&format!("Industry Context: {}", self.skill_name));

        if self.comparisons.is_empty() {
            layout.push_line(format!(
                "{} carries no industry-specific expressions",
                self.skill_id
            ));
            return layout.build();
        }

        layout.section(&format!("Core ({})", self.core.len()));
        push_expressions(&mut layout, "-", &self.core);

        for comparison in &self.comparisons {
            let result = &comparison.result;
            layout.blank().section(&format!(
                "{} ({})",
                result.display_title(),
                result.industry_id
            ));
            if let (Some(risk), Some(task)) = (&result.risk, &result.task) {
                layout.kv("Risk", &risk.red().to_string());
                layout.kv("Task", task);
            }
            push_expressions(&mut layout, "+", &result.industry_expressions);
        }
        layout.build()
    }

    fn format_plain(&self) -> String {
        self.comparisons
            .iter()
            .flat_map(|comparison| {
                let id = &comparison.result.industry_id;
                comparison
                    .result
                    .industry_expressions
                    .iter()
                    .map(move |expr| format!("{id}: {expr}"))
            })
            .join("\n")
    }

    fn format_tsv(&self) -> String {
        let mut rows = vec![tsv_row(["industry", "layer", "expression"])];
        for comparison in &self.comparisons {
            let id = comparison.result.industry_id.as_str();
            rows.extend(
                comparison
                    .expressions
                    .iter()
                    .map(|expr| tsv_row([id, expr.layer.key(), expr.text.as_str()])),
            );
        }
        rows.join("\n")
    }
}

/// One row of the industry annotation table
#[derive(Debug, Clone, Serialize)]
pub struct IndustryRow {
    pub id: String,
    pub title: String,
    pub risk: String,
    pub task: String,
}

/// The industry annotation table
#[derive(Debug, Clone, Serialize)]
pub struct IndustryTable {
    pub industries: Vec<IndustryRow>,
}

impl IndustryTable {
    pub fn from_store(store: &CatalogStore) -> Self {
        Self {
            industries: store
                .industry_annotations()
                .map(|(id, annotation)| IndustryRow {
                    id: id.to_string(),
                    title: annotation.title.clone(),
                    risk: annotation.risk.clone(),
                    task: annotation.task.clone(),
                })
                .collect(),
        }
    }
}

impl Formattable for IndustryTable {
    fn format_human(&self) -> String {
        let mut layout = HumanLayout::new().with_key_width(10);
        layout.title("Industries");
        for (i, row) in self.industries.iter().enumerate() {
            if i > 0 {
                layout.blank();
            }
            layout.section(&format!("{} ({})", row.title, row.id));
            layout.kv("Risk", &row.risk);
            layout.kv("Task", &row.task);
        }
        layout.build()
    }

    fn format_plain(&self) -> String {
        self.industries
            .iter()
            .map(|row| format!("{} {} - {}", row.id, row.title, row.risk))
            .join("\n")
    }

    fn format_tsv(&self) -> String {
        let mut rows = vec![tsv_row(["id", "title", "risk", "task"])];
        rows.extend(self.industries.iter().map(|row| {
            tsv_row([
                row.id.as_str(),
                row.title.as_str(),
                row.risk.as_str(),
                row.task.as_str(),
            ])
        }));
        rows.join("\n")
    }
}
