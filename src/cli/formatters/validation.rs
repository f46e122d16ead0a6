use colored::Colorize;
use serde::Serialize;

use crate::cli::output::{Formattable, HumanLayout, tsv_row};
use crate::error::CatalogIssue;

/// Outcome of validating a catalog document
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub source: String,
    pub skills: usize,
    pub valid: bool,
    pub issues: Vec<CatalogIssue>,
}

impl ValidationReport {
    pub fn new(source: impl Into<String>, skills: usize, issues: Vec<CatalogIssue>) -> Self {
        Self {
            source: source.into(),
            skills,
            valid: issues.is_empty(),
            issues,
        }
    }
}

impl Formattable for ValidationReport {
    fn format_human(&self) -> String {
        let mut layout = HumanLayout::new().with_key_width(10);
        layout.title("Catalog Validation");
        layout.kv("Source", &self.source);
        layout.kv("Skills", &self.skills.to_string());
        if self.valid {
            layout.kv("Result", &"valid".green().to_string());
            return layout.build();
        }
        layout.kv(
            "Result",
            &format!("{} issue(s)", self.issues.len()).red().to_string(),
        );
        layout.blank();
        for issue in &self.issues {
            layout.bullet(&issue.to_string());
        }
        layout.build()
    }

    fn format_plain(&self) -> String {
        if self.valid {
            return format!("{}: valid ({} skills)", self.source, self.skills);
        }
        let mut lines = vec![format!("{}: {} issue(s)", self.source, self.issues.len())];
        lines.extend(self.issues.iter().map(ToString::to_string));
        lines.join("\n")
    }

    fn format_tsv(&self) -> String {
        let mut rows = vec![tsv_row(["skill_id", "message"])];
        rows.extend(self.issues.iter().map(|issue| {
            tsv_row([
                issue.skill_id.as_deref().unwrap_or(""),
                issue.message.as_str(),
            ])
        }));
        rows.join("\n")
    }
}
