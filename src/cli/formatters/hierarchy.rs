use std::fmt::Write;

use console::style;
use serde::Serialize;

use crate::cli::output::{Formattable, HumanLayout, tsv_row};
use crate::core::{HierarchyEntry, HierarchyLevel, HierarchyPath};

/// A resolved hierarchy path with its four rendered levels
#[derive(Debug, Clone, Serialize)]
pub struct HierarchyView {
    #[serde(flatten)]
    pub path: HierarchyPath,
    pub levels: [HierarchyEntry; 4],
}

impl HierarchyView {
    pub fn new(path: HierarchyPath) -> Self {
        let levels = path.levels();
        Self { path, levels }
    }
}

impl Formattable for HierarchyView {
    fn format_human(&self) -> String {
        let mut layout = HumanLayout::new();
        layout.title(&format!("Skill Hierarchy: {}", self.path.skill_id));

        for entry in &self.levels {
            let stability = if entry.stable { "stable" } else { "variable" };
            layout.push_line(format!(
                "{} {}  {}",
                style(format!("Level {}", entry.number)).bold(),
                entry.label,
                style(format!("({stability})")).dim()
            ));
            for value in &entry.values {
                layout.push_line(format!("    {value}"));
            }
            if let Some(note) = &entry.note {
                layout.push_line(format!("    {}", style(note).italic()));
            }
        }
        layout.build()
    }

    fn format_plain(&self) -> String {
        self.levels
            .iter()
            .map(|entry| {
                let values = match entry.level {
                    HierarchyLevel::Occupation => self.path.occupation.plain(),
                    _ => entry.values.join("; "),
                };
                let mut line = format!("{} {}: {values}", entry.number, entry.label);
                if let Some(note) = &entry.note {
                    let _ = write!(line, " [{note}]");
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_tsv(&self) -> String {
        let mut rows = vec![tsv_row(["level", "label", "stable", "value"])];
        for entry in &self.levels {
            for value in &entry.values {
                rows.push(tsv_row([
                    entry.number.to_string(),
                    entry.label.to_string(),
                    entry.stable.to_string(),
                    value.clone(),
                ]));
            }
        }
        rows.join("\n")
    }
}
